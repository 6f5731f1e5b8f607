use stamp_logging::{stamp_debug, stamp_info, stamp_warn};

use crate::{
    classify, expected_payload, AppState, AttemptId, Effect, FilePart, FlowError, FlowKind,
    FlowPhase, Msg, PayloadKind, ReadId, ResponsePayload, SubmissionRequest,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileReadStarted { flow, read } => {
            let flow_state = state.flow_mut(flow);
            flow_state.latest_read = Some(read);
            flow_state.read_pending = true;
            Vec::new()
        }
        Msg::FileChosen { flow, read, file } => file_chosen(&mut state, flow, read, file),
        Msg::TextChanged { flow, text } => {
            state.flow_mut(flow).form.text = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::IntentChanged { flow, value } => {
            state.flow_mut(flow).form.intent = value;
            state.mark_dirty();
            Vec::new()
        }
        Msg::AnimationTypeClicked(value) => {
            if state.animation_type_mut().select(&value) {
                state.mark_dirty();
            } else {
                stamp_debug!("animation type {value:?} ignored");
            }
            Vec::new()
        }
        Msg::SubmitClicked { flow } => submit(&mut state, flow),
        Msg::SubmitFinished {
            flow,
            attempt,
            result,
        } => finish(&mut state, flow, attempt, result),
        Msg::ArtifactUnavailable { flow, message } => {
            state.drop_artifact(flow);
            let error = FlowError::unexpected(message);
            vec![Effect::Notify {
                flow,
                message: error.user_message(flow),
            }]
        }
        Msg::PageHidden { persisted: true } => {
            stamp_debug!("page kept in back/forward cache; artifacts stay live");
            Vec::new()
        }
        Msg::PageHidden { persisted: false } => vec![Effect::ReleaseArtifacts],
    };

    (state, effects)
}

fn file_chosen(
    state: &mut AppState,
    flow: FlowKind,
    read: ReadId,
    file: Option<FilePart>,
) -> Vec<Effect> {
    let current = state.flow_mut(flow);
    if current.latest_read.is_some_and(|latest| latest != read) {
        stamp_debug!("{flow} stale file read {read} ignored");
        return Vec::new();
    }
    current.latest_read = Some(read);
    current.read_pending = false;
    current.form.file = file;
    let queued = std::mem::take(&mut current.submit_queued);
    state.mark_dirty();

    if queued {
        stamp_debug!("{flow} running submit queued behind file read {read}");
        submit(state, flow)
    } else {
        Vec::new()
    }
}

fn submit(state: &mut AppState, flow: FlowKind) -> Vec<Effect> {
    if state.flow(flow).is_submitting() {
        stamp_debug!("{flow} submit ignored: a submission is already in flight");
        return Vec::new();
    }
    if state.flow(flow).is_reading_file() {
        stamp_debug!("{flow} submit queued until the chosen file is read");
        state.flow_mut(flow).submit_queued = true;
        return Vec::new();
    }

    let animation_type = state.animation_type().current_value();
    let request = match SubmissionRequest::assemble(flow, state.flow(flow).form(), animation_type)
    {
        Ok(request) => request,
        Err(err) => {
            stamp_debug!("{flow} submit blocked: {err}");
            let message = FlowError::from(err).user_message(flow);
            return vec![Effect::Notify { flow, message }];
        }
    };

    let attempt = state.begin_attempt(flow, request.intent());
    stamp_info!(
        "{flow} submit attempt={attempt} endpoint={} intent={}",
        request.endpoint(),
        request.intent()
    );
    vec![Effect::Submit { attempt, request }]
}

fn finish(
    state: &mut AppState,
    flow: FlowKind,
    attempt: AttemptId,
    result: Result<ResponsePayload, FlowError>,
) -> Vec<Effect> {
    if state.flow(flow).phase() != (FlowPhase::Submitting { attempt }) {
        stamp_warn!("{flow} completion for stale attempt {attempt} ignored");
        return Vec::new();
    }

    let payload = match result {
        Ok(payload) => payload,
        Err(err) => return fail(state, flow, attempt, err),
    };

    // The form may have changed while the request was in flight.
    let intent = state.flow(flow).in_flight_intent().unwrap_or_default().to_string();
    let Some(expected) = expected_payload(flow, &intent) else {
        return fail(
            state,
            flow,
            attempt,
            FlowError::unexpected(format!("no rendering rule for {intent:?}")),
        );
    };
    let declared = payload
        .content_type
        .as_deref()
        .and_then(PayloadKind::from_content_type);
    let kind = match declared {
        Some(declared) if declared != expected => {
            stamp_warn!(
                "{flow} response declares {declared:?} but intent {intent:?} expects {expected:?}"
            );
            declared
        }
        Some(declared) => declared,
        None => expected,
    };

    let Some(instruction) = classify(flow, &intent, kind) else {
        return fail(
            state,
            flow,
            attempt,
            FlowError::unexpected(format!("no rendering rule for {intent:?}")),
        );
    };

    stamp_info!(
        "{flow} attempt={attempt} succeeded bytes={} file={}",
        payload.bytes.len(),
        instruction.suggested_filename()
    );
    state.record_artifact(flow, instruction.clone(), payload.bytes.len());
    vec![Effect::PresentArtifact {
        flow,
        bytes: payload.bytes,
        mime: payload.content_type,
        instruction,
    }]
}

fn fail(state: &mut AppState, flow: FlowKind, attempt: AttemptId, err: FlowError) -> Vec<Effect> {
    stamp_warn!("{flow} attempt={attempt} failed: {err}");
    let message = err.user_message(flow);
    state.record_failure(flow, message.clone());
    vec![Effect::Notify { flow, message }]
}
