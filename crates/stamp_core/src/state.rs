use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, ArtifactView, FlowView, SelectionView};
use crate::{
    AttemptId, FlowKind, FlowPhase, FlowState, RenderInstruction, SelectionGroup, ANIMATION_TYPES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    flows: BTreeMap<FlowKind, FlowState>,
    animation_type: SelectionGroup,
    next_attempt: AttemptId,
    next_generation: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SelectionGroup::new(ANIMATION_TYPES.iter().copied()))
    }
}

impl AppState {
    /// State for a page whose animation-type picker declares `animation_type`.
    pub fn new(animation_type: SelectionGroup) -> Self {
        let flows = FlowKind::ALL
            .into_iter()
            .map(|kind| (kind, FlowState::new(kind)))
            .collect();
        Self {
            flows,
            animation_type,
            next_attempt: 1,
            next_generation: 1,
            dirty: false,
        }
    }

    pub fn flow(&self, kind: FlowKind) -> &FlowState {
        &self.flows[&kind]
    }

    pub(crate) fn flow_mut(&mut self, kind: FlowKind) -> &mut FlowState {
        self.flows
            .entry(kind)
            .or_insert_with(|| FlowState::new(kind))
    }

    pub fn animation_type(&self) -> &SelectionGroup {
        &self.animation_type
    }

    pub(crate) fn animation_type_mut(&mut self) -> &mut SelectionGroup {
        &mut self.animation_type
    }

    pub(crate) fn begin_attempt(&mut self, kind: FlowKind, intent: &str) -> AttemptId {
        let attempt = self.next_attempt;
        self.next_attempt += 1;
        let flow = self.flow_mut(kind);
        flow.phase = FlowPhase::Submitting { attempt };
        flow.in_flight_intent = Some(intent.to_string());
        flow.last_error = None;
        self.dirty = true;
        attempt
    }

    pub(crate) fn record_artifact(
        &mut self,
        kind: FlowKind,
        instruction: RenderInstruction,
        byte_len: usize,
    ) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let flow = self.flow_mut(kind);
        flow.phase = FlowPhase::Idle;
        flow.in_flight_intent = None;
        flow.artifact = Some(ArtifactView {
            instruction,
            byte_len,
            generation,
        });
        self.dirty = true;
    }

    pub(crate) fn record_failure(&mut self, kind: FlowKind, message: String) {
        let flow = self.flow_mut(kind);
        flow.phase = FlowPhase::Idle;
        flow.in_flight_intent = None;
        flow.last_error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn drop_artifact(&mut self, kind: FlowKind) {
        self.flow_mut(kind).artifact = None;
        self.dirty = true;
    }

    pub fn view(&self) -> AppViewModel {
        let flows = self
            .flows
            .values()
            .map(|flow| FlowView {
                kind: flow.kind(),
                loading_visible: flow.is_submitting(),
                preview_visible: flow
                    .artifact
                    .as_ref()
                    .is_some_and(|artifact| artifact.instruction.shows_preview()),
                download_filename: flow
                    .artifact
                    .as_ref()
                    .map(|artifact| artifact.instruction.suggested_filename().to_string()),
                artifact_generation: flow.artifact.as_ref().map(|artifact| artifact.generation),
                last_error: flow.last_error.clone(),
            })
            .collect();
        AppViewModel {
            flows,
            animation_type: SelectionView {
                options: self.animation_type.options().to_vec(),
                marked: self.animation_type.current_value().map(ToOwned::to_owned),
            },
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
