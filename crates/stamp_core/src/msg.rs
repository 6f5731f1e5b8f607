use crate::{AttemptId, FilePart, FlowError, FlowKind, ReadId, ResponsePayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Platform started reading the file chosen in a form.
    FileReadStarted { flow: FlowKind, read: ReadId },
    /// A file read finished (or the file was cleared). Only the completion
    /// of the latest started read is applied.
    FileChosen {
        flow: FlowKind,
        read: ReadId,
        file: Option<FilePart>,
    },
    /// User edited a form's text input.
    TextChanged { flow: FlowKind, text: String },
    /// User changed a form's variant/size control.
    IntentChanged { flow: FlowKind, value: String },
    /// User clicked an animation type button.
    AnimationTypeClicked(String),
    /// User submitted a form.
    SubmitClicked { flow: FlowKind },
    /// Transport finished a submission.
    SubmitFinished {
        flow: FlowKind,
        attempt: AttemptId,
        result: Result<ResponsePayload, FlowError>,
    },
    /// The platform could not publish a successful response.
    ArtifactUnavailable { flow: FlowKind, message: String },
    /// Page is being hidden. `persisted` means it is entering the
    /// back/forward cache and may be shown again as is.
    PageHidden { persisted: bool },
}
