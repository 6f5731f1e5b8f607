use bytes::Bytes;

use crate::{AttemptId, FlowKind, RenderInstruction, SubmissionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `request` to its endpoint and report back with `Msg::SubmitFinished`.
    Submit {
        attempt: AttemptId,
        request: SubmissionRequest,
    },
    /// Blocking user-facing notification.
    Notify { flow: FlowKind, message: String },
    /// Hand response bytes to the flow's resource handle and render them.
    PresentArtifact {
        flow: FlowKind,
        bytes: Bytes,
        mime: Option<String>,
        instruction: RenderInstruction,
    },
    /// Release every flow's resource handle.
    ReleaseArtifacts,
}
