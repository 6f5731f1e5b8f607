use crate::{FlowKind, RenderInstruction};

/// Rendering state of the last successful response of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactView {
    pub instruction: RenderInstruction,
    pub byte_len: usize,
    /// Bumped on every new artifact so renderers can tell replacements apart.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowView {
    pub kind: FlowKind,
    pub loading_visible: bool,
    pub preview_visible: bool,
    pub download_filename: Option<String>,
    pub artifact_generation: Option<u64>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionView {
    pub options: Vec<String>,
    pub marked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub flows: Vec<FlowView>,
    pub animation_type: SelectionView,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn flow(&self, kind: FlowKind) -> Option<&FlowView> {
        self.flows.iter().find(|flow| flow.kind == kind)
    }
}
