use std::fmt;

use bytes::Bytes;

use crate::view_model::ArtifactView;

/// Monotonic id handed out per submission; completions carry it back.
pub type AttemptId = u64;

/// Id the platform hands out each time it starts reading a chosen file.
pub type ReadId = u64;

/// The three independent forms on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlowKind {
    /// Static "main" image (`/create_main`).
    Main,
    /// Static stamp in one or two sizes (`/create_static`).
    Static,
    /// Animated stamp (`/create_animation`).
    Animation,
}

impl FlowKind {
    pub const ALL: [FlowKind; 3] = [FlowKind::Main, FlowKind::Static, FlowKind::Animation];

    pub fn endpoint(self) -> &'static str {
        match self {
            FlowKind::Main => "/create_main",
            FlowKind::Static => "/create_static",
            FlowKind::Animation => "/create_animation",
        }
    }

    /// Name of the form field carrying the intent discriminator.
    pub fn intent_field(self) -> &'static str {
        match self {
            FlowKind::Main | FlowKind::Animation => crate::field::VARIANT,
            FlowKind::Static => crate::field::SIZE,
        }
    }

    /// Intent used when the discriminator control is blank.
    pub fn default_intent(self) -> &'static str {
        match self {
            FlowKind::Main | FlowKind::Animation => "main",
            FlowKind::Static => "stamp",
        }
    }

    pub fn requires_animation_type(self) -> bool {
        matches!(self, FlowKind::Animation)
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Main => write!(f, "main"),
            FlowKind::Static => write!(f, "static"),
            FlowKind::Animation => write!(f, "animation"),
        }
    }
}

/// Resting states of a flow.
///
/// Validation, success and failure handling all run synchronously inside a
/// single `update` step, so a flow is only ever observed idle or waiting on
/// the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting { attempt: AttemptId },
}

/// A file chosen in a form's file input, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Bytes,
}

/// Raw values of one form's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub file: Option<FilePart>,
    pub text: String,
    pub intent: String,
}

/// Successful response body as handed back by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePayload {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    kind: FlowKind,
    pub(crate) form: FormState,
    pub(crate) phase: FlowPhase,
    pub(crate) in_flight_intent: Option<String>,
    pub(crate) artifact: Option<ArtifactView>,
    pub(crate) last_error: Option<String>,
    /// Latest file read started for this form; older completions are stale.
    pub(crate) latest_read: Option<ReadId>,
    pub(crate) read_pending: bool,
    /// Submit arrived while the file was still being read.
    pub(crate) submit_queued: bool,
}

impl FlowState {
    pub fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            form: FormState::default(),
            phase: FlowPhase::Idle,
            in_flight_intent: None,
            artifact: None,
            last_error: None,
            latest_read: None,
            read_pending: false,
            submit_queued: false,
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FlowPhase::Submitting { .. })
    }

    /// Intent of the request currently in flight.
    pub fn in_flight_intent(&self) -> Option<&str> {
        self.in_flight_intent.as_deref()
    }

    pub fn artifact(&self) -> Option<&ArtifactView> {
        self.artifact.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_reading_file(&self) -> bool {
        self.read_pending
    }

    pub fn submit_queued(&self) -> bool {
        self.submit_queued
    }
}
