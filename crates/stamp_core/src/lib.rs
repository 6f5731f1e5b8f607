//! Stamp core: pure submission state machine, response classification and
//! view-model helpers.
mod artifact;
mod classify;
mod effect;
mod error;
mod flow;
mod messages;
mod msg;
mod request;
mod selection;
mod state;
mod update;
mod view_model;

pub use artifact::{ObjectUrlStore, ResourceHandle};
pub use classify::{
    classify, expected_payload, rule_for, rules_for, IntentRule, PayloadKind, RenderInstruction,
};
pub use effect::Effect;
pub use error::{FlowError, ValidationError};
pub use flow::{
    AttemptId, FilePart, FlowKind, FlowPhase, FlowState, FormState, ReadId, ResponsePayload,
};
pub use msg::Msg;
pub use request::{field, validate, FieldValue, SubmissionRequest};
pub use selection::{default_option, SelectionGroup, ANIMATION_TYPES};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ArtifactView, FlowView, SelectionView};
