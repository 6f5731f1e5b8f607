//! Stamp engine: multipart transport to the generation endpoints.
mod engine;
mod submit;
mod types;

pub use engine::run_submission;
pub use submit::{build_form, ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{FailureKind, ResponseMetadata, SubmitError, SubmitOutput};
