use stamp_core::{AttemptId, FlowError, Msg, SubmissionRequest};
use stamp_logging::stamp_warn;

use crate::Submitter;

/// Runs one submit effect to completion and returns the message reporting it.
///
/// Every outcome, including transport errors, becomes a
/// `Msg::SubmitFinished`, so the flow always leaves its submitting state.
pub async fn run_submission(
    submitter: &dyn Submitter,
    attempt: AttemptId,
    request: SubmissionRequest,
) -> Msg {
    let flow = request.flow();
    let result = match submitter.submit(&request).await {
        Ok(output) => Ok(output.into_payload()),
        Err(err) => {
            stamp_warn!("{flow} attempt={attempt} transport failed: {err}");
            Err(FlowError::from(err))
        }
    };
    Msg::SubmitFinished {
        flow,
        attempt,
        result,
    }
}
