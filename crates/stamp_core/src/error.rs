use thiserror::Error;

use crate::{messages, FlowKind};

/// Local form state that blocks a submission before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no file selected")]
    MissingFile,
    #[error("text is empty")]
    MissingText,
    #[error("no animation type available")]
    MissingSelection,
    #[error("unsupported value {value:?} for field {field}")]
    UnsupportedIntent { field: &'static str, value: String },
}

/// Why a single submission attempt ended without an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("server responded with status {status}")]
    Transport { status: u16 },
    #[error("{}", .message.as_deref().unwrap_or("unexpected failure"))]
    Unexpected { message: Option<String> },
}

impl FlowError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        FlowError::Unexpected {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Text shown to the user in the blocking notification.
    pub fn user_message(&self, flow: FlowKind) -> String {
        match self {
            FlowError::Validation(ValidationError::UnsupportedIntent { value, .. }) => {
                format!("{}{}: {value}", messages::ERROR_PREFIX, messages::UNSUPPORTED_CHOICE)
            }
            FlowError::Validation(_) => messages::missing_input(flow).to_string(),
            FlowError::Transport { .. } => {
                format!("{}{}", messages::ERROR_PREFIX, messages::transport_failure(flow))
            }
            FlowError::Unexpected { message } => format!(
                "{}{}",
                messages::ERROR_PREFIX,
                message.as_deref().unwrap_or(messages::UNKNOWN_ERROR)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_depend_on_flow() {
        let err = FlowError::from(ValidationError::MissingText);
        assert_eq!(err.user_message(FlowKind::Main), messages::MISSING_INPUT);
        assert_eq!(
            err.user_message(FlowKind::Animation),
            messages::MISSING_ANIMATION_INPUT
        );
    }

    #[test]
    fn transport_message_is_flow_specific() {
        let err = FlowError::Transport { status: 500 };
        assert_eq!(
            err.user_message(FlowKind::Static),
            "エラー: 画像生成に失敗しました"
        );
    }

    #[test]
    fn unexpected_without_message_uses_fallback() {
        let err = FlowError::unexpected("   ");
        assert_eq!(err, FlowError::Unexpected { message: None });
        assert_eq!(err.user_message(FlowKind::Main), "エラー: 不明なエラー");

        let err = FlowError::unexpected("connection reset");
        assert_eq!(err.user_message(FlowKind::Main), "エラー: connection reset");
    }
}
