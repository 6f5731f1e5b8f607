use std::fmt;

use bytes::Bytes;
use stamp_core::{FlowError, ResponsePayload};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutput {
    pub bytes: Bytes,
    pub metadata: ResponseMetadata,
}

impl SubmitOutput {
    pub fn into_payload(self) -> ResponsePayload {
        ResponsePayload {
            bytes: self.bytes,
            content_type: self.metadata.content_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidPart,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidPart => write!(f, "invalid multipart field"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

impl From<SubmitError> for FlowError {
    fn from(err: SubmitError) -> Self {
        match err.kind {
            FailureKind::HttpStatus(status) => FlowError::Transport { status },
            _ => FlowError::unexpected(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_maps_to_transport() {
        let err = SubmitError::new(FailureKind::HttpStatus(503), "503 Service Unavailable");
        assert_eq!(FlowError::from(err), FlowError::Transport { status: 503 });
    }

    #[test]
    fn other_failures_keep_their_message() {
        let err = SubmitError::new(FailureKind::Network, "connection refused");
        assert_eq!(
            FlowError::from(err),
            FlowError::Unexpected {
                message: Some("connection refused".to_string())
            }
        );
    }
}
