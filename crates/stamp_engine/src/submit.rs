use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use stamp_core::{FieldValue, SubmissionRequest};
use stamp_logging::stamp_debug;
use url::Url;

use crate::{FailureKind, ResponseMetadata, SubmitError, SubmitOutput};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Origin the endpoint paths are resolved against.
    pub base_url: Url,
    pub max_bytes: u64,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost/").expect("static url"),
            max_bytes: 50 * 1024 * 1024,
        }
    }
}

impl SubmitSettings {
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// Sends one submission and returns the raw response body.
///
/// Futures are not required to be `Send`: the browser runs everything on a
/// single thread.
#[async_trait::async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitOutput, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SubmitSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> SubmitError {
        SubmitError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

/// Multipart body carrying every field of `request`.
pub fn build_form(request: &SubmissionRequest) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for (name, value) in request.fields() {
        form = match value {
            FieldValue::Text(text) => form.text(name.clone(), text.clone()),
            FieldValue::File(file) => {
                let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
                if let Some(mime) = file.mime.as_deref().filter(|mime| !mime.is_empty()) {
                    part = part.mime_str(mime).map_err(|err| {
                        SubmitError::new(FailureKind::InvalidPart, err.to_string())
                    })?;
                }
                form.part(name.clone(), part)
            }
        };
    }
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitOutput, SubmitError> {
        let url = self
            .settings
            .base_url
            .join(request.endpoint())
            .map_err(|err| SubmitError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let form = build_form(request)?;
        let client = self.build_client()?;

        stamp_debug!("POST {url} intent={}", request.intent());
        let response = client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = ResponseMetadata {
            url: url.to_string(),
            status: status.as_u16(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(SubmitOutput {
            bytes: bytes.into(),
            metadata,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    SubmitError::new(FailureKind::Network, err.to_string())
}
