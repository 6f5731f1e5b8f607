use std::collections::BTreeMap;

use crate::{classify, FilePart, FlowKind, FormState, ValidationError};

/// Multipart field names understood by the generation endpoints.
pub mod field {
    pub const IMAGE: &str = "image";
    pub const TEXT: &str = "text";
    pub const VARIANT: &str = "variant";
    pub const SIZE: &str = "size";
    pub const ANIMATION_TYPE: &str = "anim_type";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FilePart),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::File(_) => None,
        }
    }
}

/// One request to a generation endpoint, built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    flow: FlowKind,
    fields: BTreeMap<String, FieldValue>,
}

impl SubmissionRequest {
    /// Validates `form` and assembles the full field set for `flow`.
    pub fn assemble(
        flow: FlowKind,
        form: &FormState,
        animation_type: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let (file, intent) = validate(flow, form, animation_type)?;

        let mut fields = BTreeMap::new();
        fields.insert(field::IMAGE.to_string(), FieldValue::File(file.clone()));
        fields.insert(field::TEXT.to_string(), FieldValue::Text(form.text.clone()));
        fields.insert(
            flow.intent_field().to_string(),
            FieldValue::Text(intent.to_string()),
        );
        if flow.requires_animation_type() {
            if let Some(animation_type) = animation_type {
                fields.insert(
                    field::ANIMATION_TYPE.to_string(),
                    FieldValue::Text(animation_type.to_string()),
                );
            }
        }

        Ok(Self { flow, fields })
    }

    pub fn flow(&self) -> FlowKind {
        self.flow
    }

    pub fn endpoint(&self) -> &'static str {
        self.flow.endpoint()
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    /// Intent discriminator, read back from the assembled fields.
    pub fn intent(&self) -> &str {
        self.text_field(self.flow.intent_field())
            .unwrap_or_else(|| self.flow.default_intent())
    }
}

/// Checks a form before submission.
///
/// Returns the chosen file and the resolved intent; a blank discriminator
/// resolves to the flow's default.
pub fn validate<'a>(
    flow: FlowKind,
    form: &'a FormState,
    animation_type: Option<&str>,
) -> Result<(&'a FilePart, &'a str), ValidationError> {
    let file = form.file.as_ref().ok_or(ValidationError::MissingFile)?;
    if form.text.trim().is_empty() {
        return Err(ValidationError::MissingText);
    }
    if flow.requires_animation_type() && animation_type.is_none_or(|value| value.is_empty()) {
        return Err(ValidationError::MissingSelection);
    }

    let raw = form.intent.trim();
    let intent = if raw.is_empty() {
        flow.default_intent()
    } else {
        raw
    };
    if classify::rule_for(flow, intent).is_none() {
        return Err(ValidationError::UnsupportedIntent {
            field: flow.intent_field(),
            value: intent.to_string(),
        });
    }
    Ok((file, intent))
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn form(text: &str, intent: &str) -> FormState {
        FormState {
            file: Some(FilePart {
                name: "cat.png".to_string(),
                mime: Some("image/png".to_string()),
                bytes: Bytes::from_static(b"png"),
            }),
            text: text.to_string(),
            intent: intent.to_string(),
        }
    }

    #[test]
    fn intent_is_read_back_from_fields() {
        let request = SubmissionRequest::assemble(FlowKind::Static, &form("hi", "mini"), None)
            .expect("valid form");
        assert_eq!(request.intent(), "mini");
        assert_eq!(request.text_field(field::SIZE), Some("mini"));
        assert_eq!(request.text_field(field::VARIANT), None);
        assert_eq!(request.endpoint(), "/create_static");
    }

    #[test]
    fn blank_intent_resolves_to_flow_default() {
        let request = SubmissionRequest::assemble(FlowKind::Main, &form("hi", "  "), None)
            .expect("valid form");
        assert_eq!(request.text_field(field::VARIANT), Some("main"));
    }

    #[test]
    fn whitespace_text_is_missing() {
        let err = validate(FlowKind::Main, &form("  \n", "main"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingText);
    }

    #[test]
    fn missing_file_is_reported_first() {
        let empty = FormState::default();
        assert_eq!(
            validate(FlowKind::Static, &empty, None).unwrap_err(),
            ValidationError::MissingFile
        );
    }

    #[test]
    fn animation_requires_a_type() {
        let err = validate(FlowKind::Animation, &form("hi", "main"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingSelection);
    }

    #[test]
    fn undeclared_intent_is_rejected() {
        let err = validate(FlowKind::Main, &form("hi", "both"), None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedIntent {
                field: "variant",
                value: "both".to_string()
            }
        );
    }
}
