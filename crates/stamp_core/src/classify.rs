//! Maps a request's declared intent onto how its response is rendered.
use crate::FlowKind;

/// Shape of a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    SingleImage,
    Archive,
}

impl PayloadKind {
    /// Kind declared by a response `Content-Type`, if it declares one we know.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase();
        if essence.starts_with("image/") {
            return Some(PayloadKind::SingleImage);
        }
        match essence.as_str() {
            "application/zip" | "application/x-zip-compressed" => Some(PayloadKind::Archive),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            PayloadKind::SingleImage => "png",
            PayloadKind::Archive => "zip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    ShowPreviewAndDownload { suggested_filename: String },
    DownloadOnly { suggested_filename: String },
}

impl RenderInstruction {
    pub fn suggested_filename(&self) -> &str {
        match self {
            RenderInstruction::ShowPreviewAndDownload { suggested_filename }
            | RenderInstruction::DownloadOnly { suggested_filename } => suggested_filename,
        }
    }

    pub fn shows_preview(&self) -> bool {
        matches!(self, RenderInstruction::ShowPreviewAndDownload { .. })
    }
}

/// One row of a flow's classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: &'static str,
    pub payload: PayloadKind,
    pub filename: &'static str,
}

const fn rule(intent: &'static str, payload: PayloadKind, filename: &'static str) -> IntentRule {
    IntentRule {
        intent,
        payload,
        filename,
    }
}

const MAIN_RULES: &[IntentRule] = &[
    rule("main", PayloadKind::SingleImage, "main_240x240.png"),
    rule("stamp", PayloadKind::SingleImage, "main_370x320.png"),
];

const STATIC_RULES: &[IntentRule] = &[
    rule("stamp", PayloadKind::SingleImage, "static_370x320.png"),
    rule("mini", PayloadKind::SingleImage, "static_96x74.png"),
    rule("both", PayloadKind::Archive, "static_both.zip"),
];

const ANIMATION_RULES: &[IntentRule] = &[
    rule("main", PayloadKind::SingleImage, "animated_main_240x240.png"),
    rule("stamp", PayloadKind::SingleImage, "animated_stamp_370x320.png"),
];

pub fn rules_for(flow: FlowKind) -> &'static [IntentRule] {
    match flow {
        FlowKind::Main => MAIN_RULES,
        FlowKind::Static => STATIC_RULES,
        FlowKind::Animation => ANIMATION_RULES,
    }
}

pub fn rule_for(flow: FlowKind, intent: &str) -> Option<&'static IntentRule> {
    rules_for(flow).iter().find(|rule| rule.intent == intent)
}

/// Payload kind the client expects for `intent`, from its own table.
pub fn expected_payload(flow: FlowKind, intent: &str) -> Option<PayloadKind> {
    rule_for(flow, intent).map(|rule| rule.payload)
}

/// Pure classification of a response for `intent` whose body is `payload`.
///
/// When `payload` disagrees with the table, the table's filename keeps its
/// stem and takes the payload's extension.
pub fn classify(flow: FlowKind, intent: &str, payload: PayloadKind) -> Option<RenderInstruction> {
    let rule = rule_for(flow, intent)?;
    let suggested_filename = if rule.payload == payload {
        rule.filename.to_string()
    } else {
        let stem = rule
            .filename
            .rsplit_once('.')
            .map_or(rule.filename, |(stem, _)| stem);
        format!("{stem}.{}", payload.extension())
    };
    Some(match payload {
        PayloadKind::SingleImage => RenderInstruction::ShowPreviewAndDownload { suggested_filename },
        PayloadKind::Archive => RenderInstruction::DownloadOnly { suggested_filename },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_essence_is_matched() {
        assert_eq!(
            PayloadKind::from_content_type("image/png"),
            Some(PayloadKind::SingleImage)
        );
        assert_eq!(
            PayloadKind::from_content_type("Application/ZIP; charset=binary"),
            Some(PayloadKind::Archive)
        );
        assert_eq!(PayloadKind::from_content_type("text/html"), None);
    }

    #[test]
    fn unknown_intent_has_no_instruction() {
        assert_eq!(classify(FlowKind::Main, "mini", PayloadKind::SingleImage), None);
        assert_eq!(classify(FlowKind::Static, "", PayloadKind::SingleImage), None);
    }

    #[test]
    fn every_table_row_matches_its_own_kind() {
        for flow in FlowKind::ALL {
            for rule in rules_for(flow) {
                let instruction = classify(flow, rule.intent, rule.payload).unwrap();
                assert_eq!(instruction.suggested_filename(), rule.filename);
                assert_eq!(
                    instruction.shows_preview(),
                    rule.payload == PayloadKind::SingleImage
                );
            }
        }
    }
}
