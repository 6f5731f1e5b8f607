use stamp_core::FlowKind;

pub const LOADING: &str = "#loading-message";

pub const ANIMATION_BUTTONS: &str = ".anim-btn";
pub const ANIMATION_TYPE_INPUT: &str = "#anim_type";
pub const OPTION_VALUE_ATTR: &str = "data-value";
pub const SELECTED_CLASS: &str = "selected";

/// Selectors of the elements one form reads from and writes to.
pub struct FlowSelectors {
    pub form: &'static str,
    pub file: &'static str,
    pub text: &'static str,
    pub preview: &'static str,
    pub download: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

const MAIN: FlowSelectors = FlowSelectors {
    form: "#main-form",
    file: "#main-image",
    text: "#main-text",
    preview: "#main-preview-image",
    download: "#main-download-link",
    loading: LOADING,
    error: "#main-error",
};

const STATIC: FlowSelectors = FlowSelectors {
    form: "#static-form",
    file: "#static-form input[type='file']",
    text: "#static-form input[type='text']",
    preview: "#preview-image",
    download: "#download-link",
    loading: LOADING,
    error: "#static-error",
};

const ANIMATION: FlowSelectors = FlowSelectors {
    form: "#anim-form",
    file: "#anim-image",
    text: "#anim-text",
    preview: "#preview-image",
    download: "#download-link",
    loading: LOADING,
    error: "#anim-error",
};

pub fn flow_selectors(kind: FlowKind) -> &'static FlowSelectors {
    match kind {
        FlowKind::Main => &MAIN,
        FlowKind::Static => &STATIC,
        FlowKind::Animation => &ANIMATION,
    }
}
