//! One-time lookup of the page elements each component owns.
//!
//! Every slot is optional: a missing element turns the operations that touch
//! it into no-ops.
use std::cell::{Cell, RefCell};

use stamp_core::{FlowKind, ReadId};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use super::constants::{self, flow_selectors};

pub struct FlowSlots {
    pub kind: FlowKind,
    pub form: Option<HtmlFormElement>,
    pub file_input: Option<HtmlInputElement>,
    pub text_input: Option<Element>,
    /// Radio buttons (or a select) named after the flow's intent field.
    pub intent_controls: Vec<Element>,
    pub preview: Option<HtmlImageElement>,
    pub download: Option<HtmlAnchorElement>,
    pub loading: Option<HtmlElement>,
    /// Where the flow's last failure is shown.
    pub error: Option<HtmlElement>,
    /// Artifact generation last written into `preview`/`download`.
    pub rendered_generation: Cell<Option<u64>>,
    /// Object URL last written into `preview`/`download`. Those elements may
    /// be shared, so a flow only hides them while they still show this URL.
    pub rendered_url: RefCell<Option<String>>,
    /// Last file read id handed out for `file_input`.
    pub file_reads: Cell<ReadId>,
}

pub struct SelectionSlots {
    pub buttons: Vec<(String, Element)>,
    pub value_input: Option<HtmlInputElement>,
}

pub struct PageSlots {
    pub flows: Vec<FlowSlots>,
    pub animation_type: SelectionSlots,
}

impl PageSlots {
    pub fn flow(&self, kind: FlowKind) -> Option<&FlowSlots> {
        self.flows.iter().find(|slots| slots.kind == kind)
    }
}

pub fn lookup(document: &Document) -> PageSlots {
    let flows = FlowKind::ALL
        .into_iter()
        .map(|kind| lookup_flow(document, kind))
        .collect();
    PageSlots {
        flows,
        animation_type: lookup_selection(document),
    }
}

fn lookup_flow(document: &Document, kind: FlowKind) -> FlowSlots {
    let selectors = flow_selectors(kind);
    let form: Option<HtmlFormElement> = query(document, selectors.form);
    let intent_controls = form
        .as_ref()
        .map(|form| {
            let selector = format!("[name='{}']", kind.intent_field());
            query_all(form, &selector)
        })
        .unwrap_or_default();
    FlowSlots {
        kind,
        form,
        file_input: query(document, selectors.file),
        text_input: query(document, selectors.text),
        intent_controls,
        preview: query(document, selectors.preview),
        download: query(document, selectors.download),
        loading: query(document, selectors.loading),
        error: query(document, selectors.error),
        rendered_generation: Cell::new(None),
        rendered_url: RefCell::new(None),
        file_reads: Cell::new(0),
    }
}

fn lookup_selection(document: &Document) -> SelectionSlots {
    let buttons = document
        .document_element()
        .map(|root| query_all(&root, constants::ANIMATION_BUTTONS))
        .unwrap_or_default()
        .into_iter()
        .map(|button| {
            let value = button
                .get_attribute(constants::OPTION_VALUE_ATTR)
                .unwrap_or_default();
            (value, button)
        })
        .collect();
    SelectionSlots {
        buttons,
        value_input: query(document, constants::ANIMATION_TYPE_INPUT),
    }
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of a text-like control.
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

/// Value an intent control contributes to its form, if any.
///
/// Unchecked radios and checkboxes contribute nothing.
pub fn intent_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_();
        if (kind == "radio" || kind == "checkbox") && !input.checked() {
            return None;
        }
        return Some(input.value());
    }
    control_value(element)
}
