use stamp_core::{AppViewModel, FlowView, SelectionView};
use web_sys::{HtmlElement, Node};

use super::constants::SELECTED_CLASS;
use super::layout::{FlowSlots, PageSlots, SelectionSlots};
use crate::platform::effects::EffectRunner;

pub fn render(slots: &PageSlots, view: &AppViewModel, runner: &EffectRunner) {
    render_loading(slots, view);
    for flow_slots in &slots.flows {
        if let Some(flow_view) = view.flow(flow_slots.kind) {
            let url = runner.artifact_url(flow_slots.kind);
            render_artifact(flow_slots, flow_view, url.as_deref());
            render_error(flow_slots, flow_view);
        }
    }
    render_selection(&slots.animation_type, &view.animation_type);
}

/// Loading elements may be shared between flows; a shared one stays visible
/// while any of its flows is submitting.
fn render_loading(slots: &PageSlots, view: &AppViewModel) {
    for flow_slots in &slots.flows {
        let Some(element) = flow_slots.loading.as_ref() else {
            continue;
        };
        let node: &Node = element;
        let visible = slots
            .flows
            .iter()
            .filter(|other| {
                other
                    .loading
                    .as_ref()
                    .is_some_and(|candidate| candidate.is_same_node(Some(node)))
            })
            .any(|other| view.flow(other.kind).is_some_and(|flow| flow.loading_visible));
        set_display(element, if visible { "block" } else { "none" });
    }
}

fn render_artifact(slots: &FlowSlots, view: &FlowView, url: Option<&str>) {
    if slots.rendered_generation.get() == view.artifact_generation {
        return;
    }
    slots.rendered_generation.set(view.artifact_generation);

    let (Some(url), Some(filename)) = (url, view.download_filename.as_deref()) else {
        // Leave shared elements alone once another flow has drawn into them.
        let Some(shown) = slots.rendered_url.take() else {
            return;
        };
        if let Some(preview) = slots.preview.as_ref().filter(|preview| preview.src() == shown) {
            set_display(preview, "none");
        }
        if let Some(link) = slots.download.as_ref().filter(|link| link.href() == shown) {
            set_display(link, "none");
        }
        return;
    };
    slots.rendered_url.replace(Some(url.to_string()));

    if let Some(preview) = slots.preview.as_ref() {
        if view.preview_visible {
            preview.set_src(url);
            set_display(preview, "block");
        } else {
            set_display(preview, "none");
        }
    }
    if let Some(link) = slots.download.as_ref() {
        link.set_href(url);
        link.set_download(filename);
        set_display(link, "inline");
    }
}

fn render_error(slots: &FlowSlots, view: &FlowView) {
    let Some(element) = slots.error.as_ref() else {
        return;
    };
    match view.last_error.as_deref() {
        Some(message) => {
            element.set_text_content(Some(message));
            set_display(element, "block");
        }
        None => set_display(element, "none"),
    }
}

fn render_selection(slots: &SelectionSlots, view: &SelectionView) {
    let marked = view.marked.as_deref();
    for (value, button) in &slots.buttons {
        let _ = button
            .class_list()
            .toggle_with_force(SELECTED_CLASS, marked == Some(value.as_str()));
    }
    if let (Some(input), Some(marked)) = (slots.value_input.as_ref(), marked) {
        input.set_value(marked);
    }
}

fn set_display(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("display", value);
}
