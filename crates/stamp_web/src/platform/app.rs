use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use bytes::Bytes;
use js_sys::Uint8Array;
use stamp_core::{update, AppState, FilePart, FlowKind, Msg, SelectionGroup, ANIMATION_TYPES};
use stamp_engine::{ReqwestSubmitter, SubmitSettings};
use stamp_logging::{stamp_debug, stamp_info, stamp_warn};
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event, EventTarget, File, HtmlInputElement, PageTransitionEvent, Window};

use super::effects::EffectRunner;
use super::object_url::js_err;
use super::ui;
use super::ui::layout::{control_value, intent_value, FlowSlots};

pub struct App {
    state: RefCell<AppState>,
    slots: ui::layout::PageSlots,
    effects: EffectRunner,
}

pub fn run_app() {
    console_error_panic_hook::set_once();
    stamp_logging::initialize_console();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let slots = ui::layout::lookup(&document);
    let declared: Vec<String> = slots
        .animation_type
        .buttons
        .iter()
        .map(|(value, _)| value.clone())
        .collect();
    let animation_type = if declared.is_empty() {
        SelectionGroup::new(ANIMATION_TYPES.iter().copied())
    } else {
        SelectionGroup::new(declared)
    };

    let submitter = ReqwestSubmitter::new(submit_settings(&window));
    let app = Rc::new(App {
        state: RefCell::new(AppState::new(animation_type)),
        slots,
        effects: EffectRunner::new(submitter),
    });

    for flow_slots in &app.slots.flows {
        wire_flow(&app, flow_slots);
    }
    wire_selection(&app);
    {
        let app = app.clone();
        listen(&window, "pagehide", move |event| {
            let persisted = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(PageTransitionEvent::persisted);
            dispatch(&app, Msg::PageHidden { persisted });
        });
    }

    sync_initial_values(&app);
    let view = app.state.borrow().view();
    ui::render::render(&app.slots, &view, &app.effects);
    stamp_info!("stamp maker ready");
}

/// Applies `msg` and everything it triggers, then re-renders if needed.
pub fn dispatch(app: &Rc<App>, msg: Msg) {
    let mut pending = VecDeque::from([msg]);
    while let Some(msg) = pending.pop_front() {
        let (effects, view) = {
            let mut guard = app.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let view = state.consume_dirty().then(|| state.view());
            *guard = state;
            (effects, view)
        };

        pending.extend(app.effects.run(app, effects));
        if let Some(view) = view {
            ui::render::render(&app.slots, &view, &app.effects);
        }
    }
}

fn submit_settings(window: &Window) -> SubmitSettings {
    let origin = window
        .location()
        .origin()
        .map_err(js_err)
        .and_then(|origin| Url::parse(&origin).map_err(|err| err.to_string()));
    match origin {
        Ok(base_url) => SubmitSettings::with_base_url(base_url),
        Err(err) => {
            stamp_warn!("page origin unavailable ({err}); using default base url");
            SubmitSettings::default()
        }
    }
}

fn wire_flow(app: &Rc<App>, slots: &FlowSlots) {
    let flow = slots.kind;
    let Some(form) = slots.form.as_ref() else {
        stamp_debug!("{flow} form not on this page");
        return;
    };

    {
        let app = app.clone();
        listen(form, "submit", move |event| {
            event.prevent_default();
            dispatch(&app, Msg::SubmitClicked { flow });
        });
    }
    if let Some(input) = slots.file_input.as_ref() {
        let app = app.clone();
        listen(input, "change", move |event| {
            let slots = app.slots.flow(flow);
            if let (Some(slots), Some(input)) = (slots, event_target::<HtmlInputElement>(&event)) {
                read_chosen_file(&app, slots, &input);
            }
        });
    }
    if let Some(text) = slots.text_input.as_ref() {
        let app = app.clone();
        listen(text, "input", move |event| {
            let text = event_target::<Element>(&event)
                .and_then(|element| control_value(&element))
                .unwrap_or_default();
            dispatch(&app, Msg::TextChanged { flow, text });
        });
    }
    for control in &slots.intent_controls {
        let app = app.clone();
        listen(control, "change", move |event| {
            let value = event_target::<Element>(&event).and_then(|element| intent_value(&element));
            if let Some(value) = value {
                dispatch(&app, Msg::IntentChanged { flow, value });
            }
        });
    }
}

fn wire_selection(app: &Rc<App>) {
    for (value, button) in &app.slots.animation_type.buttons {
        let app = app.clone();
        let value = value.clone();
        listen(button, "click", move |_event| {
            dispatch(&app, Msg::AnimationTypeClicked(value.clone()));
        });
    }
}

/// Feeds values already present in the page (autofill, back navigation) into state.
fn sync_initial_values(app: &Rc<App>) {
    for slots in &app.slots.flows {
        if slots.form.is_none() {
            continue;
        }
        let flow = slots.kind;
        if let Some(text) = slots.text_input.as_ref().and_then(control_value) {
            dispatch(app, Msg::TextChanged { flow, text });
        }
        if let Some(value) = slots.intent_controls.iter().find_map(intent_value) {
            dispatch(app, Msg::IntentChanged { flow, value });
        }
        if let Some(input) = slots.file_input.as_ref() {
            if input.files().is_some_and(|files| files.length() > 0) {
                read_chosen_file(app, slots, input);
            }
        }
    }

    let preset = app
        .slots
        .animation_type
        .value_input
        .as_ref()
        .map(HtmlInputElement::value)
        .filter(|value| !value.is_empty());
    if let Some(value) = preset {
        dispatch(app, Msg::AnimationTypeClicked(value));
    }
}

/// Reads the input's file into state. Each read gets a fresh id so a slow
/// earlier read cannot overwrite a later choice.
fn read_chosen_file(app: &Rc<App>, slots: &FlowSlots, input: &HtmlInputElement) {
    let flow = slots.kind;
    let read = slots.file_reads.get() + 1;
    slots.file_reads.set(read);
    dispatch(app, Msg::FileReadStarted { flow, read });

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        dispatch(app, Msg::FileChosen { flow, read, file: None });
        return;
    };
    let app = app.clone();
    spawn_local(async move {
        let file = match read_file(&file).await {
            Ok(part) => Some(part),
            Err(err) => {
                stamp_warn!("{flow} could not read chosen file: {err}");
                None
            }
        };
        dispatch(&app, Msg::FileChosen { flow, read, file });
    });
}

async fn read_file(file: &File) -> Result<FilePart, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    Ok(FilePart {
        name: file.name(),
        mime: (!mime.is_empty()).then_some(mime),
        bytes: Bytes::from(bytes),
    })
}

fn event_target<T: JsCast>(event: &Event) -> Option<T> {
    event.target().and_then(|target| target.dyn_into::<T>().ok())
}

fn listen<F>(target: &EventTarget, name: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    {
        stamp_warn!("could not listen for {name}: {}", js_err(err));
    }
    closure.forget();
}
