use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use stamp_core::{Effect, FlowKind, Msg, ResourceHandle};
use stamp_engine::{run_submission, ReqwestSubmitter};
use stamp_logging::{stamp_debug, stamp_error, stamp_info};
use wasm_bindgen_futures::spawn_local;

use super::app::{dispatch, App};
use super::object_url::BrowserObjectUrls;

/// Executes effects against the browser: network, alerts and object URLs.
pub struct EffectRunner {
    submitter: Rc<ReqwestSubmitter>,
    artifacts: RefCell<BTreeMap<FlowKind, ResourceHandle<BrowserObjectUrls>>>,
}

impl EffectRunner {
    pub fn new(submitter: ReqwestSubmitter) -> Self {
        let artifacts = FlowKind::ALL
            .into_iter()
            .map(|kind| (kind, ResourceHandle::new(BrowserObjectUrls)))
            .collect();
        Self {
            submitter: Rc::new(submitter),
            artifacts: RefCell::new(artifacts),
        }
    }

    /// Runs `effects`; returns messages that must be dispatched right away.
    pub fn run(&self, app: &Rc<App>, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::Submit { attempt, request } => {
                    stamp_info!("{} submitting attempt={attempt}", request.flow());
                    let app = app.clone();
                    let submitter = self.submitter.clone();
                    spawn_local(async move {
                        let msg = run_submission(&*submitter, attempt, request).await;
                        dispatch(&app, msg);
                    });
                }
                Effect::Notify { flow, message } => {
                    stamp_debug!("{flow} notify: {message}");
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
                Effect::PresentArtifact {
                    flow, bytes, mime, ..
                } => {
                    let mut artifacts = self.artifacts.borrow_mut();
                    let Some(handle) = artifacts.get_mut(&flow) else {
                        continue;
                    };
                    if let Err(err) = handle.set(&bytes, mime.as_deref()) {
                        stamp_error!("{flow} could not publish response: {err}");
                        follow_up.push(Msg::ArtifactUnavailable { flow, message: err });
                    }
                }
                Effect::ReleaseArtifacts => {
                    for handle in self.artifacts.borrow_mut().values_mut() {
                        handle.release();
                    }
                }
            }
        }
        follow_up
    }

    /// Live object URL of `flow`'s artifact.
    pub fn artifact_url(&self, flow: FlowKind) -> Option<String> {
        self.artifacts
            .borrow()
            .get(&flow)
            .and_then(|handle| handle.current().cloned())
    }
}
