//! AppController: runs comparison requests off the UI thread.
//!
//! The view never awaits. It hands an [`Effect`] to the controller, which
//! spawns the request on the tokio runtime and later posts a
//! [`CompareEvent`] tagged with the request token back over the channel.

use super::state::{Effect, RequestToken};
use super::threading::request_ui_repaint;
use crate::comparison::ComparisonRequester;
use crate::models::ComparisonResult;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Discrete events emitted from background requests
#[derive(Clone, Debug)]
pub enum CompareEvent {
    /// A request finished; `outcome` carries the user-facing error on failure
    Finished {
        token: RequestToken,
        outcome: Result<ComparisonResult, String>,
    },
}

pub struct AppController {
    requester: Arc<ComparisonRequester>,
    event_tx: mpsc::Sender<CompareEvent>,
    runtime: tokio::runtime::Handle,
    /// Set on the first frame so background tasks can wake the UI
    ui_context: Arc<RwLock<Option<egui::Context>>>,
}

impl AppController {
    pub fn new(
        requester: Arc<ComparisonRequester>,
        event_tx: mpsc::Sender<CompareEvent>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        AppController {
            requester,
            event_tx,
            runtime,
            ui_context: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_ui_context(&self, ctx: &egui::Context) {
        if let Ok(mut guard) = self.ui_context.write() {
            if guard.is_none() {
                *guard = Some(ctx.clone());
            }
        }
    }

    /// Start the work described by `effect`
    pub fn dispatch(&self, effect: Effect) -> tokio::task::JoinHandle<()> {
        match effect {
            Effect::StartRequest {
                token,
                kind,
                name1,
                name2,
            } => {
                let requester = Arc::clone(&self.requester);
                let event_tx = self.event_tx.clone();
                let ui_context = Arc::clone(&self.ui_context);

                log::debug!("[UI] Dispatching request #{}", token);
                self.runtime.spawn(async move {
                    let outcome = requester
                        .compare(kind, &name1, &name2)
                        .await
                        .map_err(|e| e.user_message());

                    if event_tx.send(CompareEvent::Finished { token, outcome }).await.is_err() {
                        log::warn!("[UI] Event channel closed, dropping result of request #{}", token);
                        return;
                    }
                    let ctx = ui_context.read().ok().and_then(|guard| guard.clone());
                    request_ui_repaint(ctx.as_ref());
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::{Collaborator, IntegrationMode};
    use crate::error::RequestError;
    use crate::models::HardwareKind;
    use crate::ui::threading::AsyncBridge;
    use futures::future::{BoxFuture, FutureExt};
    use serde_json::Value;

    struct FailingCollaborator;

    impl Collaborator for FailingCollaborator {
        fn generate(&self, _prompt: String, _schema: Option<Value>) -> BoxFuture<'static, Result<String, RequestError>> {
            async { Err(RequestError::MissingCredential) }.boxed()
        }
    }

    #[tokio::test]
    async fn test_dispatch_posts_tagged_completion() {
        let requester = Arc::new(ComparisonRequester::new(
            Arc::new(FailingCollaborator),
            IntegrationMode::Structured,
        ));
        let (bridge, mut rx) = AsyncBridge::new();
        let controller = AppController::new(requester, bridge.event_tx, tokio::runtime::Handle::current());

        controller
            .dispatch(Effect::StartRequest {
                token: 7,
                kind: HardwareKind::Cpu,
                name1: "Intel Core i9-14900K".into(),
                name2: "AMD Ryzen 9 7950X".into(),
            })
            .await
            .unwrap();

        match rx.recv().await {
            Some(CompareEvent::Finished { token, outcome }) => {
                assert_eq!(token, 7);
                assert!(outcome.unwrap_err().contains("GEMINI_API_KEY"));
            }
            None => panic!("no event received"),
        }
    }
}
