//! Result controller: interaction state machine and derived export actions.
//!
//! One controller owns the state for one analysis session. Snapshots are
//! published through a watch channel; the presentation layer re-renders on
//! change notification and never polls. The controller has a single writer
//! and does not guard against concurrent submissions: the boundary disables
//! submit while Loading, and if it fails to, the later-completing response
//! wins.


use crate::client::AnalysisApi;
use crate::clipboard::ClipboardSink;
use crate::error::AnalysisError;
use crate::types::AnalysisResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// How long the copy acknowledgement stays raised.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

const EMPTY_URL_NOTICE: &str = "Please enter a Reddit URL";

/// Mutually exclusive interaction mode of one analysis session.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    /// Nothing submitted yet, or input rejected before dispatch.
    Idle { notice: Option<String> },
    /// A request is in flight.
    Loading,
    /// The last submission completed; the result is owned here until the
    /// next submission replaces it wholesale.
    Success(AnalysisResult),
    /// The last submission failed; the message is user-visible. Terminal
    /// until the next submission.
    Failed(String),
}

impl InteractionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }
}

/// Snapshot the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub state: InteractionState,
    /// Raw payload panel visibility; meaningful while Success.
    pub raw_view_visible: bool,
    /// Raised for a fixed window after a successful clipboard export.
    pub copy_acknowledged: bool,
}

impl ViewState {
    fn idle() -> Self {
        Self {
            state: InteractionState::Idle { notice: None },
            raw_view_visible: false,
            copy_acknowledged: false,
        }
    }
}

/// Owns `ViewState` and sequences validation, dispatch, and transitions.
pub struct SessionController {
    client: Box<dyn AnalysisApi>,
    clipboard: Box<dyn ClipboardSink>,
    state: Arc<watch::Sender<ViewState>>,
}

impl SessionController {
    pub fn new(client: Box<dyn AnalysisApi>, clipboard: Box<dyn ClipboardSink>) -> Self {
        let (state, _) = watch::channel(ViewState::idle());
        Self {
            client,
            clipboard,
            state: Arc::new(state),
        }
    }

    /// Subscribe to snapshots; the receiver is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Validate and dispatch one analysis request, driving the state machine
    /// to a terminal Success or Failed. Blank input never reaches the
    /// network. Every submission fully resets prior results, errors, and
    /// derived flags before dispatching.
    pub async fn submit(&mut self, url: &str) {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            let err = AnalysisError::Validation(EMPTY_URL_NOTICE.to_string());
            self.state.send_replace(ViewState {
                state: InteractionState::Idle {
                    notice: Some(err.to_string()),
                },
                raw_view_visible: false,
                copy_acknowledged: false,
            });
            return;
        }

        self.state.send_replace(ViewState {
            state: InteractionState::Loading,
            raw_view_visible: false,
            copy_acknowledged: false,
        });

        let next = match self.client.analyze(trimmed).await {
            Ok(result) => InteractionState::Success(result),
            Err(err) => {
                tracing::debug!(error = %err, "analysis request failed");
                InteractionState::Failed(err.to_string())
            }
        };
        self.state.send_modify(|view| view.state = next);
    }

    /// Flip raw payload visibility. Pure state toggle; no effect outside
    /// Success.
    pub fn toggle_raw_view(&mut self) {
        self.state.send_if_modified(|view| {
            if view.state.result().is_some() {
                view.raw_view_visible = !view.raw_view_visible;
                true
            } else {
                false
            }
        });
    }

    /// Copy the current result to the clipboard as pretty JSON. On success
    /// the acknowledgement flag is raised, then cleared after
    /// `COPY_ACK_WINDOW` by a spawned timer. A clipboard failure is logged
    /// and never moves the state away from Success.
    ///
    /// Must be called from within a tokio runtime.
    pub fn copy_result(&mut self) {
        let result = match self.view().state {
            InteractionState::Success(result) => result,
            _ => return,
        };

        let text = match serde_json::to_string_pretty(&result) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize result for clipboard");
                return;
            }
        };

        if let Err(err) = self.clipboard.write(&text) {
            tracing::warn!(error = %err, "clipboard export failed");
            return;
        }

        self.state.send_modify(|view| view.copy_acknowledged = true);

        let state = self.state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPY_ACK_WINDOW).await;
            state.send_if_modified(|view| {
                if view.copy_acknowledged {
                    view.copy_acknowledged = false;
                    true
                } else {
                    false
                }
            });
        });
    }
}
