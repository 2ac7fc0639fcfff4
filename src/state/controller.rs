// src/state/controller.rs
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{CaseInput, ViewState};
use crate::analysis::{
    AnalysisError, AnalysisOutcome, AnalysisResponse, ValidationError, AGENTS,
};
use crate::service::AnalysisService;

/// Called from the runtime when a request settles so the UI can wake up.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

type Settlement = Result<AnalysisResponse, AnalysisError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An analysis is already in progress")]
    InFlight,
}

struct InFlight {
    id: Uuid,
    cancel: CancellationToken,
    result: oneshot::Receiver<Settlement>,
}

/// Owns the form input and the Input → Loading → Results/Failed state
/// machine. At most one request is outstanding at a time.
pub struct AnalysisController {
    service: Arc<dyn AnalysisService>,
    runtime: Handle,
    timeout: Duration,
    input: CaseInput,
    view: ViewState,
    in_flight: Option<InFlight>,
    notice: Option<String>,
    repaint: Option<RepaintHook>,
}

impl AnalysisController {
    pub fn new(service: Arc<dyn AnalysisService>, runtime: Handle, timeout: Duration) -> Self {
        Self {
            service,
            runtime,
            timeout,
            input: CaseInput::default(),
            view: ViewState::Input,
            in_flight: None,
            notice: None,
            repaint: None,
        }
    }

    pub fn with_repaint_hook(mut self, hook: RepaintHook) -> Self {
        self.repaint = Some(hook);
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input(&self) -> &CaseInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut CaseInput {
        &mut self.input
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none() && !self.is_loading()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validates the form and starts the analysis request.
    ///
    /// Invalid input leaves the view untouched and raises a notice.
    /// The request runs on the tokio runtime; call [`poll`](Self::poll)
    /// to pick up its result.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.can_submit() {
            tracing::warn!("Submit ignored: an analysis is already in progress");
            return Err(SubmitError::InFlight);
        }

        let request = match self.input.to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected case input");
                self.notice = Some(e.to_string());
                return Err(e.into());
            }
        };

        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let (tx, rx) = oneshot::channel();

        let service = Arc::clone(&self.service);
        let token = cancel.clone();
        let timeout = self.timeout;
        let repaint = self.repaint.clone();

        tracing::info!(
            request_id = %id,
            scenario_chars = request.context.chars().count(),
            question_chars = request.prompt.chars().count(),
            "Submitting case for analysis"
        );

        self.runtime.spawn(async move {
            let settlement = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(request_id = %id, "Analysis request cancelled");
                    return;
                }
                result = tokio::time::timeout(timeout, service.analyze(&request)) => {
                    result.unwrap_or(Err(AnalysisError::Timeout(timeout)))
                }
            };

            if tx.send(settlement).is_ok() {
                if let Some(repaint) = repaint {
                    repaint();
                }
            }
        });

        self.in_flight = Some(InFlight {
            id,
            cancel,
            result: rx,
        });
        self.view = ViewState::Loading;
        Ok(())
    }

    /// Moves a settled request into `Results` or `Failed`. Returns true
    /// when the view changed. Cheap; meant to run every frame.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        let settlement = match in_flight.result.try_recv() {
            Ok(settlement) => settlement,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(AnalysisError::Network(
                "Analysis task ended without a response".to_string(),
            )),
        };
        let id = in_flight.id;
        self.in_flight = None;

        match settlement {
            Ok(response) => {
                if response.thoughts.len() != AGENTS.len() {
                    tracing::warn!(
                        request_id = %id,
                        returned = response.thoughts.len(),
                        expected = AGENTS.len(),
                        "Agent count mismatch in analysis response"
                    );
                }
                tracing::info!(request_id = %id, "Analysis complete");
                self.view = ViewState::Results(AnalysisOutcome::from_response(response));
            }
            Err(e) => {
                tracing::warn!(request_id = %id, error = %e, "Analysis failed");
                self.view = ViewState::Failed(e);
            }
        }
        true
    }

    /// "New Analysis": cancels any outstanding request and clears
    /// everything. Safe to call from any state.
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.input.clear();
        self.notice = None;
        self.view = ViewState::Input;
    }

    /// Abandons the outstanding request and returns to the form with the
    /// input kept.
    pub fn cancel(&mut self) {
        if self.is_loading() {
            self.cancel_in_flight();
            self.view = ViewState::Input;
        }
    }

    /// "Try Again": back to the form with the previous text intact.
    pub fn dismiss_failure(&mut self) {
        if matches!(self.view, ViewState::Failed(_)) {
            self.view = ViewState::Input;
        }
    }

    pub fn retry(&mut self) -> Result<(), SubmitError> {
        if !matches!(self.view, ViewState::Failed(_)) {
            return Ok(());
        }
        self.view = ViewState::Input;
        self.submit()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::info!(request_id = %in_flight.id, "Cancelling in-flight analysis");
            in_flight.cancel.cancel();
        }
    }
}

impl Drop for AnalysisController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
