// src/state/mod.rs
use crate::analysis::{AnalysisError, AnalysisOutcome};

pub mod case_state;
pub mod controller;

pub use case_state::CaseInput;
pub use controller::{AnalysisController, RepaintHook, SubmitError};

// Screen tracking. Results and failures carry their data so nothing
// outlives the screen it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Input,
    Loading,
    Results(AnalysisOutcome),
    Failed(AnalysisError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Input => "input",
            ViewState::Loading => "loading",
            ViewState::Results(_) => "results",
            ViewState::Failed(_) => "failed",
        }
    }
}
