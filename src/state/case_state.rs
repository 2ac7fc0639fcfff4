// src/state/case_state.rs
use crate::analysis::{AnalysisRequest, ValidationError};

/// Text entered on the input form. Kept exactly as typed; trimming
/// happens when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInput {
    pub scenario: String,
    pub question: String,
}

impl CaseInput {
    pub fn new(scenario: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            question: question.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scenario.is_empty() && self.question.is_empty()
    }

    pub fn clear(&mut self) {
        self.scenario.clear();
        self.question.clear();
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.scenario.trim().is_empty(), self.question.trim().is_empty()) {
            (true, true) => Err(ValidationError::Both),
            (true, false) => Err(ValidationError::EmptyScenario),
            (false, true) => Err(ValidationError::EmptyQuestion),
            (false, false) => Ok(()),
        }
    }

    pub fn to_request(&self) -> Result<AnalysisRequest, ValidationError> {
        self.validate()?;
        Ok(AnalysisRequest::new(self.scenario.trim(), self.question.trim()))
    }
}
