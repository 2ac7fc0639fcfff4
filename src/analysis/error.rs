// src/analysis/error.rs
use std::time::Duration;
use thiserror::Error;

/// Rejected form input. Recovered locally with a blocking notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please describe the case scenario before requesting an analysis.")]
    EmptyScenario,
    #[error("Please enter the specific question you want analyzed.")]
    EmptyQuestion,
    #[error("Please fill in both the case scenario and your specific question.")]
    Both,
}

/// A request that was sent (or attempted) but produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis service returned HTTP {0}")]
    Status(u16),

    #[error("No response from the analysis service after {}s", .0.as_secs())]
    Timeout(Duration),

    // Body arrived but does not follow the expected schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisError::Network(_) => "Could not reach the analysis service",
            AnalysisError::Status(_) => "The analysis service reported an error",
            AnalysisError::Timeout(_) => "The analysis timed out",
            AnalysisError::MalformedResponse(_) => "The analysis service sent an unexpected response",
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AnalysisError::MalformedResponse(msg.into())
    }
}
