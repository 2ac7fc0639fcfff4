// src/analysis/mod.rs
pub mod agents;
pub mod error;
pub mod pairing;
pub mod report;

// Re-export commonly used types
pub use agents::{AgentDescriptor, AGENTS};
pub use error::{AnalysisError, ValidationError};
pub use pairing::{pair_agents, pair_by_identifier, AgentCard};
pub use report::{AgentAnalysis, AnalysisRequest, AnalysisResponse, Report, TONE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub cards: Vec<AgentCard>,
    pub report: Report,
}

impl AnalysisOutcome {
    pub fn from_response(response: AnalysisResponse) -> Self {
        Self {
            cards: pair_by_identifier(&AGENTS, &response.thoughts),
            report: response.report,
        }
    }
}
