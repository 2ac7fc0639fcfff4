// src/service/mod.rs
use async_trait::async_trait;

use crate::analysis::{AnalysisError, AnalysisRequest, AnalysisResponse};

pub mod http;

pub use http::HttpAnalysisService;

/// Path of the analysis endpoint, relative to the service base URL.
pub const GENERATE_PATH: &str = "/generate/result";

/// The remote multi-agent analysis engine.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError>;
}
