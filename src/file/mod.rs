// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod report;

pub use report::ReportFileHandler;

// Core trait for file operations
pub trait FileHandler<T> {
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}
