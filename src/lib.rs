//! Desktop client for the multi-agent arbitration analysis service.
//!
//! Collects a case scenario and a question, posts them to the analysis
//! engine and shows each agent's findings alongside the final report.

pub mod analysis;
pub mod app;
pub mod config;
pub mod file;
pub mod format;
pub mod service;
pub mod state;
pub mod ui;
