// src/config/mod.rs
pub mod settings;

// Re-export commonly used types
pub use settings::{ServiceSettings, Settings, UiSettings, ENV_PREFIX};
