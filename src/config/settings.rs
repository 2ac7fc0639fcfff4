// src/config/settings.rs
use anyhow::{anyhow, bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::service::GENERATE_PATH;

/// Environment overrides look like `ARBITRATION_SERVICE__BASE_URL`.
pub const ENV_PREFIX: &str = "ARBITRATION";

const APP_DIR: &str = "arbitration-analyzer";
const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub base_url: String,
    /// Whole-request limit. A hung service fails the request after this.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn endpoint(&self) -> Result<String> {
        let base = self.base_url.trim();
        if base.is_empty() {
            bail!("Service base URL cannot be empty");
        }

        let url = reqwest::Url::parse(base)
            .with_context(|| format!("Invalid service base URL: '{}'", base))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Invalid service base URL: '{}'. Must start with http:// or https://",
                base
            ));
        }

        Ok(format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Characters of case context shown in the results header.
    pub summary_chars: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            summary_chars: 200,
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceSettings,
    pub ui: UiSettings,
}

impl Settings {
    /// `<config dir>/arbitration-analyzer/settings.ron`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Defaults, then the settings file (if present), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Ron).required(false));
        }

        let settings: Settings = builder
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.service.endpoint()?;
        if self.service.timeout_secs == 0 {
            bail!("Service timeout must be at least one second");
        }
        if self.service.connect_timeout_secs == 0 {
            bail!("Service connect timeout must be at least one second");
        }
        if self.ui.summary_chars == 0 {
            bail!("Summary length must be positive");
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4),
        )?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_point_at_local_service() {
        let settings = Settings::load_with_env(None, no_env()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.service.endpoint().unwrap(),
            "http://127.0.0.1:8000/generate/result"
        );
        assert_eq!(settings.ui.summary_chars, 200);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings =
            Settings::load_with_env(Some(&dir.path().join("absent.ron")), no_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn saved_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.service.base_url = "https://analysis.internal:9443".into();
        settings.service.timeout_secs = 45;
        settings.save(&path).unwrap();

        let loaded = Settings::load_with_env(Some(&path), no_env()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn environment_overrides_file() {
        let env: HashMap<String, String> = [
            ("ARBITRATION_SERVICE__BASE_URL", "http://10.0.0.5:8000"),
            ("ARBITRATION_SERVICE__TIMEOUT_SECS", "30"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::load_with_env(
            None,
            Environment::with_prefix(ENV_PREFIX).source(Some(env)),
        )
        .unwrap();
        assert_eq!(settings.service.base_url, "http://10.0.0.5:8000");
        assert_eq!(settings.service.timeout_secs, 30);
        assert_eq!(settings.service.connect_timeout_secs, 10);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut settings = Settings::default();
        settings.service.base_url = "localhost:8000".into();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.service.timeout_secs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.service.base_url = "   ".into();
        assert!(settings.validate().is_err());
    }
}
