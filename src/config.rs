//! Configuration handling for the TUI

use crate::registration::DEFAULT_BASE_URL;
use crate::state::{Role, ToastOptions, ToastPosition, ToastTheme};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the API address
const API_URL_ENV: &str = "LIFEFLOW_API_URL";
/// Environment switch for the in-memory back-end
const OFFLINE_ENV: &str = "LIFEFLOW_OFFLINE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Registration API base URL
    pub api_base_url: Option<String>,
    /// Use the in-memory back-end instead of the API
    pub offline: Option<bool>,
    /// Role selected when the form opens
    pub default_role: Option<Role>,
    /// How long error toasts stay visible
    pub toast_duration_ms: Option<u64>,
    /// Toast colour scheme
    pub toast_theme: Option<ToastTheme>,
    /// Corner toasts stack in
    pub toast_position: Option<ToastPosition>,
    /// Simulated latency for the in-memory back-end
    pub offline_latency_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "lifeflow", "lifeflow-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(OFFLINE_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_env(&mut self, api_url: Option<String>, offline: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = Some(url);
        }
        if let Some(flag) = offline {
            self.offline = Some(matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn default_role(&self) -> Role {
        self.default_role.unwrap_or_default()
    }

    pub fn offline_latency(&self) -> Duration {
        Duration::from_millis(self.offline_latency_ms.unwrap_or(400))
    }

    /// Options used for registration error toasts
    pub fn toast_options(&self) -> ToastOptions {
        let defaults = ToastOptions::default();
        ToastOptions {
            auto_close: self
                .toast_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.auto_close),
            theme: self.toast_theme.unwrap_or(defaults.theme),
            position: self.toast_position.unwrap_or(defaults.position),
            ..defaults
        }
    }
}
