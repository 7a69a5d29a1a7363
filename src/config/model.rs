//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box
//! against the public Open Trivia DB.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how to reach the trivia provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
    #[serde(default = "default_questions_path")]
    pub questions_path: String,
    /// Query parameter carrying the batch size (`amount` for Open Trivia DB).
    #[serde(default = "default_amount_param")]
    pub amount_param: String,
    /// No timeout unless set.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            categories_path: default_categories_path(),
            questions_path: default_questions_path(),
            amount_param: default_amount_param(),
            request_timeout_secs: None,
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show provider failures in the status bar instead of failing silently
    /// to an empty screen.
    #[serde(default)]
    pub show_errors: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_errors: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic logging settings. Logs go to a file since the terminal is
/// owned by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://opentdb.com".to_string()
}
fn default_categories_path() -> String {
    "api_category.php".to_string()
}
fn default_questions_path() -> String {
    "api.php".to_string()
}
fn default_amount_param() -> String {
    "amount".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_log_dir() -> String {
    "~/.local/share/quizterm/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
