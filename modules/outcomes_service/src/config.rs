//! Configuration for outcomes service module

use serde::{Deserialize, Serialize};

/// Outcomes service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// sea-orm connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Default tracing filter when `OUTCOMES_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Browser origins allowed by CORS, in addition to any localhost origin
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Insert faculties, tracks, curriculums and bloom levels on startup
    #[serde(default)]
    pub seed_reference_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
            log_level: default_log_level(),
            cors_allowed_origins: default_cors_allowed_origins(),
            seed_reference_data: false,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_database_url() -> String {
    "sqlite://outcomes.db?mode=rwc".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
        "https://ilo-aiu-web.onrender.com".to_string(),
    ]
}
