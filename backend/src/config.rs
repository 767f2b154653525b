//! Backend Configuration
//!
//! Loads configuration from environment variables.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Backend configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Multiplier applied to the per-operation latency table
    /// (default: 1.0; 0.0 disables simulated latency entirely)
    pub latency_scale: f64,

    /// Directory holding the session file (default: ".studyhall")
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            latency_scale: env::var("STUDYHALL_LATENCY_SCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1.0),
            data_dir: env::var("STUDYHALL_DATA_DIR")
                .map_or_else(|_| PathBuf::from(".studyhall"), PathBuf::from),
        })
    }

    /// Check if simulated latency is enabled.
    #[must_use]
    pub fn has_latency(&self) -> bool {
        self.latency_scale > 0.0
    }

    /// Create a default configuration for testing.
    ///
    /// Latency is disabled; tests that touch the session file should point
    /// `data_dir` at their own temporary directory.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            latency_scale: 0.0,
            data_dir: std::env::temp_dir().join("studyhall-test"),
        }
    }
}
