//! Display configuration for SitePulse.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Display settings threaded into the formatter by the caller.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Whether site URLs are exposed in the report by default (default: true).
    /// HTTP-type monitors expose their URL regardless of this flag.
    pub show_links: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_links: true }
    }
}

impl DisplayConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SITEPULSE_SHOW_LINKS`: expose site URLs by default (default: true)
    pub fn load() -> Self {
        let mut cfg = Self::default();

        if let Ok(raw) = env::var("SITEPULSE_SHOW_LINKS") {
            if let Ok(show) = raw.parse() {
                cfg.show_links = show;
            }
        }

        cfg
    }
}
