//! Configuration types for the build-order engine.
//!
//! This module provides configuration structures that control the
//! engine's defensive bounds. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LimitsConfig`] - Defensive input bounds applied before parsing.
//!
//! # Example
//!
//! ```
//! # use skillpath::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.limits().pattern_limits().max_len(), 256);
//! ```

use serde::Deserialize;

use skillpath_parser::PatternLimits;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input bound configuration section.
    #[serde(default)]
    limits: LimitsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Returns the limits configuration.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }
}

/// Defensive input bounds applied before parsing.
///
/// Fields that are not set fall back to the engine defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted pattern length in bytes.
    #[serde(default)]
    max_pattern_len: Option<usize>,
}

impl LimitsConfig {
    /// Creates a new [`LimitsConfig`] with the specified maximum length.
    pub fn new(max_pattern_len: Option<usize>) -> Self {
        Self { max_pattern_len }
    }

    /// Returns the [`PatternLimits`] handed to the parser.
    pub fn pattern_limits(&self) -> PatternLimits {
        self.max_pattern_len
            .map(PatternLimits::new)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = AppConfig::default();
        assert_eq!(
            config.limits().pattern_limits().max_len(),
            PatternLimits::DEFAULT_MAX_LEN
        );
    }

    #[test]
    fn test_configured_limit() {
        let config = AppConfig::new(LimitsConfig::new(Some(64)));
        assert_eq!(config.limits().pattern_limits().max_len(), 64);
    }
}
