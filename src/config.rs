//! Configuration types for the comparison layer.
//!
//! This module defines [`CompareConfig`], which controls rendering markers and
//! carries the schema version that feeds the identity hashes.
//!
//! # Versioning
//!
//! The `version` field tracks comparison/rendering behavior. Any change to the
//! observable output (marker placement, line policy, hash construction) must
//! be accompanied by a version bump so that:
//!
//! - Old renderings and hashes remain reproducible
//! - Hashes from different versions are distinct
//!
//! Version 0 is reserved and rejected by [`CompareConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::error::CompareError;
use crate::COMPARE_VERSION;

/// Configuration for rendering and identity hashing.
///
/// `CompareConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs or passed across process boundaries.
///
/// # Examples
///
/// ```rust
/// use comparator::CompareConfig;
///
/// let config = CompareConfig::default();
/// assert_eq!(config.version, 1);
/// assert_eq!(config.highlight_open, "**");
/// assert_eq!(config.highlight_close, "**");
/// ```
///
/// ## Custom markers
///
/// ```rust
/// use comparator::CompareConfig;
///
/// let config = CompareConfig {
///     highlight_open: "<mark>".to_string(),
///     highlight_close: "</mark>".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareConfig {
    /// Schema version of the comparison configuration.
    ///
    /// Included in document identity hashes; must be >= 1 (version 0 is
    /// reserved and rejected).
    pub version: u32,

    /// Marker emitted immediately before highlighted content.
    ///
    /// The default `**` renders as bold in Markdown-aware sinks. The core
    /// does not target any specific display technology; sinks that want HTML
    /// or ANSI markers supply their own pair.
    pub highlight_open: String,

    /// Marker emitted immediately after highlighted content.
    pub highlight_close: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version: COMPARE_VERSION,
            highlight_open: "**".to_string(),
            highlight_close: "**".to_string(),
        }
    }
}

impl CompareConfig {
    /// Validate the configuration.
    ///
    /// Markers may be any strings, but an empty marker pair would make
    /// highlighted and unhighlighted lines indistinguishable, which defeats
    /// the rendering contract.
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.version == 0 {
            return Err(CompareError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.highlight_open.is_empty() && self.highlight_close.is_empty() {
            return Err(CompareError::InvalidConfig(
                "highlight markers must not both be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CompareConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.version, COMPARE_VERSION);
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = CompareConfig {
            version: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            CompareError::InvalidConfig(msg) => assert!(msg.contains("version")),
        }
    }

    #[test]
    fn both_markers_empty_rejected() {
        let cfg = CompareConfig {
            highlight_open: String::new(),
            highlight_close: String::new(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn single_sided_marker_allowed() {
        // An open-only marker (e.g. a line prefix) is a legitimate style.
        let cfg = CompareConfig {
            highlight_open: "> ".to_string(),
            highlight_close: String::new(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = CompareConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back: CompareConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cfg, back);
    }
}
