//! Editor configuration

use serde::{Deserialize, Serialize};

/// Largest precision honored; an `f64` carries no more fractional digits
pub const MAX_PRECISION: usize = 17;

/// Settings that change how results are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Maximum fractional digits in a rendered result.
    /// `None` keeps the shortest exact representation.
    pub precision: Option<usize>,
}

impl EditorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set result precision, clamped to [`MAX_PRECISION`]
    #[must_use]
    pub const fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = match precision {
            Some(digits) if digits > MAX_PRECISION => Some(MAX_PRECISION),
            other => other,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_precision() {
        assert_eq!(EditorConfig::new().precision, None);
    }

    #[test]
    fn test_with_precision() {
        let config = EditorConfig::new().with_precision(Some(4));
        assert_eq!(config.precision, Some(4));
    }

    #[test]
    fn test_with_precision_clamps() {
        let config = EditorConfig::new().with_precision(Some(1_000_000_000));
        assert_eq!(config.precision, Some(MAX_PRECISION));
        let config = EditorConfig::new().with_precision(Some(MAX_PRECISION));
        assert_eq!(config.precision, Some(MAX_PRECISION));
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_deserialize_precision() {
        let config: EditorConfig = serde_json::from_str(r#"{"precision": 6}"#).unwrap();
        assert_eq!(config.precision, Some(6));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<EditorConfig, _> = serde_json::from_str(r#"{"memory": true}"#);
        assert!(result.is_err());
    }
}
