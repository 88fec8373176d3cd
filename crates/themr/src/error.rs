//! Theme composition errors.

use thiserror::Error;

/// Error returned when themes cannot be composed.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Class-name tokens and a nested theme met under the same key.
    #[error("cannot merge {mixin} into {original} at key '{key}': class names and nested themes do not mix")]
    TypeMismatch {
        /// Dotted path of the offending key, e.g. `icon.left`
        key: String,
        /// The value already present in the original theme
        original: String,
        /// The value coming from the mixin theme
        mixin: String,
    },

    /// A compose mode outside the supported set was requested.
    #[error("invalid compose mode '{value}'; valid modes are {}", valid.join(", "))]
    InvalidComposeMode {
        value: String,
        valid: Vec<&'static str>,
    },

    /// A theme namespace was given without a theme to apply it to.
    #[error("theme namespace '{namespace}' can only be used together with a theme")]
    InvalidNamespace { namespace: String },

    /// The contextual theme holds class names where a component theme was expected.
    #[error("contextual theme entry for '{identifier}' is not a nested theme")]
    NotAComponentTheme { identifier: String },

    #[error("invalid theme document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid theme document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ThemeError {
    /// Prefixes the key of a type mismatch with its parent key.
    pub(crate) fn nested_under(self, parent: &str) -> Self {
        match self {
            ThemeError::TypeMismatch {
                key,
                original,
                mixin,
            } => ThemeError::TypeMismatch {
                key: format!("{}.{}", parent, key),
                original,
                mixin,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ThemeError::TypeMismatch {
            key: "test".to_string(),
            original: "\"test\"".to_string(),
            mixin: "{}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'test'"));
        assert!(msg.contains("\"test\""));
        assert!(msg.contains("{}"));
    }

    #[test]
    fn test_invalid_compose_mode_display() {
        let err = ThemeError::InvalidComposeMode {
            value: "foo".to_string(),
            valid: vec!["deeply", "softly", "off"],
        };
        let msg = err.to_string();
        assert!(msg.contains("'foo'"));
        assert!(msg.contains("deeply, softly, off"));
    }

    #[test]
    fn test_nested_under_prefixes_key() {
        let err = ThemeError::TypeMismatch {
            key: "left".to_string(),
            original: "\"a\"".to_string(),
            mixin: "{}".to_string(),
        }
        .nested_under("icon");
        assert!(matches!(err, ThemeError::TypeMismatch { ref key, .. } if key == "icon.left"));
    }

    #[test]
    fn test_nested_under_leaves_other_errors() {
        let err = ThemeError::InvalidNamespace {
            namespace: "ns".to_string(),
        }
        .nested_under("icon");
        assert!(matches!(err, ThemeError::InvalidNamespace { .. }));
    }
}
