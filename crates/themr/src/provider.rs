//! Contextual themes supplied to a subtree of components.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::{Theme, ThemeValue};

/// A theme shared by a subtree of components, keyed by component identifier.
///
/// The provider is an ordinary value: whoever builds the component tree
/// passes it to each [`Themed`](crate::Themed) handle that should see it.
///
/// # Example
///
/// ```rust
/// use themr::{Theme, ThemeProvider};
///
/// let provider = ThemeProvider::new(
///     Theme::new().add("Button", Theme::new().add("root", "btn")),
/// );
///
/// let button = provider.theme_for("Button").unwrap().unwrap();
/// assert_eq!(button.tokens("root"), Some("btn"));
/// assert!(provider.theme_for("Card").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeProvider {
    theme: Theme,
}

impl ThemeProvider {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the full theme, keyed by component identifier.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the theme registered for `identifier`.
    ///
    /// A helper entry under the identifier counts as no theme; class-name
    /// tokens are an error, since they cannot describe a component's slots.
    pub fn theme_for(&self, identifier: &str) -> Result<Option<&Theme>, ThemeError> {
        match self.theme.get(identifier) {
            Some(ThemeValue::Nested(theme)) => Ok(Some(theme)),
            Some(ThemeValue::Tokens(_)) => Err(ThemeError::NotAComponentTheme {
                identifier: identifier.to_string(),
            }),
            Some(ThemeValue::Helper(_)) | None => Ok(None),
        }
    }

    /// Parses a provider theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        Theme::from_json(source).map(Self::new)
    }

    /// Parses a provider theme from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        Theme::from_yaml(source).map(Self::new)
    }
}

impl From<Theme> for ThemeProvider {
    fn from(theme: Theme) -> Self {
        Self::new(theme)
    }
}
