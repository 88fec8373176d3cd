//! Named themes.
//!
//! Components can ship a set of ready-made themes and let callers pick one
//! by name. A caller passes up to two [`ThemeRef`]s: the first becomes the
//! component's local theme, the second its prop theme.

use std::collections::HashMap;
use std::sync::Arc;

use crate::registry::{ThemrConfig, ThemrOptions};
use crate::theme::Theme;
use crate::themed::ThemrProps;

/// A theme given either by name or inline.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeRef {
    Name(String),
    Inline(Theme),
}

impl From<&str> for ThemeRef {
    fn from(name: &str) -> Self {
        ThemeRef::Name(name.to_string())
    }
}

impl From<String> for ThemeRef {
    fn from(name: String) -> Self {
        ThemeRef::Name(name)
    }
}

impl From<Theme> for ThemeRef {
    fn from(theme: Theme) -> Self {
        ThemeRef::Inline(theme)
    }
}

/// A collection of themes addressable by name.
///
/// # Example
///
/// ```rust
/// use themr::{NamedThemes, Theme, ThemeRef};
///
/// let themes = NamedThemes::new()
///     .add("primary", Theme::new().add("root", "btn-primary"))
///     .add("danger", Theme::new().add("root", "btn-danger"))
///     .default_name("primary");
///
/// let (local, prop) = themes.resolve_pair(&[]);
/// assert_eq!(local.and_then(|t| t.tokens("root")), Some("btn-primary"));
/// assert!(prop.is_none());
///
/// let refs = [ThemeRef::from("danger")];
/// let (local, _) = themes.resolve_pair(&refs);
/// assert_eq!(local.and_then(|t| t.tokens("root")), Some("btn-danger"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NamedThemes {
    themes: HashMap<String, Theme>,
    default_name: Option<String>,
}

impl NamedThemes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named theme, returning the updated collection for chaining.
    pub fn add(mut self, name: &str, theme: Theme) -> Self {
        self.themes.insert(name.to_string(), theme);
        self
    }

    /// Sets the theme used when a caller passes no theme reference.
    pub fn default_name(mut self, name: &str) -> Self {
        self.default_name = Some(name.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Resolves a reference. Unknown names resolve to `None`.
    pub fn resolve<'s>(&'s self, theme_ref: &'s ThemeRef) -> Option<&'s Theme> {
        match theme_ref {
            ThemeRef::Name(name) => self.get(name),
            ThemeRef::Inline(theme) => Some(theme),
        }
    }

    /// Resolves the local and prop themes from a caller's references.
    ///
    /// With no references the default name, if any, selects the local theme.
    /// References beyond the second are ignored.
    pub fn resolve_pair<'s>(&'s self, refs: &'s [ThemeRef]) -> (Option<&'s Theme>, Option<&'s Theme>) {
        match refs {
            [] => (self.default_name.as_deref().and_then(|name| self.get(name)), None),
            [first] => (self.resolve(first), None),
            [first, second, ..] => (self.resolve(first), self.resolve(second)),
        }
    }

    /// Builds the configuration and props of a component themed through
    /// this collection.
    pub fn configure(
        &self,
        identifier: impl Into<String>,
        refs: &[ThemeRef],
        options: ThemrOptions,
    ) -> (ThemrConfig, ThemrProps) {
        let (local, prop) = self.resolve_pair(refs);
        let config = ThemrConfig::new(identifier, local.cloned(), options);
        let props = ThemrProps {
            theme: prop.cloned().map(Arc::new),
            ..ThemrProps::default()
        };
        (config, props)
    }
}
