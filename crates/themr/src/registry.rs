//! Component theming configuration.
//!
//! A [`ThemrRegistry`] maps component identifiers to their [`ThemrConfig`]:
//! the local theme declared by the component and its [`ThemrOptions`]. The
//! registry is owned by the caller and built once, when components are
//! composed, then handed to whatever creates [`Themed`](crate::Themed)
//! handles.
//!
//! Registering the same identifier twice does not create a second
//! configuration. The new local theme is merged into the existing one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::compose::ComposeMode;
use crate::error::ThemeError;
use crate::merge::merge_all;
use crate::theme::Theme;

/// Options controlling how a component combines its themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemrOptions {
    /// Default compose mode, used unless a prop overrides it.
    #[serde(alias = "composeTheme")]
    pub compose: ComposeMode,
}

impl ThemrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose(mut self, mode: ComposeMode) -> Self {
        self.compose = mode;
        self
    }
}

/// Theming configuration of one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemrConfig {
    identifier: String,
    local_theme: Option<Theme>,
    options: ThemrOptions,
}

impl ThemrConfig {
    pub fn new(identifier: impl Into<String>, local_theme: Option<Theme>, options: ThemrOptions) -> Self {
        Self {
            identifier: identifier.into(),
            local_theme,
            options,
        }
    }

    /// The identifier used to look up the contextual theme.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn local_theme(&self) -> Option<&Theme> {
        self.local_theme.as_ref()
    }

    pub fn options(&self) -> ThemrOptions {
        self.options
    }

    /// Merges another local theme into this configuration's local theme.
    fn absorb(&mut self, local_theme: Option<Theme>) -> Result<(), ThemeError> {
        let Some(extra) = local_theme else {
            return Ok(());
        };
        let merged = merge_all(self.local_theme.iter().chain(Some(&extra)))?;
        self.local_theme = Some(merged);
        Ok(())
    }
}

/// Caller-owned map from component identifier to theming configuration.
///
/// # Example
///
/// ```rust
/// use themr::{Theme, ThemrOptions, ThemrRegistry};
///
/// let mut registry = ThemrRegistry::new();
/// registry.register("Foo", Some(Theme::new().add("foo", "foo")), ThemrOptions::new())?;
/// registry.register("Foo", Some(Theme::new().add("bar", "bar")), ThemrOptions::new())?;
///
/// let config = registry.get("Foo").unwrap();
/// assert_eq!(
///     config.local_theme(),
///     Some(&Theme::new().add("foo", "foo").add("bar", "bar"))
/// );
/// # Ok::<(), themr::ThemeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemrRegistry {
    configs: HashMap<String, ThemrConfig>,
}

impl ThemrRegistry {
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Registers a component.
    ///
    /// If `identifier` is already registered, `local_theme` is merged into
    /// the existing local theme and the existing options are kept.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        local_theme: Option<Theme>,
        options: ThemrOptions,
    ) -> Result<&ThemrConfig, ThemeError> {
        let identifier = identifier.into();
        if let Some(existing) = self.configs.get_mut(&identifier) {
            tracing::debug!(identifier = %identifier, "extending registered local theme");
            existing.absorb(local_theme)?;
        } else {
            let config = ThemrConfig::new(identifier.clone(), local_theme, options);
            self.configs.insert(identifier.clone(), config);
        }
        Ok(&self.configs[&identifier])
    }

    pub fn get(&self, identifier: &str) -> Option<&ThemrConfig> {
        self.configs.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.configs.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Returns all registered identifiers, in no particular order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}
