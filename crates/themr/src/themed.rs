//! Per-component theme calculation.
//!
//! A [`Themed`] handle stands for one rendered instance of a themed
//! component. It combines the contextual theme from a [`ThemeProvider`],
//! the component's local theme from its [`ThemrConfig`] and the theme
//! passed in [`ThemrProps`], and caches the result until one of those
//! inputs changes.

use std::sync::Arc;

use crate::compose::ComposeMode;
use crate::error::ThemeError;
use crate::namespace::extract_namespace;
use crate::provider::ThemeProvider;
use crate::registry::ThemrConfig;
use crate::theme::Theme;

/// Theming props accepted by a themed component.
///
/// The prop theme is shared through an [`Arc`]: a new allocation means a new
/// theme, and only then is the component theme recomputed.
#[derive(Debug, Clone, Default)]
pub struct ThemrProps {
    pub theme: Option<Arc<Theme>>,
    /// Overrides the compose mode from [`ThemrOptions`](crate::ThemrOptions).
    pub compose: Option<ComposeMode>,
    /// Selects prefixed keys of the prop theme, see [`extract_namespace`].
    pub namespace: Option<String>,
}

impl ThemrProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn compose(mut self, mode: ComposeMode) -> Self {
        self.compose = Some(mode);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// The namespace in effect; an empty namespace counts as none.
    fn effective_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    fn same_theme(&self, other: &ThemrProps) -> bool {
        match (&self.theme, &other.theme) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns the prop theme narrowed to the configured namespace.
    fn namespaced_theme(&self) -> Result<Option<Theme>, ThemeError> {
        match (self.effective_namespace(), &self.theme) {
            (None, theme) => Ok(theme.as_deref().cloned()),
            (Some(namespace), Some(theme)) => Ok(Some(extract_namespace(theme, namespace))),
            (Some(namespace), None) => Err(ThemeError::InvalidNamespace {
                namespace: namespace.to_string(),
            }),
        }
    }
}

/// Props handed to the wrapped element: its own props plus the computed theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemedProps<P> {
    pub props: P,
    pub theme: Theme,
}

/// A themed component instance.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use themr::{Theme, ThemeProvider, Themed, ThemrConfig, ThemrOptions, ThemrProps};
///
/// let provider = ThemeProvider::new(
///     Theme::new().add("Container", Theme::new().add("foo", "foo_123")),
/// );
/// let config = ThemrConfig::new(
///     "Container",
///     Some(Theme::new().add("foo", "foo_567")),
///     ThemrOptions::new(),
/// );
/// let props = ThemrProps::new().theme(Theme::new().add("foo", "foo_89"));
///
/// let themed = Themed::new(&config, Some(&provider), props)?;
/// assert_eq!(themed.theme().tokens("foo"), Some("foo_123 foo_567 foo_89"));
/// # Ok::<(), themr::ThemeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Themed<'a> {
    config: &'a ThemrConfig,
    provider: Option<&'a ThemeProvider>,
    props: ThemrProps,
    theme: Theme,
}

impl<'a> Themed<'a> {
    /// Creates a handle and computes its theme.
    pub fn new(
        config: &'a ThemrConfig,
        provider: Option<&'a ThemeProvider>,
        props: ThemrProps,
    ) -> Result<Self, ThemeError> {
        let theme = calc_theme(config, provider, &props)?;
        Ok(Self {
            config,
            provider,
            props,
            theme,
        })
    }

    /// The cached component theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn props(&self) -> &ThemrProps {
        &self.props
    }

    pub fn config(&self) -> &ThemrConfig {
        self.config
    }

    /// Compose mode in effect: the prop override, else the configured default.
    pub fn compose_mode(&self) -> ComposeMode {
        effective_mode(self.config, &self.props)
    }

    /// Returns true if `props` would change an input of the theme
    /// calculation. Modes and namespaces are compared after defaults apply.
    fn props_changed(&self, props: &ThemrProps) -> bool {
        !props.same_theme(&self.props)
            || effective_mode(self.config, props) != self.compose_mode()
            || props.effective_namespace() != self.props.effective_namespace()
    }

    /// Applies new props.
    ///
    /// The theme is recomputed only when the effective compose mode, the
    /// namespace or the prop theme allocation changed. Passing the configured
    /// default mode explicitly is not a change. Returns whether it was
    /// recomputed. On error the handle keeps its previous props and theme.
    pub fn update(&mut self, props: ThemrProps) -> Result<bool, ThemeError> {
        if !self.props_changed(&props) {
            return Ok(false);
        }
        self.theme = calc_theme(self.config, self.provider, &props)?;
        self.props = props;
        Ok(true)
    }

    /// Switches to another contextual theme and recomputes.
    pub fn set_provider(&mut self, provider: Option<&'a ThemeProvider>) -> Result<(), ThemeError> {
        self.theme = calc_theme(self.config, provider, &self.props)?;
        self.provider = provider;
        Ok(())
    }

    /// Builds the props for the wrapped element.
    pub fn render<P>(&self, props: P) -> ThemedProps<P> {
        ThemedProps {
            props,
            theme: self.theme.clone(),
        }
    }

    /// Builds the props for the wrapped element with a custom mapping.
    pub fn render_with<P, R, F>(&self, props: P, map: F) -> R
    where
        F: FnOnce(P, &Theme) -> R,
    {
        map(props, &self.theme)
    }
}

fn effective_mode(config: &ThemrConfig, props: &ThemrProps) -> ComposeMode {
    props.compose.unwrap_or(config.options().compose)
}

fn calc_theme(
    config: &ThemrConfig,
    provider: Option<&ThemeProvider>,
    props: &ThemrProps,
) -> Result<Theme, ThemeError> {
    let mode = effective_mode(config, props);
    let context = match provider {
        Some(provider) => provider.theme_for(config.identifier())?,
        None => None,
    };
    let prop_theme = props.namespaced_theme()?;
    tracing::trace!(identifier = config.identifier(), mode = %mode, "computing component theme");
    mode.compose(context, config.local_theme(), prop_theme.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemrOptions;

    fn provider() -> ThemeProvider {
        ThemeProvider::new(Theme::new().add("Container", Theme::new().add("foo", "foo_123")))
    }

    fn config(local: Option<Theme>, mode: ComposeMode) -> ThemrConfig {
        ThemrConfig::new("Container", local, ThemrOptions::new().compose(mode))
    }

    #[test]
    fn test_context_theme_only() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let themed = Themed::new(&config, Some(&provider), ThemrProps::new()).unwrap();
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_123"));
    }

    #[test]
    fn test_no_theme_anywhere() {
        let config = config(None, ComposeMode::Deeply);
        let themed = Themed::new(&config, None, ThemrProps::new()).unwrap();
        assert!(themed.theme().is_empty());
    }

    #[test]
    fn test_off_without_props_uses_local() {
        let provider = provider();
        let config = config(Some(Theme::new().add("foo", "foo_567")), ComposeMode::Off);
        let themed = Themed::new(&config, Some(&provider), ThemrProps::new()).unwrap();
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_567"));
    }

    #[test]
    fn test_prop_compose_overrides_options() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let props = ThemrProps::new()
            .theme(Theme::new().add("foo", "foo_567"))
            .compose(ComposeMode::Off);
        let themed = Themed::new(&config, Some(&provider), props).unwrap();
        assert_eq!(themed.compose_mode(), ComposeMode::Off);
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_567"));
    }

    #[test]
    fn test_namespace_composes() {
        let provider = provider();
        let config = config(Some(Theme::new().add("foo", "foo_567")), ComposeMode::Deeply);
        let props = ThemrProps::new()
            .theme(
                Theme::new()
                    .add("foo", "foo_89")
                    .add("containerFoo", "foo_000"),
            )
            .namespace("container");
        let themed = Themed::new(&config, Some(&provider), props).unwrap();
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_123 foo_567 foo_000"));
    }

    #[test]
    fn test_namespace_without_theme_is_error() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let err = Themed::new(&config, Some(&provider), ThemrProps::new().namespace("container"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidNamespace { .. }));
    }

    #[test]
    fn test_empty_namespace_is_ignored() {
        let config = config(None, ComposeMode::Deeply);
        let themed = Themed::new(&config, None, ThemrProps::new().namespace("")).unwrap();
        assert!(themed.theme().is_empty());
    }

    #[test]
    fn test_update_without_changes_does_not_recompute() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let prop_theme = Arc::new(Theme::new().add("foo", "bar"));
        let props = ThemrProps::new().theme(prop_theme.clone());
        let mut themed = Themed::new(&config, Some(&provider), props.clone()).unwrap();

        assert!(!themed.update(props).unwrap());
        assert!(!themed.update(ThemrProps::new().theme(prop_theme)).unwrap());
    }

    #[test]
    fn test_update_compares_effective_mode_and_namespace() {
        let config = config(None, ComposeMode::Deeply);
        let theme_a = Arc::new(Theme::new());
        let theme_b = Arc::new(Theme::new());
        let mut themed = Themed::new(&config, None, ThemrProps::new().theme(theme_a)).unwrap();

        assert!(themed.update(ThemrProps::new().theme(theme_b.clone())).unwrap());
        assert!(themed
            .update(ThemrProps::new().theme(theme_b.clone()).namespace("nsA"))
            .unwrap());

        // the configured default, spelled out, is not a change
        let explicit_default = ThemrProps::new()
            .theme(theme_b.clone())
            .namespace("nsA")
            .compose(ComposeMode::Deeply);
        assert!(!themed.update(explicit_default).unwrap());

        let softly = ThemrProps::new()
            .theme(theme_b)
            .namespace("nsA")
            .compose(ComposeMode::Softly);
        assert!(themed.update(softly).unwrap());
        assert_eq!(themed.compose_mode(), ComposeMode::Softly);
    }

    #[test]
    fn test_update_treats_empty_namespace_as_none() {
        let config = config(None, ComposeMode::Deeply);
        let theme = Arc::new(Theme::new().add("foo", "bar"));
        let mut themed = Themed::new(&config, None, ThemrProps::new().theme(theme.clone())).unwrap();

        assert!(!themed.update(ThemrProps::new().theme(theme).namespace("")).unwrap());
    }

    #[test]
    fn test_update_with_new_theme_recomputes() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let mut themed = Themed::new(&config, Some(&provider), ThemrProps::new()).unwrap();

        let changed = themed
            .update(ThemrProps::new().theme(Theme::new().add("foo", "foo_89")))
            .unwrap();
        assert!(changed);
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_123 foo_89"));
    }

    #[test]
    fn test_update_error_keeps_previous_state() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let mut themed = Themed::new(&config, Some(&provider), ThemrProps::new()).unwrap();

        let err = themed
            .update(ThemrProps::new().theme(Theme::new().add("foo", Theme::new())))
            .unwrap_err();
        assert!(matches!(err, ThemeError::TypeMismatch { .. }));
        assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_123"));
        assert!(themed.props().theme.is_none());
    }

    #[test]
    fn test_set_provider_recomputes() {
        let first = provider();
        let second = ThemeProvider::new(Theme::new().add("Container", Theme::new().add("foo", "other")));
        let config = config(None, ComposeMode::Deeply);
        let mut themed = Themed::new(&config, Some(&first), ThemrProps::new()).unwrap();

        themed.set_provider(Some(&second)).unwrap();
        assert_eq!(themed.theme().tokens("foo"), Some("other"));
        themed.set_provider(None).unwrap();
        assert!(themed.theme().is_empty());
    }

    #[test]
    fn test_render_forwards_props_and_theme() {
        let provider = provider();
        let config = config(None, ComposeMode::Deeply);
        let themed = Themed::new(&config, Some(&provider), ThemrProps::new()).unwrap();

        let rendered = themed.render("label");
        assert_eq!(rendered.props, "label");
        assert_eq!(rendered.theme, Theme::new().add("foo", "foo_123"));

        let class = themed.render_with((), |_, theme| theme.tokens("foo").map(str::to_string));
        assert_eq!(class.as_deref(), Some("foo_123"));
    }
}
