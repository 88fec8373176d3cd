//! Integration tests for composing component themes from a provider,
//! a registry and props.

use std::sync::Arc;

use themr::{
    merge, ComposeMode, Helper, NamedThemes, Theme, ThemeError, ThemeProvider, ThemeRef, Themed,
    ThemrOptions, ThemrProps, ThemrRegistry,
};

fn provider(container: Theme) -> ThemeProvider {
    ThemeProvider::new(Theme::new().add("Container", container))
}

#[test]
fn test_passes_context_theme() {
    let provider = provider(Theme::new().add("foo", "foo_1234"));
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register("Container", None, ThemrOptions::new())
        .unwrap();

    let themed = Themed::new(config, Some(&provider), ThemrProps::new()).unwrap();
    assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_1234"));
}

#[test]
fn test_composes_context_local_and_props() {
    let provider = provider(Theme::new().add("foo", "foo_123"));
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register(
            "Container",
            Some(Theme::new().add("foo", "foo_567")),
            ThemrOptions::new(),
        )
        .unwrap();
    let props = ThemrProps::new().theme(Theme::new().add("foo", "foo_89"));

    let themed = Themed::new(config, Some(&provider), props).unwrap();
    assert_eq!(themed.theme(), &Theme::new().add("foo", "foo_123 foo_567 foo_89"));
}

#[test]
fn test_options_compose_softly() {
    let provider = provider(Theme::new().add("foo", "foo_123").add("bar", "bar_765"));
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register(
            "Container",
            None,
            ThemrOptions::new().compose(ComposeMode::Softly),
        )
        .unwrap();
    let props = ThemrProps::new().theme(Theme::new().add("foo", "foo_567"));

    let themed = Themed::new(config, Some(&provider), props).unwrap();
    assert_eq!(
        themed.theme(),
        &Theme::new().add("foo", "foo_567").add("bar", "bar_765")
    );
}

#[test]
fn test_props_disable_composition() {
    let provider = provider(Theme::new().add("foo", "foo_123"));
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register("Container", None, ThemrOptions::new())
        .unwrap();
    let prop_theme = Theme::new().add("foo", "foo_567");
    let props = ThemrProps::new()
        .theme(prop_theme.clone())
        .compose(ComposeMode::Off);

    let themed = Themed::new(config, Some(&provider), props).unwrap();
    assert_eq!(themed.theme(), &prop_theme);
}

#[test]
fn test_invalid_compose_mode_names_value() {
    let err = "foo".parse::<ComposeMode>().unwrap_err();
    assert!(matches!(err, ThemeError::InvalidComposeMode { ref value, .. } if value == "foo"));
    assert!(err.to_string().contains("foo"));
}

#[test]
fn test_double_registration_merges_local_themes() {
    let mut registry = ThemrRegistry::new();
    registry
        .register("Foo", Some(Theme::new().add("foo", "foo")), ThemrOptions::new())
        .unwrap();
    let config = registry
        .register("Foo", Some(Theme::new().add("bar", "bar")), ThemrOptions::new())
        .unwrap();

    let themed = Themed::new(config, None, ThemrProps::new()).unwrap();
    assert_eq!(
        themed.theme(),
        &Theme::new().add("foo", "foo").add("bar", "bar")
    );
}

#[test]
fn test_rerender_with_same_props_keeps_theme() {
    let provider = provider(Theme::new().add("foo", "foo_123"));
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register("Container", None, ThemrOptions::new())
        .unwrap();
    let prop_theme = Arc::new(Theme::new().add("foo", "foo_89"));

    let mut themed = Themed::new(
        config,
        Some(&provider),
        ThemrProps::new().theme(prop_theme.clone()),
    )
    .unwrap();
    assert!(!themed.update(ThemrProps::new().theme(prop_theme)).unwrap());

    // an equal theme in a fresh allocation still counts as a change
    let fresh = ThemrProps::new().theme(Theme::new().add("foo", "foo_89"));
    assert!(themed.update(fresh).unwrap());
    assert_eq!(themed.theme().tokens("foo"), Some("foo_123 foo_89"));
}

#[test]
fn test_helpers_from_style_loaders_never_reach_components() {
    let local = Theme::new()
        .add("root", "root_1")
        .add("_getCss", Helper::new(|css| css.to_string()));
    let provider = ThemeProvider::from_json(r#"{"Container": {"root": "root_0"}}"#).unwrap();
    let mut registry = ThemrRegistry::new();
    let config = registry
        .register("Container", Some(local), ThemrOptions::new())
        .unwrap();

    let themed = Themed::new(config, Some(&provider), ThemrProps::new()).unwrap();
    assert_eq!(themed.theme(), &Theme::new().add("root", "root_0 root_1"));
}

#[test]
fn test_named_themes_feed_component() {
    let themes = NamedThemes::new()
        .add("primary", Theme::new().add("root", "primary"))
        .add("outlined", Theme::new().add("root", "outlined"))
        .default_name("primary");
    let provider = ThemeProvider::new(
        Theme::new().add("Button", Theme::new().add("root", "btn")),
    );

    let (config, props) = themes.configure("Button", &[], ThemrOptions::new());
    let themed = Themed::new(&config, Some(&provider), props).unwrap();
    assert_eq!(themed.theme().tokens("root"), Some("btn primary"));

    let refs = [ThemeRef::from("primary"), ThemeRef::from("outlined")];
    let (config, props) = themes.configure("Button", &refs, ThemrOptions::new());
    let themed = Themed::new(&config, Some(&provider), props).unwrap();
    assert_eq!(themed.theme().tokens("root"), Some("btn primary outlined"));
}

#[test]
fn test_theme_documents_merge() {
    let base = Theme::from_yaml(
        "root: card\nheader:\n  title: card-title\n  icon: card-icon\n",
    )
    .unwrap();
    let custom = Theme::from_json(r#"{"root": "card elevated", "header": {"title": "bold"}}"#)
        .unwrap();

    let merged = merge(Some(&base), Some(&custom)).unwrap();
    assert_eq!(
        serde_json::to_value(&merged).unwrap(),
        serde_json::json!({
            "root": "card elevated",
            "header": {"title": "card-title bold", "icon": "card-icon"}
        })
    );
}
