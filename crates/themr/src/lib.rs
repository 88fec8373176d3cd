//! # Themr - composable class-name themes
//!
//! `themr` combines the style mappings of a UI component into the one theme
//! applied when it renders. A theme maps semantic slot names (`root`,
//! `icon`, `label`) to whitespace-separated class names, or to nested themes
//! for sub-elements.
//!
//! ## Merging
//!
//! [`merge`] and [`merge_all`] combine themes key by key: class names are
//! concatenated and deduplicated, nested themes are merged recursively.
//!
//! ```rust
//! use themr::{merge_all, Theme};
//!
//! let base = Theme::new()
//!     .add("root", "btn")
//!     .add("icon", Theme::new().add("left", "icon"));
//! let custom = Theme::new()
//!     .add("root", "btn btn-large")
//!     .add("icon", Theme::new().add("left", "icon-muted"));
//!
//! let theme = merge_all([&base, &custom]).unwrap();
//! assert_eq!(theme.tokens("root"), Some("btn btn-large"));
//! assert_eq!(
//!     theme.nested("icon").and_then(|icon| icon.tokens("left")),
//!     Some("icon icon-muted"),
//! );
//! ```
//!
//! ## Component themes
//!
//! A component draws from three sources, in increasing priority:
//!
//! 1. The contextual theme, looked up by component identifier in a [`ThemeProvider`]
//! 2. The local theme declared in the component's [`ThemrConfig`]
//! 3. The theme passed in [`ThemrProps`]
//!
//! The [`ComposeMode`] decides how they combine. [`Themed`] computes and
//! caches the result; [`ThemrRegistry`] holds the configurations of all
//! components; [`NamedThemes`] lets callers pick prepared themes by name.

pub mod compose;
pub mod error;
pub mod merge;
pub mod named;
pub mod namespace;
pub mod provider;
pub mod registry;
pub mod theme;
pub mod themed;

pub use compose::ComposeMode;
pub use error::ThemeError;
pub use merge::{concat_tokens, join_tokens, merge, merge_all, split_tokens};
pub use named::{NamedThemes, ThemeRef};
pub use namespace::extract_namespace;
pub use provider::ThemeProvider;
pub use registry::{ThemrConfig, ThemrOptions, ThemrRegistry};
pub use theme::{Helper, Theme, ThemeValue};
pub use themed::{Themed, ThemedProps, ThemrProps};
