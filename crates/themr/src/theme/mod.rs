//! Theme data model.
//!
//! This module provides:
//!
//! - [`Theme`]: A mapping from style slot names to class-name tokens or nested themes
//! - [`ThemeValue`]: The value stored under a single key
//! - [`Helper`]: Function-valued entries that are carried but never merged
//!
//! Themes can be built with the fluent [`Theme::add`] API or read from JSON
//! and YAML documents through serde.

mod value;
#[allow(clippy::module_inception)]
mod theme;

pub use theme::Theme;
pub use value::{Helper, HelperFn, ThemeValue};
