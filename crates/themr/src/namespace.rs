//! Theme namespaces.
//!
//! A single theme object can carry styles for several components by
//! prefixing keys, e.g. `containerFoo` for the `foo` slot of a container.
//! [`extract_namespace`] selects the keys of one prefix and strips it.

use crate::theme::Theme;

/// Returns the entries of `theme` whose key starts with `namespace`, with
/// the prefix removed and the first remaining character lowercased.
///
/// ```rust
/// use themr::{extract_namespace, Theme};
///
/// let theme = Theme::new()
///     .add("foo", "foo_89")
///     .add("containerFoo", "foo_000");
///
/// let scoped = extract_namespace(&theme, "container");
/// assert_eq!(scoped, Theme::new().add("foo", "foo_000"));
/// ```
pub fn extract_namespace(theme: &Theme, namespace: &str) -> Theme {
    theme
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(namespace)
                .map(|rest| (uncapitalize(rest), value.clone()))
        })
        .collect()
}

fn uncapitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
