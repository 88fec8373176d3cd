//! Theme merging.
//!
//! [`merge`] combines two themes key by key:
//!
//! - Class-name tokens under the same key are concatenated, original first,
//!   with duplicate tokens removed (first occurrence wins).
//! - Nested themes under the same key are merged recursively.
//! - Keys present on one side only are taken as they are.
//! - Helper entries are dropped from both sides.
//!
//! Tokens on one side and a nested theme on the other is an error.
//!
//! [`merge_all`] folds any number of themes through [`merge`], left to right.

use std::collections::HashSet;

use crate::error::ThemeError;
use crate::theme::{Theme, ThemeValue};

/// Merges `mixin` into `original`, returning a new theme.
///
/// Neither input is modified. A missing theme behaves like an empty one.
///
/// # Example
///
/// ```rust
/// use themr::{merge, Theme};
///
/// let base = Theme::new().add("button", "btn");
/// let custom = Theme::new().add("button", "btn btn-large");
///
/// let merged = merge(Some(&base), Some(&custom)).unwrap();
/// assert_eq!(merged.tokens("button"), Some("btn btn-large"));
/// ```
pub fn merge(original: Option<&Theme>, mixin: Option<&Theme>) -> Result<Theme, ThemeError> {
    let mut result = original.map(Theme::without_helpers).unwrap_or_default();
    let Some(mixin) = mixin else {
        return Ok(result);
    };

    for (key, mixin_value) in mixin {
        let merged = match (result.get(key), mixin_value) {
            (_, ThemeValue::Helper(_)) => continue,
            (Some(ThemeValue::Nested(existing)), ThemeValue::Nested(nested)) => ThemeValue::Nested(
                merge(Some(existing), Some(nested)).map_err(|err| err.nested_under(key))?,
            ),
            (Some(ThemeValue::Tokens(existing)), ThemeValue::Tokens(tokens)) => {
                ThemeValue::Tokens(concat_tokens(existing, tokens))
            }
            (Some(existing @ ThemeValue::Tokens(_)), ThemeValue::Nested(_))
            | (Some(existing @ ThemeValue::Nested(_)), ThemeValue::Tokens(_)) => {
                tracing::debug!(key = %key, "theme value type mismatch");
                return Err(ThemeError::TypeMismatch {
                    key: key.clone(),
                    original: existing.describe(),
                    mixin: mixin_value.describe(),
                });
            }
            (None | Some(ThemeValue::Helper(_)), ThemeValue::Nested(nested)) => {
                ThemeValue::Nested(nested.without_helpers())
            }
            (None | Some(ThemeValue::Helper(_)), ThemeValue::Tokens(tokens)) => {
                ThemeValue::Tokens(tokens.clone())
            }
        };
        result.insert(key.clone(), merged);
    }

    Ok(result)
}

/// Merges themes left to right, starting from an empty theme.
///
/// `merge_all([a, b, c])` equals `merge(merge(merge({}, a), b), c)`.
///
/// # Example
///
/// ```rust
/// use themr::{merge_all, Theme};
///
/// let merged = merge_all([
///     &Theme::new().add("test", "a"),
///     &Theme::new().add("test", "b"),
///     &Theme::new().add("test", "foo").add("foo", "foo"),
/// ])
/// .unwrap();
///
/// assert_eq!(merged.tokens("test"), Some("a b foo"));
/// assert_eq!(merged.tokens("foo"), Some("foo"));
/// ```
pub fn merge_all<'a, I>(themes: I) -> Result<Theme, ThemeError>
where
    I: IntoIterator<Item = &'a Theme>,
{
    themes
        .into_iter()
        .try_fold(Theme::new(), |acc, theme| merge(Some(&acc), Some(theme)))
}

/// Splits a class-name string into its tokens. Empty tokens are skipped.
pub fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Joins tokens with single spaces, keeping only the first occurrence of
/// each token and skipping empty ones.
///
/// ```rust
/// use themr::join_tokens;
///
/// assert_eq!(join_tokens(["a", "b", "", "a", "c"]), "a b c");
/// ```
pub fn join_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| !token.is_empty() && seen.insert(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenates two class-name strings, deduplicating tokens.
pub fn concat_tokens(original: &str, mixin: &str) -> String {
    join_tokens(split_tokens(original).chain(split_tokens(mixin)))
}
