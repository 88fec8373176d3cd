//! Values stored under a theme key.

use std::fmt;
use std::sync::Arc;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::theme::Theme;

/// Signature of a helper function attached to a theme by upstream tooling.
pub type HelperFn = dyn Fn(&str) -> String + Send + Sync;

/// A function-valued theme entry.
///
/// Style loaders sometimes attach helper functions next to the class names
/// they export. Helpers are carried so that themes built from such modules
/// can be represented, but they are never merged and never appear in a
/// merged result.
///
/// Two helpers compare equal only when they share the same allocation.
#[derive(Clone)]
pub struct Helper(Arc<HelperFn>);

impl Helper {
    /// Wraps a function as a helper entry.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the helper.
    pub fn call(&self, input: &str) -> String {
        (self.0)(input)
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Helper(..)")
    }
}

impl PartialEq for Helper {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The value under a single theme key.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValue {
    /// Whitespace-separated class-name tokens, e.g. `"button primary"`.
    Tokens(String),
    /// A nested theme, for components exposing sub-element slots.
    Nested(Theme),
    /// A function injected by upstream tooling; never data.
    Helper(Helper),
}

impl ThemeValue {
    /// Returns the token string, if this is a token value.
    pub fn as_tokens(&self) -> Option<&str> {
        match self {
            ThemeValue::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Returns the nested theme, if this is a nested value.
    pub fn as_nested(&self) -> Option<&Theme> {
        match self {
            ThemeValue::Nested(theme) => Some(theme),
            _ => None,
        }
    }

    pub fn is_helper(&self) -> bool {
        matches!(self, ThemeValue::Helper(_))
    }

    /// Short human-readable rendering used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            ThemeValue::Tokens(tokens) => format!("\"{}\"", tokens),
            ThemeValue::Nested(theme) => theme.to_string(),
            ThemeValue::Helper(_) => "<helper>".to_string(),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(tokens: &str) -> Self {
        ThemeValue::Tokens(tokens.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(tokens: String) -> Self {
        ThemeValue::Tokens(tokens)
    }
}

impl From<Theme> for ThemeValue {
    fn from(theme: Theme) -> Self {
        ThemeValue::Nested(theme)
    }
}

impl From<Helper> for ThemeValue {
    fn from(helper: Helper) -> Self {
        ThemeValue::Helper(helper)
    }
}

impl Serialize for ThemeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ThemeValue::Tokens(tokens) => serializer.serialize_str(tokens),
            ThemeValue::Nested(theme) => theme.serialize(serializer),
            ThemeValue::Helper(_) => serializer.serialize_none(),
        }
    }
}

/// A value read from a theme document. `None` stands for an explicit
/// `null`, which is treated as an unset key.
pub(crate) struct MaybeValue(pub(crate) Option<ThemeValue>);

impl<'de> Deserialize<'de> for MaybeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MaybeValueVisitor)
    }
}

struct MaybeValueVisitor;

impl<'de> Visitor<'de> for MaybeValueVisitor {
    type Value = MaybeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a class-name string, a nested theme or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MaybeValue(Some(ThemeValue::Tokens(v.to_string()))))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MaybeValue(Some(ThemeValue::Tokens(v))))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MaybeValue(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MaybeValue(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        MaybeValue::deserialize(deserializer)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let theme = Theme::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(MaybeValue(Some(ThemeValue::Nested(theme))))
    }
}
