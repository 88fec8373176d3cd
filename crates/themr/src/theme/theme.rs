//! Theme struct: a mapping from style slot to class names.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::{MaybeValue, ThemeValue};
use crate::error::ThemeError;

/// A style mapping: semantic slot names mapped to class-name tokens or to
/// nested themes.
///
/// Keys are kept in lexicographic order, so iteration and serialized output
/// are deterministic.
///
/// # Example
///
/// ```rust
/// use themr::Theme;
///
/// let theme = Theme::new()
///     .add("button", "btn btn-primary")
///     .add("icon", Theme::new().add("left", "icon-left"));
///
/// assert_eq!(theme.tokens("button"), Some("btn btn-primary"));
/// assert!(theme.nested("icon").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    entries: BTreeMap<String, ThemeValue>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the updated theme for chaining.
    pub fn add<V: Into<ThemeValue>>(mut self, key: &str, value: V) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert<V: Into<ThemeValue>>(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> Option<ThemeValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ThemeValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.entries.get(key)
    }

    /// Returns the class-name tokens stored under `key`, if it holds tokens.
    pub fn tokens(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ThemeValue::as_tokens)
    }

    /// Returns the nested theme stored under `key`, if it holds one.
    pub fn nested(&self, key: &str) -> Option<&Theme> {
        self.get(key).and_then(ThemeValue::as_nested)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ThemeValue> {
        self.entries.iter()
    }

    /// Returns a copy of this theme with every helper entry removed, at any
    /// depth.
    pub fn without_helpers(&self) -> Theme {
        let entries = self
            .entries
            .iter()
            .filter_map(|(key, value)| match value {
                ThemeValue::Helper(_) => None,
                ThemeValue::Nested(nested) => {
                    Some((key.clone(), ThemeValue::Nested(nested.without_helpers())))
                }
                ThemeValue::Tokens(_) => Some((key.clone(), value.clone())),
            })
            .collect();
        Theme { entries }
    }

    /// Returns true if a helper entry is present at any depth.
    pub fn has_helpers(&self) -> bool {
        self.entries.values().any(|value| match value {
            ThemeValue::Helper(_) => true,
            ThemeValue::Nested(nested) => nested.has_helpers(),
            ThemeValue::Tokens(_) => false,
        })
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a theme from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Theme, ThemeError> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Theme {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> Extend<(K, V)> for Theme {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Theme {
    type Item = (String, ThemeValue);
    type IntoIter = btree_map::IntoIter<String, ThemeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Theme {
    type Item = (&'a String, &'a ThemeValue);
    type IntoIter = btree_map::Iter<'a, String, ThemeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value.describe())?;
        }
        f.write_str("}")
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.entries.iter().filter(|(_, value)| !value.is_helper());
        let mut map = serializer.serialize_map(Some(data.clone().count()))?;
        for (key, value) in data {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ThemeVisitor)
    }
}

struct ThemeVisitor;

impl<'de> Visitor<'de> for ThemeVisitor {
    type Value = Theme;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a theme mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut theme = Theme::new();
        while let Some((key, MaybeValue(value))) = map.next_entry::<String, MaybeValue>()? {
            // null marks an unset slot
            if let Some(value) = value {
                theme.entries.insert(key, value);
            }
        }
        Ok(theme)
    }
}
