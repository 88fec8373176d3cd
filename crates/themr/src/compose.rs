//! Compose modes: how contextual, local and prop themes combine.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::ThemeError;
use crate::merge::merge_all;
use crate::theme::Theme;

/// Strategy used to combine the theme sources of a component.
///
/// Sources are, in increasing priority: the contextual theme supplied by a
/// [`ThemeProvider`](crate::ThemeProvider), the component's local theme, and
/// the theme passed as a prop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComposeMode {
    /// Merge all sources with [`merge`](crate::merge).
    #[default]
    Deeply,
    /// Later sources replace earlier top-level keys outright.
    Softly,
    /// Use the highest-priority source as is.
    Off,
}

impl ComposeMode {
    /// Canonical mode names, in declaration order.
    ///
    /// [`ComposeMode::from_str`] also accepts `"false"` as a legacy spelling
    /// of `off`. That alias is not listed here, nor among the valid modes
    /// reported by [`ThemeError::InvalidComposeMode`].
    pub const NAMES: [&'static str; 3] = ["deeply", "softly", "off"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeMode::Deeply => "deeply",
            ComposeMode::Softly => "softly",
            ComposeMode::Off => "off",
        }
    }

    /// Combines the three theme sources according to this mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themr::{ComposeMode, Theme};
    ///
    /// let context = Theme::new().add("foo", "foo_123").add("bar", "bar_765");
    /// let prop = Theme::new().add("foo", "foo_567");
    ///
    /// let deep = ComposeMode::Deeply.compose(Some(&context), None, Some(&prop)).unwrap();
    /// assert_eq!(deep.tokens("foo"), Some("foo_123 foo_567"));
    ///
    /// let soft = ComposeMode::Softly.compose(Some(&context), None, Some(&prop)).unwrap();
    /// assert_eq!(soft.tokens("foo"), Some("foo_567"));
    /// assert_eq!(soft.tokens("bar"), Some("bar_765"));
    ///
    /// let off = ComposeMode::Off.compose(Some(&context), None, Some(&prop)).unwrap();
    /// assert_eq!(off, prop);
    /// ```
    pub fn compose(
        &self,
        context: Option<&Theme>,
        local: Option<&Theme>,
        prop: Option<&Theme>,
    ) -> Result<Theme, ThemeError> {
        match self {
            ComposeMode::Deeply => merge_all([context, local, prop].into_iter().flatten()),
            ComposeMode::Softly => {
                let mut theme = Theme::new();
                for source in [context, local, prop].into_iter().flatten() {
                    theme.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
                }
                Ok(theme.without_helpers())
            }
            ComposeMode::Off => Ok(prop.or(local).or(context).cloned().unwrap_or_default()),
        }
    }
}

impl fmt::Display for ComposeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComposeMode {
    type Err = ThemeError;

    /// Parses a compose mode. `"false"` is accepted as a spelling of `off`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deeply" => Ok(ComposeMode::Deeply),
            "softly" => Ok(ComposeMode::Softly),
            "off" | "false" => Ok(ComposeMode::Off),
            other => Err(ThemeError::InvalidComposeMode {
                value: other.to_string(),
                valid: Self::NAMES.to_vec(),
            }),
        }
    }
}

impl Serialize for ComposeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComposeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ComposeModeVisitor)
    }
}

struct ComposeModeVisitor;

impl<'de> Visitor<'de> for ComposeModeVisitor {
    type Value = ComposeMode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one of \"deeply\", \"softly\", \"off\" or false")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::custom(ThemeError::InvalidComposeMode {
                value: "true".to_string(),
                valid: ComposeMode::NAMES.to_vec(),
            }))
        } else {
            Ok(ComposeMode::Off)
        }
    }
}
