//! CSS colors used by the SVG renderer and the style configuration.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::Deserialize;
use thiserror::Error;

/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

/// A parsed CSS color (`"#ff0000"`, `"rgb(255, 0, 0)"`, `"red"`, ...).
///
/// Deserializes from a string, so configuration files can spell colors the
/// same way SVG does.
///
/// # Examples
///
/// ```
/// use livevue_diagrams_core::color::Color;
///
/// let edge = Color::new("#555555").unwrap();
/// assert!(Color::new("not-a-color").is_err());
/// assert!(!edge.to_id_safe_string().contains('#'));
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the string is not a valid CSS color.
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns a representation usable inside an SVG `id` attribute.
    ///
    /// Only alphanumerics and underscores survive, and the result always
    /// starts with a letter.
    pub fn to_id_safe_string(self) -> String {
        let mut sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        if !sanitized.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(&color)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_to_id_safe_string() {
        for input in ["#ff0000", "rgb(1, 2, 3)", "white", "rgba(0, 0, 0, 0.5)"] {
            let safe = Color::new(input).unwrap().to_id_safe_string();
            assert!(
                safe.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "unexpected character in `{safe}`"
            );
            assert!(safe.chars().next().unwrap().is_ascii_alphabetic());
        }
    }

    #[test]
    fn test_try_from_string() {
        let color = Color::try_from("navy".to_string()).unwrap();
        assert_eq!(color, Color::new("navy").unwrap());
        assert!(Color::try_from(String::from("#zzz")).is_err());
    }

    #[test]
    fn test_eq_and_hash() {
        let mut set = HashSet::new();
        set.insert(Color::new("red").unwrap());

        assert!(set.contains(&Color::new("red").unwrap()));
        assert!(!set.contains(&Color::new("blue").unwrap()));
    }

    #[test]
    fn test_svg_value() {
        let color = Color::new("white").unwrap();
        let value: svg::node::Value = (&color).into();
        assert_eq!(value.to_string(), "white");
    }
}
