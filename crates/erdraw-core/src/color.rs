//! Color handling for erdraw diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Any CSS color string is accepted on input; output is
//! always normalized to the `#RRGGBB` form expected by draw.io styles.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use erdraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(blue.to_hex(), "#0000FF");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    ///
    /// Alpha is dropped; draw.io expresses opacity through a separate style key.
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_is_uppercase() {
        let color = Color::new("#00aaaa").unwrap();
        assert_eq!(color.to_hex(), "#00AAAA");
        assert_eq!(color.to_string(), "#00AAAA");
    }

    #[test]
    fn test_named_color() {
        assert_eq!(Color::new("red").unwrap().to_hex(), "#FF0000");
        assert_eq!(Color::default().to_hex(), "#000000");
    }

    #[test]
    fn test_invalid_color() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#FFAA00".parse().unwrap();
        assert_eq!(color.to_hex(), "#FFAA00");
    }
}
