//! Stroke and connector style definitions.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeStyle`]: Line pattern (solid or dashed)
//! - [`StrokeDefinition`]: Color, width and pattern of a line
//! - [`EdgeStyle`]: Everything needed to draw a connector: stroke, arrow heads and labels
//!
//! Provides both mutable (`set_*`) and immutable (`with_*`) APIs.
//!
//! ```
//! use erdraw_core::color::Color;
//! use erdraw_core::draw::{ArrowHead, ArrowStyle, EdgeStyle, StrokeDefinition};
//!
//! let stroke = StrokeDefinition::solid(Color::new("#FF0000").unwrap(), 2.0);
//! let arrows = ArrowStyle::new(ArrowHead::None, false, ArrowHead::Block, false);
//! let style = EdgeStyle::new(stroke, arrows).with_target_label("1");
//!
//! assert_eq!(style.target_label(), Some("1"));
//! ```

use std::str::FromStr;

use crate::{color::Color, draw::ArrowStyle};

/// Defines the line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
}

impl StrokeStyle {
    pub fn is_dashed(self) -> bool {
        matches!(self, Self::Dashed)
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed"
            )),
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            style: StrokeStyle::Dashed,
            ..Self::new(color, width)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for StrokeDefinition {
    /// Black, 2px, solid
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// The complete visual description of one connector.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    stroke: StrokeDefinition,
    arrows: ArrowStyle,
    source_label: Option<String>,
    target_label: Option<String>,
    label: Option<String>,
}

impl EdgeStyle {
    pub fn new(stroke: StrokeDefinition, arrows: ArrowStyle) -> Self {
        Self {
            stroke,
            arrows,
            source_label: None,
            target_label: None,
            label: None,
        }
    }

    /// Sets the label drawn at the source end (e.g. a multiplicity).
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    /// Sets the label drawn at the target end.
    pub fn with_target_label(mut self, label: impl Into<String>) -> Self {
        self.target_label = Some(label.into());
        self
    }

    /// Sets the label drawn along the middle of the connector.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn arrows(&self) -> ArrowStyle {
        self.arrows
    }

    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    pub fn target_label(&self) -> Option<&str> {
        self.target_label.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::ArrowHead;

    #[test]
    fn test_stroke_constructors() {
        let red = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(red, 2.0);
        assert_eq!(solid.style(), StrokeStyle::Solid);
        assert_approx_eq!(f32, solid.width(), 2.0);

        let dashed = StrokeDefinition::dashed(red, 1.0);
        assert!(dashed.style().is_dashed());
        assert_eq!(dashed.color(), red);
    }

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.color().to_hex(), "#000000");
        assert_approx_eq!(f32, stroke.width(), 2.0);
        assert_eq!(stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("dashed".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
        assert!("dotted".parse::<StrokeStyle>().is_err());
    }

    #[test]
    fn test_edge_style_labels() {
        let arrows = ArrowStyle::new(ArrowHead::Diamond, true, ArrowHead::None, false);
        let style = EdgeStyle::new(StrokeDefinition::default(), arrows)
            .with_source_label("1")
            .with_target_label("1..*");

        assert_eq!(style.source_label(), Some("1"));
        assert_eq!(style.target_label(), Some("1..*"));
        assert_eq!(style.label(), None);
        assert_eq!(style.arrows().start(), ArrowHead::Diamond);
    }
}
