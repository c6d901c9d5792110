//! Visual definitions for connectors.
//!
//! Boxes are sized and placed by the layout engine; this module only
//! describes how connector lines look: their stroke and their arrow heads.

mod arrow;
mod stroke;

pub use arrow::{ArrowHead, ArrowStyle};
pub use stroke::{EdgeStyle, StrokeDefinition, StrokeStyle};
