//! Arrow head definitions.
//!
//! [`ArrowHead`] names map one-to-one to the marker names understood by
//! draw.io (`block`, `diamond`, `ERzeroToMany`, ...). [`ArrowStyle`] pairs a
//! head and a fill flag for each end of a connector.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Marker drawn at one end of a connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowHead {
    /// No marker
    #[default]
    None,
    /// Closed triangle (inheritance)
    Block,
    /// Open chevron (association)
    Open,
    /// Diamond (composition, aggregation)
    Diamond,
    /// Crow's foot with a ring: zero or many
    ZeroToMany,
    /// Bar with a ring: zero or one
    ZeroToOne,
    /// Double bar: exactly one, mandatory
    MandatoryOne,
}

impl ArrowHead {
    /// Returns the draw.io marker name for this arrow head
    pub fn to_drawio_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Open => "open",
            Self::Diamond => "diamond",
            Self::ZeroToMany => "ERzeroToMany",
            Self::ZeroToOne => "ERzeroToOne",
            Self::MandatoryOne => "ERmandOne",
        }
    }
}

impl FromStr for ArrowHead {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "block" => Ok(Self::Block),
            "open" => Ok(Self::Open),
            "diamond" => Ok(Self::Diamond),
            "zero-to-many" => Ok(Self::ZeroToMany),
            "zero-to-one" => Ok(Self::ZeroToOne),
            "mandatory-one" => Ok(Self::MandatoryOne),
            _ => Err(format!(
                "invalid arrow head `{s}`, valid values: none, block, open, diamond, \
                 zero-to-many, zero-to-one, mandatory-one"
            )),
        }
    }
}

impl fmt::Display for ArrowHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_drawio_value())
    }
}

/// Arrow heads and their fill at both ends of a connector.
///
/// `start` sits on the source entity, `end` on the target entity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ArrowStyle {
    #[serde(default)]
    start: ArrowHead,
    #[serde(default)]
    start_fill: bool,
    #[serde(default)]
    end: ArrowHead,
    #[serde(default)]
    end_fill: bool,
}

impl ArrowStyle {
    pub const fn new(start: ArrowHead, start_fill: bool, end: ArrowHead, end_fill: bool) -> Self {
        Self {
            start,
            start_fill,
            end,
            end_fill,
        }
    }

    pub fn start(&self) -> ArrowHead {
        self.start
    }

    pub fn start_fill(&self) -> bool {
        self.start_fill
    }

    pub fn end(&self) -> ArrowHead {
        self.end
    }

    pub fn end_fill(&self) -> bool {
        self.end_fill
    }
}
