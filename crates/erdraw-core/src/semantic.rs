//! Semantic model for erdraw diagrams.
//!
//! The parser produces these types from validated input; the layout engine
//! only ever reads them. Nothing here carries positions.

mod entity;
mod use_case;

use std::{fmt, str::FromStr};

pub use entity::{
    Attribute, Entity, Field, FieldKey, ForeignKey, Members, Method, Reference, RelationKind,
    Relationship, Visibility,
};
pub use use_case::{Actor, Association, UseCase, UseCaseDiagram};

/// The kind of diagram described by an input document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// UML class diagram: two-section boxes, typed relationships
    #[default]
    Class,
    /// Database table diagram: one row per field, foreign key connectors
    Table,
    /// Use-case diagram: actors, a system boundary and use cases
    UseCase,
}

impl FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "table" | "erd" => Ok(Self::Table),
            "use-case" | "usecase" => Ok(Self::UseCase),
            _ => Err(format!(
                "invalid diagram kind `{s}`, valid values: class, table, use-case"
            )),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Table => write!(f, "table"),
            Self::UseCase => write!(f, "use-case"),
        }
    }
}

/// A fully elaborated diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagram {
    Class(Vec<Entity>),
    Table(Vec<Entity>),
    UseCase(UseCaseDiagram),
}

impl Diagram {
    /// Returns the kind of this diagram
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Class(_) => DiagramKind::Class,
            Self::Table(_) => DiagramKind::Table,
            Self::UseCase(_) => DiagramKind::UseCase,
        }
    }

    /// Returns the boxed entities of a class or table diagram.
    ///
    /// Use-case diagrams have no entity boxes and return an empty slice.
    pub fn entities(&self) -> &[Entity] {
        match self {
            Self::Class(entities) | Self::Table(entities) => entities,
            Self::UseCase(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_kind_from_str() {
        assert_eq!("class".parse::<DiagramKind>(), Ok(DiagramKind::Class));
        assert_eq!("erd".parse::<DiagramKind>(), Ok(DiagramKind::Table));
        assert_eq!("usecase".parse::<DiagramKind>(), Ok(DiagramKind::UseCase));
        assert!("sequence".parse::<DiagramKind>().is_err());
    }

    #[test]
    fn test_diagram_kind_display_round_trips() {
        for kind in [DiagramKind::Class, DiagramKind::Table, DiagramKind::UseCase] {
            assert_eq!(kind.to_string().parse::<DiagramKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_use_case_diagram_has_no_entities() {
        let diagram = Diagram::UseCase(UseCaseDiagram::new("Portal"));
        assert_eq!(diagram.kind(), DiagramKind::UseCase);
        assert!(diagram.entities().is_empty());
    }
}
