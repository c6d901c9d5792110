pub mod drawio;

use crate::layout::{DiagramLayout, EntityLayout, UseCaseLayout};

// A single Exporter trait that works with any layout type
pub trait Exporter {
    fn export_entity_layout(&mut self, _layout: &EntityLayout) -> Result<String, Error> {
        Err(Error::Render(
            "Entity layout export not implemented".to_string(),
        ))
    }

    fn export_use_case_layout(&mut self, _layout: &UseCaseLayout) -> Result<String, Error> {
        Err(Error::Render(
            "Use-case layout export not implemented".to_string(),
        ))
    }

    fn export_layout(&mut self, layout: &DiagramLayout) -> Result<String, Error> {
        match layout {
            DiagramLayout::Entities(layout) => self.export_entity_layout(layout),
            DiagramLayout::UseCase(layout) => self.export_use_case_layout(layout),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Xml(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Xml(msg) => write!(f, "XML error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
