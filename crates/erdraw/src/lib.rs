//! erdraw - Grid layout and orthogonal routing for class, ER and use-case diagrams.
//!
//! A JSON description of classes, tables or use cases goes in; a draw.io
//! document with every box placed and every relationship routed comes out.
//! Layout is deterministic: the same input and configuration always produce
//! the same coordinates.

pub mod config;
pub mod layout;
pub mod routing;

mod error;
mod export;

pub use erdraw_core::{color, draw, geometry, semantic};

pub use error::ErdrawError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::{DiagramLayout, Engine};

/// Builder for parsing, laying out and rendering diagrams.
///
/// # Examples
///
/// ```rust
/// use erdraw::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"[{"name": "Person"}, {"name": "Customer"}]"#;
///
/// // With custom config
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to semantic model, detecting the diagram kind
/// let diagram = builder.parse(source, None)
///     .expect("Failed to parse");
///
/// // Render semantic model to a draw.io document
/// let drawio = builder.render_drawio(&diagram)
///     .expect("Failed to render");
/// assert!(drawio.contains("<mxfile"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON document into a semantic diagram.
    ///
    /// # Arguments
    ///
    /// * `source` - The JSON document as a string
    /// * `kind` - The diagram kind, or `None` to detect it from the document shape
    ///
    /// # Errors
    ///
    /// Returns `ErdrawError::Parse` for malformed JSON, shape mismatches or
    /// validation failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use erdraw::{DiagramBuilder, semantic::DiagramKind};
    ///
    /// let builder = DiagramBuilder::default();
    /// let diagram = builder
    ///     .parse(r#"{"system": "Shop"}"#, None)
    ///     .expect("Failed to parse diagram");
    /// assert_eq!(diagram.kind(), DiagramKind::UseCase);
    /// ```
    pub fn parse(
        &self,
        source: &str,
        kind: Option<semantic::DiagramKind>,
    ) -> Result<semantic::Diagram, ErdrawError> {
        info!("Parsing diagram");

        let diagram = erdraw_parser::parse(source, kind)
            .map_err(|err| ErdrawError::new_parse_error(err, source))?;

        debug!("Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Compute box positions and connector routes for a diagram.
    ///
    /// Relationships that cannot be drawn are listed on the returned layout
    /// instead of failing the call.
    ///
    /// # Errors
    ///
    /// Returns `ErdrawError::Config` when the configuration holds an invalid
    /// dimension or palette.
    pub fn layout(&self, diagram: &semantic::Diagram) -> Result<DiagramLayout, ErdrawError> {
        let engine = Engine::new(&self.config).map_err(ErdrawError::Config)?;
        let layout = engine.layout(diagram);
        info!(skipped = layout.skipped().len(); "Layout calculated");
        Ok(layout)
    }

    /// Render a semantic diagram to a draw.io document.
    ///
    /// # Errors
    ///
    /// Returns `ErdrawError` for configuration or export errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use erdraw::DiagramBuilder;
    ///
    /// let source = r#"[{"title": "users", "fields": [{"name": "id", "type": "PK", "datatype": "INT"}]}]"#;
    /// let builder = DiagramBuilder::default();
    ///
    /// let diagram = builder.parse(source, None).expect("Failed to parse");
    /// let drawio = builder.render_drawio(&diagram).expect("Failed to render diagram");
    ///
    /// assert!(drawio.contains(r#"<diagram name="ERD""#));
    /// ```
    pub fn render_drawio(&self, diagram: &semantic::Diagram) -> Result<String, ErdrawError> {
        let layout = self.layout(diagram)?;
        let background = self
            .config
            .style()
            .background_color()
            .map_err(ErdrawError::Config)?;

        let mut exporter = export::drawio::DrawioBuilder::new()
            .with_layout_config(self.config.layout())
            .with_background(background)
            .with_diagram(diagram)
            .build()?;
        let document = exporter.export_layout(&layout)?;

        info!("draw.io document rendered successfully");
        Ok(document)
    }
}
