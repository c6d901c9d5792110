//! draw.io (`.drawio`) document writer.
//!
//! Produces an uncompressed `mxfile` document. Cells `0` and `1` are the
//! root and the default layer; every other cell gets the next integer id in
//! emission order, entity cells first and connectors after them.

use std::borrow::Cow;

use indexmap::IndexMap;
use log::{debug, info};
use quick_xml::{
    Writer,
    escape::escape,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use erdraw_core::{
    color::Color,
    draw::EdgeStyle,
    geometry::{Bounds, Point, Size},
    semantic::{Diagram, DiagramKind, Entity, Members, RelationKind},
};

use crate::{
    config::LayoutConfig,
    export::{self, Exporter},
    layout::{EntityLayout, PlacedBox, UseCaseLayout, class_section_height},
    routing::Edge,
};

const CLASS_CONTAINER_STYLE: &str = "swimlane;fontStyle=0;childLayout=stackLayout;horizontal=1;\
    startSize=30;horizontalStack=0;resizeParent=1;resizeParentCheck=0;collapsible=0;\
    marginBottom=0;html=1;";
const CLASS_TITLE_STYLE: &str = "text;strokeColor=none;fillColor=none;align=center;\
    verticalAlign=middle;spacingLeft=4;spacingRight=4;overflow=hidden;\
    points=[[0,0.5],[1,0.5]];portConstraint=eastwest;rotatable=0;whiteSpace=wrap;html=1;\
    fontStyle=1";
const CLASS_MEMBER_STYLE: &str = "text;strokeColor=none;fillColor=none;align=left;\
    verticalAlign=top;spacingLeft=4;spacingRight=4;overflow=hidden;\
    points=[[0,0.5],[1,0.5]];portConstraint=eastwest;rotatable=0;whiteSpace=wrap;html=1;";
const CLASS_SEPARATOR_STYLE: &str =
    "line;strokeWidth=1;html=1;fontStyle=1;align=center;verticalAlign=middle;";

const TABLE_CELL_STYLE: &str = "shape=rectangle;whiteSpace=wrap;html=1;strokeColor=#000000;\
    fillColor=#FFFFFF;fontSize=14;fontFamily=Arial;fontStyle=1";
const TABLE_TITLE_STYLE: &str = "shape=rectangle;whiteSpace=wrap;html=1;strokeColor=#000000;\
    fillColor=#FFFFFF;fontSize=16;fontFamily=Arial;fontStyle=1;";
const TABLE_DIVIDER_STYLE: &str = "strokeColor=#000000;strokeWidth=2;endArrow=none;endFill=0;";

const SYSTEM_STYLE: &str = CLASS_CONTAINER_STYLE;
const ACTOR_STYLE: &str = "umlActor;verticalLabelPosition=bottom;html=1;verticalAlign=top;\
    strokeColor=#000000;fillColor=#FFFFFF;rounded=0;";
const USE_CASE_STYLE: &str = "html=1;ellipse;whiteSpace=wrap;fillColor=#dae8fc;\
    strokeColor=#6c8ebf;fontColor=#000000;verticalAlign=middle;align=center;";

const LAYER_ID: &str = "1";

/// Builder for a [`Drawio`] exporter.
#[derive(Default)]
pub struct DrawioBuilder<'a> {
    diagram: Option<&'a Diagram>,
    layout_config: LayoutConfig,
    background: Option<Color>,
}

impl<'a> DrawioBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagram whose text fills the boxes.
    pub fn with_diagram(mut self, diagram: &'a Diagram) -> Self {
        self.diagram = Some(diagram);
        self
    }

    /// Set the dimensions used to split boxes into sections and rows.
    ///
    /// Must match the configuration the layout was computed with.
    pub fn with_layout_config(mut self, config: &LayoutConfig) -> Self {
        self.layout_config = config.clone();
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn build(self) -> Result<Drawio<'a>, export::Error> {
        let diagram = self
            .diagram
            .ok_or_else(|| export::Error::Render("no diagram to export".to_string()))?;
        Ok(Drawio {
            diagram,
            layout_config: self.layout_config,
            background: self.background,
        })
    }
}

/// Writes laid-out diagrams as draw.io documents.
pub struct Drawio<'a> {
    diagram: &'a Diagram,
    layout_config: LayoutConfig,
    background: Option<Color>,
}

impl Exporter for Drawio<'_> {
    fn export_entity_layout(&mut self, layout: &EntityLayout) -> Result<String, export::Error> {
        let entities = self.diagram.entities();
        if entities.len() != layout.boxes().len() {
            return Err(export::Error::Render(format!(
                "layout has {} boxes but the diagram has {} entities",
                layout.boxes().len(),
                entities.len()
            )));
        }

        let mut document = Document::begin(self.diagram.kind(), self.background)?;
        for (entity, placed) in entities.iter().zip(layout.boxes()) {
            match entity.members() {
                Members::Class { .. } => self.write_class_box(&mut document, entity, placed)?,
                Members::Table { .. } => self.write_table_box(&mut document, entity, placed)?,
            }
        }
        for edge in layout.edges() {
            document.edge(edge, None)?;
        }

        info!(cells = document.cell_count(); "draw.io document written");
        document.finish()
    }

    fn export_use_case_layout(&mut self, layout: &UseCaseLayout) -> Result<String, export::Error> {
        let Diagram::UseCase(diagram) = self.diagram else {
            return Err(export::Error::Render(
                "use-case layout requires a use-case diagram".to_string(),
            ));
        };

        let mut document = Document::begin(DiagramKind::UseCase, self.background)?;
        let container_id =
            document.vertex(&html_text(layout.system()), SYSTEM_STYLE, LAYER_ID, layout.container())?;

        let mut actor_cells: IndexMap<&str, String> = IndexMap::new();
        for (actor, placed) in diagram.actors().iter().zip(layout.actors()) {
            let id = document.vertex(&html_text(actor.name()), ACTOR_STYLE, LAYER_ID, placed.bounds())?;
            actor_cells.insert(placed.name(), id);
        }

        let mut use_case_cells: IndexMap<&str, String> = IndexMap::new();
        for (use_case, placed) in diagram.use_cases().iter().zip(layout.use_cases()) {
            let id = document.vertex(
                &html_text(use_case.name()),
                USE_CASE_STYLE,
                &container_id,
                placed.bounds(),
            )?;
            use_case_cells.insert(placed.name(), id);
        }

        for edge in layout.edges() {
            // Actor ids and use-case ids are separate namespaces
            let source_cells = match edge.kind() {
                RelationKind::Include | RelationKind::Extend => &use_case_cells,
                _ => &actor_cells,
            };
            let source = edge.source().and_then(|name| source_cells.get(name));
            let target = edge.target().and_then(|name| use_case_cells.get(name));
            match (source, target) {
                (Some(source), Some(target)) => {
                    document.edge(edge, Some((source.as_str(), target.as_str())))?
                }
                _ => {
                    return Err(export::Error::Render(format!(
                        "connector `{}` -> `{}` has no matching cells",
                        edge.source().unwrap_or_default(),
                        edge.target().unwrap_or_default()
                    )));
                }
            }
        }

        info!(cells = document.cell_count(); "draw.io document written");
        document.finish()
    }
}

impl Drawio<'_> {
    fn write_class_box(
        &self,
        document: &mut Document,
        entity: &Entity,
        placed: &PlacedBox,
    ) -> Result<(), export::Error> {
        let Members::Class {
            attributes,
            methods,
        } = entity.members()
        else {
            return Ok(());
        };
        let config = self.layout_config.class();
        let bounds = placed.bounds();
        let width = bounds.width();
        let origin = bounds.min_point();

        let attributes_height = class_section_height(attributes.len(), config);
        let methods_height = class_section_height(methods.len(), config);
        let attributes_y = config.title_height();
        let separator_y = attributes_y + attributes_height;
        let methods_y = separator_y + config.separator_height();

        document.vertex("", CLASS_CONTAINER_STYLE, LAYER_ID, bounds)?;
        document.vertex(
            &html_text(entity.name()),
            CLASS_TITLE_STYLE,
            LAYER_ID,
            section(origin, 0.0, width, config.title_height()),
        )?;
        document.vertex(
            &html_lines(attributes.iter().map(ToString::to_string)),
            CLASS_MEMBER_STYLE,
            LAYER_ID,
            section(origin, attributes_y, width, attributes_height),
        )?;
        document.vertex(
            "",
            CLASS_SEPARATOR_STYLE,
            LAYER_ID,
            section(origin, separator_y, width, config.separator_height()),
        )?;
        document.vertex(
            &html_lines(methods.iter().map(ToString::to_string)),
            CLASS_MEMBER_STYLE,
            LAYER_ID,
            section(origin, methods_y, width, methods_height),
        )?;
        Ok(())
    }

    fn write_table_box(
        &self,
        document: &mut Document,
        entity: &Entity,
        placed: &PlacedBox,
    ) -> Result<(), export::Error> {
        let Members::Table { fields } = entity.members() else {
            return Ok(());
        };
        let config = self.layout_config.table();
        let bounds = placed.bounds();
        let origin = bounds.min_point();
        let row_height = config.row_height();
        let type_width = config.type_column_width();

        document.vertex("", TABLE_CELL_STYLE, LAYER_ID, bounds)?;
        document.vertex(
            &html_text(entity.name()),
            TABLE_TITLE_STYLE,
            LAYER_ID,
            section(origin, 0.0, bounds.width(), row_height),
        )?;

        for (index, field) in fields.iter().enumerate() {
            let y = row_height * (index + 1) as f32;
            let key = Bounds::new_from_top_left(
                origin.add_point(Point::new(0.0, y)),
                Size::new(type_width, row_height),
            );
            let description = Bounds::new_from_top_left(
                origin.add_point(Point::new(type_width, y)),
                Size::new(config.name_column_width(), row_height),
            );
            document.vertex(&html_text(&field.key().to_string()), TABLE_CELL_STYLE, LAYER_ID, key)?;
            document.vertex(
                &html_lines(field.description().lines().map(str::to_string)),
                TABLE_CELL_STYLE,
                LAYER_ID,
                description,
            )?;
        }

        let divider_x = origin.x() + type_width;
        document.line(
            TABLE_DIVIDER_STYLE,
            Point::new(divider_x, origin.y() + row_height),
            Point::new(divider_x, bounds.max_y()),
        )?;
        Ok(())
    }
}

/// A horizontal slice of a box, `offset` below its top edge.
fn section(origin: Point, offset: f32, width: f32, height: f32) -> Bounds {
    Bounds::new_from_top_left(
        origin.add_point(Point::new(0.0, offset)),
        Size::new(width, height),
    )
}

/// Escape text for an `html=1` label.
fn html_text(text: &str) -> String {
    escape(text).into_owned()
}

/// Escape each line and join them with line breaks.
fn html_lines(lines: impl Iterator<Item = String>) -> String {
    lines
        .map(|line| html_text(&line))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Format a coordinate, dropping the fraction of whole numbers.
fn number(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e9 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Style string for a routed connector.
fn edge_style(style: &EdgeStyle) -> String {
    let stroke = style.stroke();
    let arrows = style.arrows();
    let mut result = format!(
        "edgeStyle=orthogonalEdgeStyle;rounded=0;html=1;strokeColor={};strokeWidth={};\
         startArrow={};startFill={};endArrow={};endFill={};",
        stroke.color().to_hex(),
        number(stroke.width()),
        arrows.start().to_drawio_value(),
        u8::from(arrows.start_fill()),
        arrows.end().to_drawio_value(),
        u8::from(arrows.end_fill()),
    );
    if stroke.style().is_dashed() {
        result.push_str("dashed=1;");
    }
    if let Some(label) = style.source_label() {
        result.push_str(&format!("sourceLabel={};", style_value(label)));
    }
    if let Some(label) = style.target_label() {
        result.push_str(&format!("targetLabel={};", style_value(label)));
    }
    if style.label().is_some() {
        result.push_str("labelBackgroundColor=#ffffff;spacingTop=5;");
    }
    result
}

/// Drop characters that would end a style entry.
fn style_value(value: &str) -> Cow<'_, str> {
    if value.contains([';', '=']) {
        Cow::Owned(value.replace([';', '='], ""))
    } else {
        Cow::Borrowed(value)
    }
}

fn diagram_name(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Class => "Class Diagram",
        DiagramKind::Table => "ERD",
        DiagramKind::UseCase => "Use-Case Diagram",
    }
}

/// An `mxfile` being written, with the id counter for its cells.
struct Document {
    writer: Writer<Vec<u8>>,
    next_id: usize,
}

impl Document {
    /// Write the document prologue up to and including the default layer.
    fn begin(kind: DiagramKind, background: Option<Color>) -> Result<Self, export::Error> {
        let mut document = Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            next_id: 2,
        };

        document.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let agent = format!("erdraw {}", env!("CARGO_PKG_VERSION"));
        let mut mxfile = BytesStart::new("mxfile");
        mxfile.push_attribute(("host", "app.diagrams.net"));
        mxfile.push_attribute(("agent", agent.as_str()));
        mxfile.push_attribute(("version", "24.0.0"));
        mxfile.push_attribute(("type", "device"));
        document.write(Event::Start(mxfile))?;

        let mut diagram = BytesStart::new("diagram");
        diagram.push_attribute(("name", diagram_name(kind)));
        diagram.push_attribute(("id", "diagram1"));
        document.write(Event::Start(diagram))?;

        let background = background.map(Color::to_hex);
        let mut model = BytesStart::new("mxGraphModel");
        for attribute in [
            ("dx", "1400"),
            ("dy", "900"),
            ("grid", "1"),
            ("gridSize", "10"),
            ("guides", "1"),
            ("tooltips", "1"),
            ("connect", "1"),
            ("arrows", "1"),
            ("fold", "1"),
            ("page", "1"),
            ("pageScale", "1"),
            ("pageWidth", "1169"),
            ("pageHeight", "827"),
        ] {
            model.push_attribute(attribute);
        }
        if let Some(background) = &background {
            model.push_attribute(("background", background.as_str()));
        }
        model.push_attribute(("math", "0"));
        model.push_attribute(("shadow", "0"));
        document.write(Event::Start(model))?;
        document.write(Event::Start(BytesStart::new("root")))?;

        let mut root_cell = BytesStart::new("mxCell");
        root_cell.push_attribute(("id", "0"));
        document.write(Event::Empty(root_cell))?;

        let mut layer = BytesStart::new("mxCell");
        layer.push_attribute(("id", LAYER_ID));
        layer.push_attribute(("parent", "0"));
        document.write(Event::Empty(layer))?;

        debug!(kind:%; "Started draw.io document");
        Ok(document)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), export::Error> {
        self.writer
            .write_event(event)
            .map_err(|err| export::Error::Xml(err.to_string()))
    }

    fn end(&mut self, name: &str) -> Result<(), export::Error> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    /// Number of cells written after the two reserved ones.
    fn cell_count(&self) -> usize {
        self.next_id - 2
    }

    /// Write a shape cell and return its id.
    fn vertex(
        &mut self,
        value: &str,
        style: &str,
        parent: &str,
        bounds: Bounds,
    ) -> Result<String, export::Error> {
        let id = self.allocate_id();

        let mut cell = BytesStart::new("mxCell");
        cell.push_attribute(("id", id.as_str()));
        cell.push_attribute(("value", value));
        cell.push_attribute(("style", style));
        cell.push_attribute(("vertex", "1"));
        cell.push_attribute(("parent", parent));
        self.write(Event::Start(cell))?;

        let (x, y) = (number(bounds.min_x()), number(bounds.min_y()));
        let (width, height) = (number(bounds.width()), number(bounds.height()));
        let mut geometry = BytesStart::new("mxGeometry");
        geometry.push_attribute(("x", x.as_str()));
        geometry.push_attribute(("y", y.as_str()));
        geometry.push_attribute(("width", width.as_str()));
        geometry.push_attribute(("height", height.as_str()));
        geometry.push_attribute(("as", "geometry"));
        self.write(Event::Empty(geometry))?;

        self.end("mxCell")?;
        Ok(id)
    }

    /// Write a plain line between two points.
    fn line(&mut self, style: &str, source: Point, target: Point) -> Result<(), export::Error> {
        let id = self.allocate_id();

        let mut cell = BytesStart::new("mxCell");
        cell.push_attribute(("id", id.as_str()));
        cell.push_attribute(("style", style));
        cell.push_attribute(("edge", "1"));
        cell.push_attribute(("parent", LAYER_ID));
        self.write(Event::Start(cell))?;
        self.geometry(source, target, &[])?;
        self.end("mxCell")
    }

    /// Write a connector, attached to `cells` when given.
    fn edge(&mut self, edge: &Edge, cells: Option<(&str, &str)>) -> Result<(), export::Error> {
        let id = self.allocate_id();
        let style = edge_style(edge.style());
        let label = edge.style().label().map(html_text);

        let mut cell = BytesStart::new("mxCell");
        cell.push_attribute(("id", id.as_str()));
        if let Some(label) = &label {
            cell.push_attribute(("value", label.as_str()));
        }
        cell.push_attribute(("style", style.as_str()));
        cell.push_attribute(("edge", "1"));
        cell.push_attribute(("parent", LAYER_ID));
        if let Some((source, target)) = cells {
            cell.push_attribute(("source", source));
            cell.push_attribute(("target", target));
        }
        self.write(Event::Start(cell))?;

        if cells.is_some() {
            let mut geometry = BytesStart::new("mxGeometry");
            geometry.push_attribute(("relative", "1"));
            geometry.push_attribute(("as", "geometry"));
            self.write(Event::Empty(geometry))?;
        } else {
            self.geometry(edge.source_point(), edge.target_point(), edge.waypoints())?;
        }

        self.end("mxCell")
    }

    fn geometry(
        &mut self,
        source: Point,
        target: Point,
        waypoints: &[Point],
    ) -> Result<(), export::Error> {
        let mut geometry = BytesStart::new("mxGeometry");
        geometry.push_attribute(("relative", "1"));
        geometry.push_attribute(("as", "geometry"));
        self.write(Event::Start(geometry))?;

        self.point(source, Some("sourcePoint"))?;
        self.point(target, Some("targetPoint"))?;
        if !waypoints.is_empty() {
            let mut array = BytesStart::new("Array");
            array.push_attribute(("as", "points"));
            self.write(Event::Start(array))?;
            for waypoint in waypoints {
                self.point(*waypoint, None)?;
            }
            self.end("Array")?;
        }

        self.end("mxGeometry")
    }

    fn point(&mut self, point: Point, role: Option<&str>) -> Result<(), export::Error> {
        let (x, y) = (number(point.x()), number(point.y()));
        let mut element = BytesStart::new("mxPoint");
        element.push_attribute(("x", x.as_str()));
        element.push_attribute(("y", y.as_str()));
        if let Some(role) = role {
            element.push_attribute(("as", role));
        }
        self.write(Event::Empty(element))
    }

    /// Close all open elements and return the document text.
    fn finish(mut self) -> Result<String, export::Error> {
        for name in ["root", "mxGraphModel", "diagram", "mxfile"] {
            self.end(name)?;
        }
        String::from_utf8(self.writer.into_inner())
            .map_err(|err| export::Error::Xml(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use erdraw_core::{
        draw::{ArrowHead, ArrowStyle, StrokeDefinition},
        semantic::{Actor, Association, Attribute, Field, FieldKey, UseCase, UseCaseDiagram, Visibility},
    };

    use super::*;
    use crate::{config::AppConfig, layout::Engine};

    fn export(diagram: &Diagram) -> String {
        let config = AppConfig::default();
        let layout = Engine::new(&config).unwrap().layout(diagram);
        let mut exporter = DrawioBuilder::new()
            .with_diagram(diagram)
            .with_layout_config(config.layout())
            .build()
            .unwrap();
        exporter.export_layout(&layout).unwrap()
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(240.0), "240");
        assert_eq!(number(-75.0), "-75");
        assert_eq!(number(40.5), "40.5");
        assert_eq!(number(-0.0), "0");
    }

    #[test]
    fn test_edge_style_string() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("#00AA00").unwrap());
        let style = EdgeStyle::new(
            stroke,
            ArrowStyle::new(ArrowHead::Diamond, true, ArrowHead::None, false),
        )
        .with_source_label("1")
        .with_target_label("1..*");

        assert_eq!(
            edge_style(&style),
            "edgeStyle=orthogonalEdgeStyle;rounded=0;html=1;strokeColor=#00AA00;strokeWidth=2;\
             startArrow=diamond;startFill=1;endArrow=none;endFill=0;sourceLabel=1;targetLabel=1..*;"
        );
    }

    #[test]
    fn test_style_value_strips_separators() {
        assert_eq!(style_value("0..1"), "0..1");
        assert_eq!(style_value("a;b=c"), "abc");
    }

    #[test]
    fn test_class_document_structure() {
        let diagram = Diagram::Class(vec![Entity::class(
            "List<T>",
            vec![Attribute::new("items", "Vec<T>", Visibility::Private)],
            Vec::new(),
        )]);
        let xml = export(&diagram);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<diagram name=\"Class Diagram\" id=\"diagram1\">"));
        assert!(xml.contains("<mxCell id=\"0\"/>"));
        assert!(xml.contains("<mxCell id=\"1\" parent=\"0\"/>"));
        // Container, title, attributes, separator, methods
        assert!(xml.contains("<mxCell id=\"6\""));
        assert!(!xml.contains("<mxCell id=\"7\""));
        // Escaped once for HTML and once for XML
        assert!(xml.contains("value=\"List&amp;lt;T&amp;gt;\""));
        assert!(xml.contains("<mxGeometry x=\"0\" y=\"0\" width=\"240\" height=\"81\" as=\"geometry\"/>"));
        assert!(xml.trim_end().ends_with("</mxfile>"));
    }

    #[test]
    fn test_table_document_cells() {
        let diagram = Diagram::Table(vec![Entity::table(
            "customers",
            vec![
                Field::new("id", FieldKey::Primary, "INT").with_not_null(true),
                Field::new("email", FieldKey::Other("".to_string()), "TEXT"),
            ],
        )]);
        let xml = export(&diagram);

        assert!(xml.contains("<diagram name=\"ERD\""));
        // Background, title, 2 x (key, description), divider
        assert!(xml.contains("<mxCell id=\"8\""));
        assert!(!xml.contains("<mxCell id=\"9\""));
        assert!(xml.contains("value=\"PK\""));
        assert!(xml.contains("value=\"id&lt;br&gt;INT&lt;br&gt;NOT NULL\""));
        assert!(xml.contains("<mxPoint x=\"60\" y=\"40\" as=\"sourcePoint\"/>"));
        assert!(xml.contains("<mxPoint x=\"60\" y=\"120\" as=\"targetPoint\"/>"));
    }

    #[test]
    fn test_background_attribute() {
        let diagram = Diagram::Class(Vec::new());
        let config = AppConfig::default();
        let layout = Engine::new(&config).unwrap().layout(&diagram);

        let mut exporter = DrawioBuilder::new()
            .with_diagram(&diagram)
            .with_background(Some(Color::new("white").unwrap()))
            .build()
            .unwrap();
        let xml = exporter.export_layout(&layout).unwrap();
        assert!(xml.contains("background=\"#FFFFFF\""));
    }

    #[test]
    fn test_use_case_links_resolve_ids_per_namespace() {
        let diagram = Diagram::UseCase(
            UseCaseDiagram::new("Shop")
                .with_actor(Actor::new("1", "Clerk"))
                .with_use_case(UseCase::new("2", "Log in"))
                .with_use_case(UseCase::new("1", "Checkout").with_includes(vec!["2".into()]))
                .with_association(Association::new("1", "1")),
        );
        let xml = export(&diagram);

        // Container 2, actor 3, use cases 4 and 5
        assert!(xml.contains(r#"source="3" target="5""#));
        assert!(xml.contains(r#"source="5" target="4""#));
        assert!(!xml.contains(r#"source="3" target="4""#));
    }

    #[test]
    fn test_builder_requires_diagram() {
        assert!(DrawioBuilder::new().build().is_err());
    }
}
