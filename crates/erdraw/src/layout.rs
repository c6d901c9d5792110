//! Diagram layout.
//!
//! The [`Engine`] runs the whole pipeline for one diagram: size every box
//! from its member counts, place the boxes on a grid, then route every
//! relationship between the placed boxes. Each call uses a fresh
//! [`WaypointAllocator`] so repeated runs on the same input produce the same
//! coordinates.

mod grid;
mod sizer;
mod use_case;

pub use grid::{GridCell, GridPlacer, LayoutGrid, columns_for};
pub use sizer::{class_box_size, class_section_height, entity_box_size, table_box_size};
pub use use_case::UseCaseLayout;

use log::{debug, info};

use erdraw_core::{
    geometry::{Bounds, Size},
    semantic::{Diagram, Entity, UseCaseDiagram},
};

use crate::{
    config::{AppConfig, ArrowStyleTable, LayoutConfig, Palette},
    routing::{
        ClassRoutes, Edge, PlacedEntity, RelationshipRouter, RoutingPolicy, SkippedRelation,
        TableRoutes, WaypointAllocator, partition_outcomes,
    },
};

/// A box with its final position.
///
/// `name` is the key other records refer to it by: the entity name for
/// class and table boxes, the id for actors and use cases.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBox {
    name: String,
    bounds: Bounds,
}

impl PlacedBox {
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Boxes and connectors of a class or table diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityLayout {
    boxes: Vec<PlacedBox>,
    edges: Vec<Edge>,
    skipped: Vec<SkippedRelation>,
}

impl EntityLayout {
    pub fn new(boxes: Vec<PlacedBox>, edges: Vec<Edge>, skipped: Vec<SkippedRelation>) -> Self {
        Self {
            boxes,
            edges,
            skipped,
        }
    }

    /// Placed boxes, in entity order.
    pub fn boxes(&self) -> &[PlacedBox] {
        &self.boxes
    }

    /// Routed connectors, in relationship order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Relationships that could not be routed.
    pub fn skipped(&self) -> &[SkippedRelation] {
        &self.skipped
    }
}

/// The laid-out form of any [`Diagram`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramLayout {
    Entities(EntityLayout),
    UseCase(UseCaseLayout),
}

impl DiagramLayout {
    /// Relationships that could not be routed.
    pub fn skipped(&self) -> &[SkippedRelation] {
        match self {
            Self::Entities(layout) => layout.skipped(),
            Self::UseCase(layout) => layout.skipped(),
        }
    }
}

/// Layout engine configured from an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct Engine {
    layout: LayoutConfig,
    arrows: ArrowStyleTable,
    class_palette: Palette,
    table_palette: Palette,
}

impl Engine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a message when the configuration holds an invalid dimension
    /// or palette.
    pub fn new(config: &AppConfig) -> Result<Self, String> {
        config.validate()?;
        let style = config.style();

        Ok(Self {
            layout: config.layout().clone(),
            arrows: style.arrows().clone(),
            class_palette: style.class_palette()?,
            table_palette: style.table_palette()?,
        })
    }

    /// Lay out any diagram.
    pub fn layout(&self, diagram: &Diagram) -> DiagramLayout {
        info!(kind:% = diagram.kind(); "Laying out diagram");
        match diagram {
            Diagram::Class(entities) => DiagramLayout::Entities(self.layout_class(entities)),
            Diagram::Table(entities) => DiagramLayout::Entities(self.layout_table(entities)),
            Diagram::UseCase(diagram) => DiagramLayout::UseCase(self.layout_use_case(diagram)),
        }
    }

    /// Lay out class boxes and route class relationships.
    pub fn layout_class(&self, entities: &[Entity]) -> EntityLayout {
        let config = self.layout.class();
        let placer = GridPlacer::new(config.box_width()).with_padding(config.padding());
        let router = RelationshipRouter::new(
            ClassRoutes::new(config, self.arrows.clone()),
            self.class_palette.clone(),
        );
        self.layout_entities(entities, placer, &router, config.nudge_step())
    }

    /// Lay out table boxes and route foreign keys.
    pub fn layout_table(&self, entities: &[Entity]) -> EntityLayout {
        let config = self.layout.table();
        let placer = GridPlacer::new(config.column_width()).with_padding(config.padding());
        let router = RelationshipRouter::new(TableRoutes::new(config), self.table_palette.clone());
        self.layout_entities(entities, placer, &router, config.nudge_step())
    }

    /// Lay out actors, the system boundary and use cases.
    pub fn layout_use_case(&self, diagram: &UseCaseDiagram) -> UseCaseLayout {
        use_case::layout(diagram, self.layout.use_case())
    }

    fn layout_entities<P: RoutingPolicy>(
        &self,
        entities: &[Entity],
        placer: GridPlacer,
        router: &RelationshipRouter<P>,
        nudge_step: f32,
    ) -> EntityLayout {
        let sizes: Vec<Size> = entities
            .iter()
            .map(|entity| entity_box_size(entity, &self.layout))
            .collect();
        let positions = placer.place(&sizes);

        let placed: Vec<PlacedEntity<'_>> = entities
            .iter()
            .zip(positions.into_iter().zip(sizes))
            .map(|(entity, (position, size))| {
                PlacedEntity::new(entity, Bounds::new_from_top_left(position, size))
            })
            .collect();
        debug!(boxes = placed.len(); "Placed entity boxes");

        let mut allocator = WaypointAllocator::new(nudge_step);
        let (edges, skipped) = partition_outcomes(router.route_all(&placed, &mut allocator));

        let boxes = placed
            .iter()
            .map(|entry| PlacedBox::new(entry.entity().name(), entry.bounds()))
            .collect();

        info!(
            entities = entities.len(),
            edges = edges.len(),
            skipped = skipped.len();
            "Diagram laid out"
        );
        EntityLayout::new(boxes, edges, skipped)
    }
}

#[cfg(test)]
mod tests {
    use erdraw_core::{
        geometry::Point,
        semantic::{Relationship, RelationKind},
    };

    use super::*;

    #[test]
    fn test_empty_diagram_is_empty_layout() {
        let engine = Engine::new(&AppConfig::default()).unwrap();
        let layout = engine.layout_class(&[]);

        assert!(layout.boxes().is_empty());
        assert!(layout.edges().is_empty());
        assert!(layout.skipped().is_empty());
    }

    #[test]
    fn test_class_boxes_follow_grid() {
        let engine = Engine::new(&AppConfig::default()).unwrap();
        let entities: Vec<Entity> = ["A", "B", "C"]
            .into_iter()
            .map(|name| Entity::class(name, Vec::new(), Vec::new()))
            .collect();

        let layout = engine.layout_class(&entities);
        let corners: Vec<Point> = layout
            .boxes()
            .iter()
            .map(|placed| placed.bounds().min_point())
            .collect();

        assert_eq!(
            corners,
            [
                Point::new(0.0, 0.0),
                Point::new(390.0, 0.0),
                Point::new(0.0, 231.0),
            ]
        );
    }

    #[test]
    fn test_table_grid_uses_column_width() {
        let engine = Engine::new(&AppConfig::default()).unwrap();
        let entities = vec![Entity::table("a", Vec::new()), Entity::table("b", Vec::new())];

        let layout = engine.layout_table(&entities);
        assert_eq!(layout.boxes()[1].bounds().min_point(), Point::new(500.0, 0.0));
        assert_eq!(layout.boxes()[1].bounds().width(), 380.0);
    }

    #[test]
    fn test_each_call_uses_a_fresh_allocator() {
        let engine = Engine::new(&AppConfig::default()).unwrap();
        let entities = vec![
            Entity::class("A", Vec::new(), Vec::new())
                .with_relationship(Relationship::new(RelationKind::Association, "B")),
            Entity::class("B", Vec::new(), Vec::new()),
        ];

        assert_eq!(engine.layout_class(&entities), engine.layout_class(&entities));
    }
}
