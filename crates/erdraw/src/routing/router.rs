use indexmap::IndexMap;
use log::{debug, warn};

use erdraw_core::{
    draw::{ArrowStyle, EdgeStyle, StrokeDefinition},
    geometry::{Bounds, Point},
    semantic::{Entity, Field, Relationship},
};

use crate::{
    config::{ArrowStyleTable, ClassLayoutConfig, Palette, TableLayoutConfig},
    routing::{
        Edge, RoutingOutcome, SkipReason, SkippedRelation, foreign_key_arrows,
        waypoint::{Lane, Nudge, WaypointAllocator},
    },
};

/// An entity together with its final box.
#[derive(Debug, Clone, Copy)]
pub struct PlacedEntity<'a> {
    entity: &'a Entity,
    bounds: Bounds,
}

impl<'a> PlacedEntity<'a> {
    pub fn new(entity: &'a Entity, bounds: Bounds) -> Self {
        Self { entity, bounds }
    }

    pub fn entity(&self) -> &'a Entity {
        self.entity
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Connector geometry and arrow heads for one relationship, before coloring.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    source_point: Point,
    target_point: Point,
    waypoints: Vec<Point>,
    arrows: ArrowStyle,
}

impl Route {
    pub fn new(
        source_point: Point,
        target_point: Point,
        waypoints: Vec<Point>,
        arrows: ArrowStyle,
    ) -> Self {
        Self {
            source_point,
            target_point,
            waypoints,
            arrows,
        }
    }

    pub fn source_point(&self) -> Point {
        self.source_point
    }

    pub fn target_point(&self) -> Point {
        self.target_point
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn arrows(&self) -> ArrowStyle {
        self.arrows
    }
}

/// Decides where a connector runs between two resolved entities.
pub trait RoutingPolicy {
    /// Route `relationship` from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns the reason the relationship cannot be drawn. Coordinates
    /// reserved before the failure stay reserved.
    fn route(
        &self,
        source: &PlacedEntity<'_>,
        target: &PlacedEntity<'_>,
        relationship: &Relationship,
        allocator: &mut WaypointAllocator,
    ) -> Result<Route, SkipReason>;
}

/// Class diagram routing: leave from the right edge, enter on the left edge.
///
/// Connectors between columns climb to a shared trunk half a gap above the
/// higher of the two boxes.
#[derive(Debug, Clone)]
pub struct ClassRoutes {
    padding: f32,
    arrows: ArrowStyleTable,
}

impl ClassRoutes {
    pub fn new(config: &ClassLayoutConfig, arrows: ArrowStyleTable) -> Self {
        Self {
            padding: config.padding(),
            arrows,
        }
    }
}

impl RoutingPolicy for ClassRoutes {
    fn route(
        &self,
        source: &PlacedEntity<'_>,
        target: &PlacedEntity<'_>,
        relationship: &Relationship,
        allocator: &mut WaypointAllocator,
    ) -> Result<Route, SkipReason> {
        let half_pad = self.padding / 2.0;
        let source_point = source.bounds.right_mid();
        let target_point = target.bounds.left_mid();

        let exit_x = allocator
            .allocate(Lane::Stub, source_point.x() + half_pad, Nudge::Decrease)
            .value();
        let entry_x = allocator
            .allocate(Lane::Stub, target_point.x() - half_pad, Nudge::Decrease)
            .value();

        let waypoints = if source.bounds.min_x() == target.bounds.min_x() {
            vec![
                Point::new(exit_x, source_point.y()),
                Point::new(entry_x, target_point.y()),
            ]
        } else {
            let top = source.bounds.min_y().min(target.bounds.min_y());
            let trunk_y = allocator
                .allocate(Lane::Trunk, top - half_pad, Nudge::Decrease)
                .value();
            vec![
                Point::new(exit_x, source_point.y()),
                Point::new(exit_x, trunk_y),
                Point::new(entry_x, trunk_y),
                Point::new(entry_x, target_point.y()),
            ]
        };

        Ok(Route::new(
            source_point,
            target_point,
            waypoints,
            self.arrows.for_kind(relationship.kind()),
        ))
    }
}

/// Table diagram routing: field-to-field connectors on the left side.
///
/// The connector leaves the referencing field row and enters the referenced
/// field row, both on the left edge of their tables. Repeated references to
/// one field fan out below its row midpoint.
#[derive(Debug, Clone)]
pub struct TableRoutes {
    padding: f32,
    row_height: f32,
}

impl TableRoutes {
    pub fn new(config: &TableLayoutConfig) -> Self {
        Self {
            padding: config.padding(),
            row_height: config.row_height(),
        }
    }

    /// Vertical midpoint of field row `index`; row zero is below the title.
    fn field_mid(&self, bounds: Bounds, index: usize) -> f32 {
        bounds.min_y() + self.row_height * (index + 1) as f32 + self.row_height / 2.0
    }
}

impl RoutingPolicy for TableRoutes {
    fn route(
        &self,
        source: &PlacedEntity<'_>,
        target: &PlacedEntity<'_>,
        relationship: &Relationship,
        allocator: &mut WaypointAllocator,
    ) -> Result<Route, SkipReason> {
        let foreign_key = relationship
            .foreign_key()
            .ok_or(SkipReason::NotAForeignKey)?;
        let source_row = foreign_key.field_index();
        if source.entity.field(source_row).map(Field::name) != Some(foreign_key.field()) {
            return Err(SkipReason::UnknownSourceMember);
        }
        let target_row = target
            .entity
            .field_index(foreign_key.referenced_field())
            .ok_or(SkipReason::UnknownTargetMember)?;

        let half_pad = self.padding / 2.0;
        let source_point = Point::new(source.bounds.min_x(), self.field_mid(source.bounds, source_row));

        let exit_x = allocator
            .allocate(Lane::Stub, source.bounds.min_x() - half_pad, Nudge::Decrease)
            .value();
        let entry_x = allocator
            .allocate(Lane::Stub, target.bounds.min_x() - half_pad, Nudge::Decrease)
            .value();

        let port = Lane::Port {
            entity: target.entity.name().to_string(),
            member: foreign_key.referenced_field().to_string(),
        };
        let target_y = allocator
            .allocate(port, self.field_mid(target.bounds, target_row), Nudge::Increase)
            .value();
        let target_point = Point::new(target.bounds.min_x(), target_y);

        let trunk_y = allocator
            .allocate(Lane::Trunk, source.bounds.min_y() - half_pad, Nudge::Increase)
            .value();

        let waypoints = if source.bounds.min_x() == target.bounds.min_x() {
            vec![
                Point::new(exit_x, source_point.y()),
                Point::new(exit_x, target_y),
            ]
        } else {
            vec![
                Point::new(exit_x, source_point.y()),
                Point::new(exit_x, trunk_y),
                Point::new(entry_x, trunk_y),
                Point::new(entry_x, target_y),
            ]
        };

        Ok(Route::new(
            source_point,
            target_point,
            waypoints,
            foreign_key_arrows(foreign_key),
        ))
    }
}

/// Routes every relationship of a set of placed entities.
#[derive(Debug, Clone)]
pub struct RelationshipRouter<P> {
    policy: P,
    palette: Palette,
}

impl<P: RoutingPolicy> RelationshipRouter<P> {
    pub fn new(policy: P, palette: Palette) -> Self {
        Self { policy, palette }
    }

    /// Route all relationships, in entity order and then declaration order.
    ///
    /// The `n`-th successfully routed edge gets palette color `n`; skipped
    /// relationships do not advance the color.
    pub fn route_all(
        &self,
        placed: &[PlacedEntity<'_>],
        allocator: &mut WaypointAllocator,
    ) -> Vec<RoutingOutcome> {
        let by_name: IndexMap<&str, &PlacedEntity<'_>> = placed
            .iter()
            .map(|entry| (entry.entity.name(), entry))
            .collect();

        let mut outcomes = Vec::new();
        let mut routed = 0;

        for source in placed {
            for relationship in source.entity.relationships() {
                let outcome = match self.route_one(source, relationship, &by_name, allocator) {
                    Ok(route) => {
                        let edge = self.edge(route, relationship, routed);
                        routed += 1;
                        RoutingOutcome::Routed(edge)
                    }
                    Err(reason) => {
                        let skipped = SkippedRelation::new(
                            source.entity.name(),
                            relationship.target(),
                            relationship.kind(),
                            reason,
                        );
                        warn!(
                            source = source.entity.name(),
                            target = relationship.target(),
                            reason:%;
                            "Skipping relationship"
                        );
                        RoutingOutcome::Skipped(skipped)
                    }
                };
                outcomes.push(outcome);
            }
        }

        debug!(routed, total = outcomes.len(); "Routed relationships");
        outcomes
    }

    fn route_one(
        &self,
        source: &PlacedEntity<'_>,
        relationship: &Relationship,
        by_name: &IndexMap<&str, &PlacedEntity<'_>>,
        allocator: &mut WaypointAllocator,
    ) -> Result<Route, SkipReason> {
        if relationship.target().is_empty() {
            return Err(SkipReason::MissingTarget);
        }
        let target = by_name
            .get(relationship.target())
            .ok_or(SkipReason::UnknownTarget)?;
        self.policy.route(source, target, relationship, allocator)
    }

    fn edge(&self, route: Route, relationship: &Relationship, index: usize) -> Edge {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(self.palette.color(index));

        let mut style = EdgeStyle::new(stroke, route.arrows);
        if let Some(label) = relationship.source_multiplicity() {
            style = style.with_source_label(label);
        }
        if let Some(label) = relationship.target_multiplicity() {
            style = style.with_target_label(label);
        }

        Edge::new(
            relationship.kind(),
            route.source_point,
            route.target_point,
            route.waypoints,
            style,
        )
    }
}
