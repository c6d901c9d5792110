//! Use-case diagram layout.
//!
//! Actors stand in a column on the left. Use cases sit on a grid inside a
//! titled system boundary to the right of them. Connectors attach to the
//! cells directly and are left for the viewer to route, so no waypoints are
//! allocated here.

use indexmap::IndexMap;
use log::{debug, warn};

use erdraw_core::{
    color::Color,
    draw::{ArrowHead, ArrowStyle, EdgeStyle, StrokeDefinition},
    geometry::{Bounds, Point, Size},
    semantic::{RelationKind, UseCaseDiagram},
};

use crate::{
    config::UseCaseLayoutConfig,
    layout::{GridPlacer, PlacedBox, columns_for},
    routing::{Edge, SkipReason, SkippedRelation},
};

/// Horizontal inset of the use-case grid inside the boundary.
const INSET_X: f32 = 20.0;
/// Vertical inset of the use-case grid, below the boundary title.
const INSET_Y: f32 = 30.0;
/// Extra boundary size around the use-case grid.
const MARGIN: f32 = 40.0;

/// Boxes and connectors of a use-case diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct UseCaseLayout {
    system: String,
    container: Bounds,
    actors: Vec<PlacedBox>,
    use_cases: Vec<PlacedBox>,
    edges: Vec<Edge>,
    skipped: Vec<SkippedRelation>,
}

impl UseCaseLayout {
    /// Title of the system boundary.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// The system boundary.
    pub fn container(&self) -> Bounds {
        self.container
    }

    /// Actor boxes, keyed by actor id.
    pub fn actors(&self) -> &[PlacedBox] {
        &self.actors
    }

    /// Use-case boxes keyed by use-case id, relative to the container's top-left corner.
    pub fn use_cases(&self) -> &[PlacedBox] {
        &self.use_cases
    }

    /// Actor links first, then include and extend links per use case.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn skipped(&self) -> &[SkippedRelation] {
        &self.skipped
    }
}

pub(super) fn layout(diagram: &UseCaseDiagram, config: &UseCaseLayoutConfig) -> UseCaseLayout {
    let count = diagram.use_cases().len();
    let columns = columns_for(count);
    let padding = config.padding();

    let container_size = Size::new(
        config.use_case_width() * columns as f32
            + padding * columns.saturating_sub(1) as f32
            + MARGIN,
        config.use_case_height() * count as f32
            + padding * count.saturating_sub(1) as f32
            + MARGIN,
    );
    let container = Bounds::new_from_top_left(
        Point::new(config.use_case_x() - INSET_X, padding),
        container_size,
    );

    let actor_size = Size::new(config.actor_width(), config.actor_height());
    let actors: Vec<PlacedBox> = diagram
        .actors()
        .iter()
        .enumerate()
        .map(|(index, actor)| {
            let y = container.min_y() + index as f32 * (config.actor_height() + padding);
            PlacedBox::new(
                actor.id(),
                Bounds::new_from_top_left(Point::new(config.actor_x(), y), actor_size),
            )
        })
        .collect();

    let use_case_size = Size::new(config.use_case_width(), config.use_case_height());
    let positions = GridPlacer::new(config.use_case_width())
        .with_padding(padding)
        .place(&vec![use_case_size; count]);
    let inset = Point::new(INSET_X, INSET_Y);
    let use_cases: Vec<PlacedBox> = diagram
        .use_cases()
        .iter()
        .zip(positions)
        .map(|(use_case, position)| {
            PlacedBox::new(
                use_case.id(),
                Bounds::new_from_top_left(position.add_point(inset), use_case_size),
            )
        })
        .collect();

    let mut links = Links::new(&actors, &use_cases, container.min_point());
    for association in diagram.associations() {
        links.actor_link(association.actor_id(), association.use_case_id());
    }
    for use_case in diagram.use_cases() {
        for included in use_case.includes() {
            links.dependency(RelationKind::Include, use_case.id(), included);
        }
        for extended in use_case.extends() {
            links.dependency(RelationKind::Extend, use_case.id(), extended);
        }
    }

    debug!(
        actors = actors.len(),
        use_cases = use_cases.len(),
        edges = links.edges.len();
        "Use-case diagram laid out"
    );

    UseCaseLayout {
        system: diagram.system().to_string(),
        container,
        actors,
        use_cases,
        edges: links.edges,
        skipped: links.skipped,
    }
}

/// Collects connectors between actors and use cases by id.
struct Links {
    actors: IndexMap<String, Bounds>,
    use_cases: IndexMap<String, Bounds>,
    edges: Vec<Edge>,
    skipped: Vec<SkippedRelation>,
}

impl Links {
    fn new(actors: &[PlacedBox], use_cases: &[PlacedBox], origin: Point) -> Self {
        Self {
            actors: actors
                .iter()
                .map(|placed| (placed.name().to_string(), placed.bounds()))
                .collect(),
            use_cases: use_cases
                .iter()
                .map(|placed| (placed.name().to_string(), placed.bounds().translate(origin)))
                .collect(),
            edges: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn actor_link(&mut self, actor_id: &str, use_case_id: &str) {
        let style = EdgeStyle::new(
            StrokeDefinition::solid(Color::default(), 1.0),
            ArrowStyle::new(ArrowHead::None, false, ArrowHead::Open, false),
        );
        let Some(source) = self.actors.get(actor_id).copied() else {
            self.skip(RelationKind::Association, actor_id, use_case_id, SkipReason::UnknownSource);
            return;
        };
        self.link(RelationKind::Association, actor_id, use_case_id, source, style);
    }

    fn dependency(&mut self, kind: RelationKind, source_id: &str, target_id: &str) {
        let label = match kind {
            RelationKind::Extend => "<<extend>>",
            _ => "<<include>>",
        };
        let style = EdgeStyle::new(
            StrokeDefinition::dashed(Color::default(), 1.0),
            ArrowStyle::new(ArrowHead::None, false, ArrowHead::Open, false),
        )
        .with_label(label);
        let Some(source) = self.use_cases.get(source_id).copied() else {
            self.skip(kind, source_id, target_id, SkipReason::UnknownSource);
            return;
        };
        self.link(kind, source_id, target_id, source, style);
    }

    fn link(
        &mut self,
        kind: RelationKind,
        source_id: &str,
        target_id: &str,
        source: Bounds,
        style: EdgeStyle,
    ) {
        if target_id.is_empty() {
            self.skip(kind, source_id, target_id, SkipReason::MissingTarget);
            return;
        }
        let Some(target) = self.use_cases.get(target_id).copied() else {
            self.skip(kind, source_id, target_id, SkipReason::UnknownTarget);
            return;
        };

        let edge = Edge::new(kind, source.right_mid(), target.left_mid(), Vec::new(), style)
            .with_endpoints(source_id, target_id);
        self.edges.push(edge);
    }

    fn skip(&mut self, kind: RelationKind, source_id: &str, target_id: &str, reason: SkipReason) {
        warn!(source = source_id, target = target_id, reason:%; "Skipping {kind} link");
        self.skipped
            .push(SkippedRelation::new(source_id, target_id, kind, reason));
    }
}
