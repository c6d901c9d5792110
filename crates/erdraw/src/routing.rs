//! Relationship routing.
//!
//! Turns the relationships of placed entities into orthogonal connectors.
//! A [`RelationshipRouter`] walks relationships in declaration order, asks a
//! [`RoutingPolicy`] for the connector geometry and colors each routed edge
//! from a palette. Waypoint coordinates come from a [`WaypointAllocator`]
//! shared by the whole pass so parallel connectors never overlap.
//!
//! A relationship that cannot be routed never aborts the pass; it becomes a
//! [`SkippedRelation`] carrying the reason.

mod cardinality;
mod router;
mod waypoint;

pub use cardinality::{cardinality_arrows, foreign_key_arrows};
pub use router::{ClassRoutes, PlacedEntity, RelationshipRouter, Route, RoutingPolicy, TableRoutes};
pub use waypoint::{Allocation, Lane, Nudge, WaypointAllocator};

use std::fmt;

use erdraw_core::{draw::EdgeStyle, geometry::Point, semantic::RelationKind};

/// A routed connector.
///
/// `source` and `target` name the cells the connector is attached to. They
/// are `None` for connectors that are pinned by coordinates alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    kind: RelationKind,
    source: Option<String>,
    target: Option<String>,
    source_point: Point,
    target_point: Point,
    waypoints: Vec<Point>,
    style: EdgeStyle,
}

impl Edge {
    /// Create a free connector running through `waypoints`.
    pub fn new(
        kind: RelationKind,
        source_point: Point,
        target_point: Point,
        waypoints: Vec<Point>,
        style: EdgeStyle,
    ) -> Self {
        Self {
            kind,
            source: None,
            target: None,
            source_point,
            target_point,
            waypoints,
            style,
        }
    }

    /// Attach the connector ends to the named cells.
    pub fn with_endpoints(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.target = Some(target.into());
        self
    }

    /// Kind of the relationship this connector draws.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn source_point(&self) -> Point {
        self.source_point
    }

    pub fn target_point(&self) -> Point {
        self.target_point
    }

    /// Intermediate bend points, in path order.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }
}

/// Why a relationship produced no edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The relationship has no target name.
    MissingTarget,
    /// No entity has the source name.
    UnknownSource,
    /// No entity has the target name.
    UnknownTarget,
    /// The referencing field is not a field of the source table.
    UnknownSourceMember,
    /// The referenced field does not exist on the target table.
    UnknownTargetMember,
    /// A table relationship without foreign key details.
    NotAForeignKey,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "relationship has no target"),
            Self::UnknownSource => write!(f, "source entity does not exist"),
            Self::UnknownTarget => write!(f, "target entity does not exist"),
            Self::UnknownSourceMember => write!(f, "referencing field does not exist"),
            Self::UnknownTargetMember => write!(f, "referenced field does not exist"),
            Self::NotAForeignKey => write!(f, "relationship is not a foreign key"),
        }
    }
}

/// A relationship that was dropped during routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRelation {
    source: String,
    target: String,
    kind: RelationKind,
    reason: SkipReason,
}

impl SkippedRelation {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
        reason: SkipReason,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            reason,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn reason(&self) -> SkipReason {
        self.reason
    }
}

impl fmt::Display for SkippedRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} relationship `{}` -> `{}` skipped: {}",
            self.kind, self.source, self.target, self.reason
        )
    }
}

/// The result of routing one relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingOutcome {
    Routed(Edge),
    Skipped(SkippedRelation),
}

/// Split outcomes into edges and skips, keeping the relative order of each.
pub fn partition_outcomes(
    outcomes: impl IntoIterator<Item = RoutingOutcome>,
) -> (Vec<Edge>, Vec<SkippedRelation>) {
    let mut edges = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            RoutingOutcome::Routed(edge) => edges.push(edge),
            RoutingOutcome::Skipped(skip) => skipped.push(skip),
        }
    }
    (edges, skipped)
}
