//! Collision-free waypoint coordinates.
//!
//! A [`WaypointAllocator`] hands out coordinates on one axis at a time. Each
//! [`Lane`] keeps its own set of used values; asking for a value that is
//! already taken walks away from it in fixed steps until a free one is found.
//! Nothing is ever released, so one allocator covers exactly one routing
//! pass.

use std::collections::{HashMap, HashSet};

use log::trace;

/// Which group of connector segments a coordinate belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Vertical segments leaving a source box or entering a target box (X axis).
    Stub,
    /// Shared horizontal segments between columns (Y axis).
    Trunk,
    /// Entry rows on one referenced table field (Y axis).
    Port { entity: String, member: String },
}

/// Direction in which a colliding coordinate is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Decrease,
    Increase,
}

impl Nudge {
    fn sign(self) -> f32 {
        match self {
            Self::Decrease => -1.0,
            Self::Increase => 1.0,
        }
    }
}

/// A reserved coordinate and how far it was moved from the requested one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    value: f32,
    offset: f32,
}

impl Allocation {
    pub fn value(self) -> f32 {
        self.value
    }

    /// Signed distance from the requested coordinate, zero when it was free.
    pub fn offset(self) -> f32 {
        self.offset
    }
}

/// Per-pass registry of used routing coordinates.
#[derive(Debug)]
pub struct WaypointAllocator {
    step: f32,
    used: HashMap<Lane, HashSet<u32>>,
}

impl WaypointAllocator {
    /// Create an allocator that moves colliding coordinates by `step`.
    ///
    /// `step` must be positive and finite.
    pub fn new(step: f32) -> Self {
        debug_assert!(step.is_finite() && step > 0.0, "nudge step must be positive");
        Self {
            step,
            used: HashMap::new(),
        }
    }

    /// Reserve the coordinate closest to `desired` in the `nudge` direction
    /// that no earlier call reserved on `lane`.
    ///
    /// Candidates are `desired ± k * step` for `k = 0, 1, 2, ...`, so the
    /// result is always a whole number of steps away from `desired`.
    pub fn allocate(&mut self, lane: Lane, desired: f32, nudge: Nudge) -> Allocation {
        if !desired.is_finite() {
            return Allocation {
                value: desired,
                offset: 0.0,
            };
        }

        let used = self.used.entry(lane).or_default();
        let mut steps = 0u32;
        loop {
            let offset = if steps == 0 {
                0.0
            } else {
                nudge.sign() * steps as f32 * self.step
            };
            let value = desired + offset;
            if used.insert(key(value)) {
                if steps > 0 {
                    trace!(desired, value, steps; "Nudged waypoint");
                }
                return Allocation { value, offset };
            }
            steps += 1;
        }
    }

    /// Whether `value` has been reserved on `lane`.
    pub fn is_used(&self, lane: &Lane, value: f32) -> bool {
        self.used
            .get(lane)
            .is_some_and(|used| used.contains(&key(value)))
    }
}

/// Exact-match key for a coordinate; `-0.0` and `0.0` collide.
fn key(value: f32) -> u32 {
    (value + 0.0).to_bits()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_free_coordinate_is_returned_unchanged() {
        let mut allocator = WaypointAllocator::new(10.0);
        let allocation = allocator.allocate(Lane::Stub, 315.0, Nudge::Decrease);

        assert_approx_eq!(f32, allocation.value(), 315.0);
        assert_approx_eq!(f32, allocation.offset(), 0.0);
        assert!(allocator.is_used(&Lane::Stub, 315.0));
    }

    #[test]
    fn test_collisions_walk_in_nudge_direction() {
        let mut allocator = WaypointAllocator::new(5.0);

        let first = allocator.allocate(Lane::Trunk, -50.0, Nudge::Increase);
        let second = allocator.allocate(Lane::Trunk, -50.0, Nudge::Increase);
        let third = allocator.allocate(Lane::Trunk, -50.0, Nudge::Increase);

        assert_approx_eq!(f32, first.value(), -50.0);
        assert_approx_eq!(f32, second.value(), -45.0);
        assert_approx_eq!(f32, second.offset(), 5.0);
        assert_approx_eq!(f32, third.value(), -40.0);

        let mut allocator = WaypointAllocator::new(10.0);
        allocator.allocate(Lane::Stub, 75.0, Nudge::Decrease);
        let nudged = allocator.allocate(Lane::Stub, 75.0, Nudge::Decrease);
        assert_approx_eq!(f32, nudged.value(), 65.0);
        assert_approx_eq!(f32, nudged.offset(), -10.0);
    }

    #[test]
    fn test_skips_values_reserved_by_other_requests() {
        let mut allocator = WaypointAllocator::new(10.0);
        allocator.allocate(Lane::Stub, 65.0, Nudge::Decrease);
        allocator.allocate(Lane::Stub, 75.0, Nudge::Decrease);

        // 75 and 65 are both taken
        let allocation = allocator.allocate(Lane::Stub, 75.0, Nudge::Decrease);
        assert_approx_eq!(f32, allocation.value(), 55.0);
        assert_approx_eq!(f32, allocation.offset(), -20.0);
    }

    #[test]
    fn test_lanes_are_independent() {
        let mut allocator = WaypointAllocator::new(5.0);
        allocator.allocate(Lane::Stub, 100.0, Nudge::Decrease);

        let trunk = allocator.allocate(Lane::Trunk, 100.0, Nudge::Decrease);
        assert_approx_eq!(f32, trunk.value(), 100.0);

        let port = |member: &str| Lane::Port {
            entity: "customers".to_string(),
            member: member.to_string(),
        };
        allocator.allocate(port("id"), 60.0, Nudge::Increase);
        let other_field = allocator.allocate(port("email"), 60.0, Nudge::Increase);
        let same_field = allocator.allocate(port("id"), 60.0, Nudge::Increase);
        assert_approx_eq!(f32, other_field.value(), 60.0);
        assert_approx_eq!(f32, same_field.value(), 65.0);
    }

    #[test]
    fn test_negative_zero_collides_with_zero() {
        let mut allocator = WaypointAllocator::new(10.0);
        allocator.allocate(Lane::Stub, 0.0, Nudge::Decrease);
        let allocation = allocator.allocate(Lane::Stub, -0.0, Nudge::Decrease);
        assert_approx_eq!(f32, allocation.value(), -10.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn request_strategy() -> impl Strategy<Value = Vec<(bool, i32)>> {
        // Whole-number coordinates on a coarse grid so collisions are frequent
        prop::collection::vec((any::<bool>(), (-20i32..20).prop_map(|v| v * 5)), 1..80)
    }

    /// No two allocations on one lane ever share a value, and every value is
    /// a whole number of steps from its request.
    fn check_allocations_are_distinct(requests: &[(bool, i32)]) -> Result<(), TestCaseError> {
        let mut allocator = WaypointAllocator::new(5.0);
        let mut issued = HashSet::new();

        for &(increase, desired) in requests {
            let nudge = if increase {
                Nudge::Increase
            } else {
                Nudge::Decrease
            };
            let allocation = allocator.allocate(Lane::Stub, desired as f32, nudge);

            prop_assert!(
                issued.insert((allocation.value() + 0.0).to_bits()),
                "value {} issued twice",
                allocation.value()
            );
            let steps = allocation.offset() / 5.0;
            prop_assert_eq!(steps, steps.round());
            match nudge {
                Nudge::Increase => prop_assert!(allocation.offset() >= 0.0),
                Nudge::Decrease => prop_assert!(allocation.offset() <= 0.0),
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn allocations_are_distinct(requests in request_strategy()) {
            check_allocations_are_distinct(&requests)?;
        }
    }
}
