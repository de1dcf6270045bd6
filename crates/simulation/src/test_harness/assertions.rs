//! Assertion helpers for `TestScene` integration tests.

use bevy::prelude::*;

use crate::pickup::ReactionState;

use super::TestScene;

impl TestScene {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_active_count(&self, expected: usize) {
        let count = self.active_count();
        assert_eq!(
            count, expected,
            "Expected {expected} active pickups, got {count}"
        );
    }

    pub fn assert_active_at_most(&self, max: usize) {
        let count = self.active_count();
        assert!(count <= max, "Expected at most {max} active pickups, got {count}");
    }

    pub fn assert_state(&self, entity: Entity, expected: ReactionState) {
        let state = self.pickup_state(entity);
        assert_eq!(
            state,
            Some(expected),
            "Expected pickup {entity:?} in {expected:?}, found {state:?}"
        );
    }

    /// The pickup's entity is gone and it is no longer registered.
    pub fn assert_torn_down(&self, entity: Entity) {
        assert!(
            !self.entity_exists(entity),
            "Expected pickup {entity:?} to be despawned"
        );
        assert!(
            !self.active_pickups().contains(&entity),
            "Expected pickup {entity:?} to be deregistered"
        );
    }

    pub fn assert_scale_near(&self, entity: Entity, expected: f32, tolerance: f32) {
        let scale = self
            .pickup_scale(entity)
            .unwrap_or_else(|| panic!("pickup {entity:?} has no transform"));
        assert!(
            (scale - expected).abs() <= tolerance,
            "Expected scale {expected} ± {tolerance}, got {scale}"
        );
    }

    /// Scale lies in `[0, pop_target]`.
    pub fn assert_scale_bounded(&self, entity: Entity) {
        let Some(scale) = self.pickup_scale(entity) else {
            return;
        };
        let max = self.config().pop_target;
        assert!(
            (0.0..=max + 1e-6).contains(&scale),
            "Expected scale within [0, {max}], got {scale}"
        );
    }
}
