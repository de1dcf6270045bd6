use bevy::prelude::*;

// =============================================================================
// Event Types
// =============================================================================

/// Where a pointer press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A primary pointer-down or the first touch-start of a frame, in logical
/// screen pixels (origin top-left).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerPressed {
    pub screen_pos: Vec2,
    pub viewport_size: Vec2,
    pub source: PointerSource,
}

/// The hit-test found `entity` under a pointer press.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickupHit {
    pub entity: Entity,
    /// World-space distance from the ray origin to the hit.
    pub distance: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickupSpawned {
    pub entity: Entity,
    pub position: Vec3,
}

/// A pickup finished its fade and was removed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupCollected {
    pub entity: Entity,
}

pub struct PickupEventsPlugin;

impl Plugin for PickupEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerPressed>()
            .add_event::<PickupHit>()
            .add_event::<PickupSpawned>()
            .add_event::<PickupCollected>();
    }
}
