//! Pickup entities: idle bob/spin and the pop and fade played after a hit.

pub mod reaction;
mod systems;
pub mod types;


pub use reaction::{PickupReaction, ReactionSettings, ReactionState, ReactionStep};
pub use systems::{
    advance_pickup_reactions, animate_idle_pickups, receive_pickup_hits, PickupPlugin,
};
pub use types::{CollisionVolume, Pickup, PickupVisual};
