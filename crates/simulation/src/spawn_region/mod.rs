//! Spawn placement: project the camera frustum onto the ground plane and pick
//! a random point inside the inset rectangle.
//!
//! The region is recomputed for every spawn request because the camera may
//! have moved since the last one.

mod projector;
pub mod types;


pub use projector::{intersect_ground, project_ground_bounds, spawn_region};
pub use types::SpawnRegion;
