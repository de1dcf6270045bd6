//! Pointer hit testing against pickup collision volumes.

mod ray;
mod systems;


pub use ray::{find_nearest_hit, intersect_collision_volume, ray_aabb_distance};
pub use systems::{hit_test_pointer_presses, HitTestPlugin};
