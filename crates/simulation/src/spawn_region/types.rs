use bevy::prelude::*;
use rand::Rng;

use crate::config::FALLBACK_HALF_EXTENT;

/// Axis-aligned rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SpawnRegion {
    /// Region used when no part of the ground is visible.
    pub const FALLBACK: SpawnRegion = SpawnRegion {
        min_x: -FALLBACK_HALF_EXTENT,
        max_x: FALLBACK_HALF_EXTENT,
        min_z: -FALLBACK_HALF_EXTENT,
        max_z: FALLBACK_HALF_EXTENT,
    };

    /// Degenerate region containing a single ground point.
    pub fn from_point(x: f32, z: f32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_z: z,
            max_z: z,
        }
    }

    /// Grow the region so it also covers `(x, z)`.
    pub fn include(&mut self, x: f32, z: f32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Centre as `(x, z)`.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    /// Shrink each axis by `fraction * span` on both sides.
    pub fn inset(&self, fraction: f32) -> Self {
        let inset_x = self.width() * fraction;
        let inset_z = self.depth() * fraction;
        Self {
            min_x: self.min_x + inset_x,
            max_x: self.max_x - inset_x,
            min_z: self.min_z + inset_z,
            max_z: self.max_z - inset_z,
        }
    }

    /// Point at fractional position `(u, v)` across the region, as `(x, z)`.
    pub fn lerp_point(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(
            self.min_x + (self.max_x - self.min_x) * u,
            self.min_z + (self.max_z - self.min_z) * v,
        )
    }

    /// Uniform random point from two independent samples, as `(x, z)`.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        let u: f32 = rng.gen();
        let v: f32 = rng.gen();
        self.lerp_point(u, v)
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}
