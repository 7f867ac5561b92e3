use crate::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive overlap of the vertical spans (touching edges count)
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.max.y >= other.min.y && self.min.y <= other.max.y
    }
}

/// Arena definition
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// Clamp a top-edge Y so that an object `extent` tall stays inside the arena
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, self.height - extent)
    }

    /// Top-left corner that centers a square ball of `size`
    pub fn ball_spawn(&self, size: f32) -> Vec2 {
        Vec2::new(self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }

    /// True once `x` has left the arena horizontally
    pub fn is_outside_x(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
