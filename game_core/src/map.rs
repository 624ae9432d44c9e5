use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle, Y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: IVec2,  // top-left corner
    pub size: IVec2, // width, height
}

impl Aabb {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Open-interval overlap test: touching edges do not count, and empty
    /// rectangles never intersect anything.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.size.x <= 0 || self.size.y <= 0 || other.size.x <= 0 || other.size.y <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The rectangular arena both paddles and the ball live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    /// Midpoint used for serves
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}
