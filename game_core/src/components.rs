use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Config, Deflection, Playfield};

/// Which end of the field an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,   // left, human-controlled
    Opponent, // right, tracking policy
}

/// Horizontal wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Discrete movement intent supplied by the input provider each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Stop,
}

impl PaddleIntent {
    /// Both keys held cancel out, as does neither
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => PaddleIntent::Up,
            (false, true) => PaddleIntent::Down,
            _ => PaddleIntent::Stop,
        }
    }

    /// Signed vertical delta for a paddle moving at `speed`
    pub fn delta(self, speed: i32) -> i32 {
        match self {
            PaddleIntent::Up => -speed,
            PaddleIntent::Down => speed,
            PaddleIntent::Stop => 0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Aabb,
    pub speed: i32,           // units per tick
    pub boundary_height: i32, // playfield height the paddle is clamped to
}

impl Paddle {
    /// Spawn a paddle at its side's margin, vertically centered
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            rect: Aabb::new(
                config.paddle_x(side),
                config.paddle_spawn_y(),
                config.paddle_width,
                config.paddle_height,
            ),
            speed: config.paddle_speed(side),
            boundary_height: config.field_height,
        }
    }

    /// Shift vertically by `dy`, then clamp so the paddle stays on the field
    pub fn move_by(&mut self, dy: i32) {
        // Clamp the top coordinate directly; bottom() would overflow on a
        // saturated position
        let max_top = self.boundary_height - self.rect.size.y;
        self.rect.pos.y = self.rect.pos.y.saturating_add(dy).max(0).min(max_top);
    }

    pub fn center_y(&self) -> i32 {
        self.rect.center_y()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Aabb,
    pub vel: IVec2,
    pub start_speed: IVec2, // baseline speed restored on every serve
    pub field: Playfield,
}

impl Ball {
    /// Centered ball moving at the baseline speed; call [`Ball::reset`] to serve
    pub fn new(config: &Config) -> Self {
        let field = Playfield::from_config(config);
        let mut rect = Aabb::new(0, 0, config.ball_size, config.ball_size);
        rect.set_center(field.center());
        let start_speed = IVec2::new(config.ball_speed_x, config.ball_speed_y);

        Self {
            rect,
            vel: start_speed,
            start_speed,
            field,
        }
    }

    /// Integrate one tick and bounce off the top/bottom walls.
    ///
    /// Left and right edges are not resolved here: crossing them scores.
    pub fn update(&mut self) -> Option<Wall> {
        self.rect.pos += self.vel;

        if self.rect.top() <= 0 {
            self.rect.set_top(0);
            self.vel.y = -self.vel.y;
            Some(Wall::Top)
        } else if self.rect.bottom() >= self.field.height {
            self.rect.set_bottom(self.field.height);
            self.vel.y = -self.vel.y;
            Some(Wall::Bottom)
        } else {
            None
        }
    }

    /// Re-center and serve in a random diagonal at baseline speed
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rect.set_center(self.field.center());

        let x_sign = if rng.gen_bool(0.5) { 1 } else { -1 };
        let y_sign = if rng.gen_bool(0.5) { 1 } else { -1 };
        self.vel = IVec2::new(self.start_speed.x * x_sign, self.start_speed.y * y_sign);
    }

    /// Recompute vertical velocity from where the ball met the paddle.
    ///
    /// Offset is -1 at the paddle's top edge and +1 at its bottom edge; it is
    /// not clamped before scaling, only the resulting speed is. The result is
    /// truncated toward zero.
    pub fn deflect_off(&mut self, paddle: &Paddle, deflection: &Deflection) {
        let half_height = f64::from(paddle.rect.size.y) / 2.0;
        let offset = f64::from(self.rect.center_y() - paddle.center_y()) / half_height;
        let max = f64::from(deflection.max_speed);
        let vy = (offset * f64::from(self.start_speed.y) * deflection.gain).min(max).max(-max);
        self.vel.y = vy as i32;
    }

    pub fn moving_toward(&self, side: Side) -> bool {
        match side {
            Side::Player => self.vel.x < 0,
            Side::Opponent => self.vel.x > 0,
        }
    }
}
