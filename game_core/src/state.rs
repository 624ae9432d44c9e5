use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Ball, Config, Paddle, Playfield, Score, Side};

/// Per-tick match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball in flight
    #[default]
    Playing,
    /// Ball crossed a side this tick; cleared by the serve before `step` returns
    Scored(Side),
}

/// Everything the simulation mutates, owned in one place
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub config: Config,
    pub field: Playfield,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    pub tick: u64,
}

impl MatchState {
    /// Fresh match with both paddles centered and the first serve rolled
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Self {
        let mut ball = Ball::new(&config);
        ball.reset(rng);

        Self {
            field: Playfield::from_config(&config),
            player: Paddle::new(Side::Player, &config),
            opponent: Paddle::new(Side::Opponent, &config),
            ball,
            score: Score::new(),
            phase: MatchPhase::Playing,
            tick: 0,
            config,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Copy out what a renderer needs to draw the frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            player: self.player.rect,
            opponent: self.opponent.rect,
            ball: self.ball.rect,
            score: self.score,
        }
    }
}

/// Read-only view of a completed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: Aabb,
    pub opponent: Aabb,
    pub ball: Aabb,
    pub score: Score,
}
