use game_core::systems::tracking_delta;
use game_core::{MatchState, PaddleIntent};

/// Supplies the player paddle's intent once per tick
pub trait InputProvider {
    fn intent(&mut self, state: &MatchState) -> PaddleIntent;
}

/// Never moves
#[derive(Debug, Default)]
pub struct Idle;

impl InputProvider for Idle {
    fn intent(&mut self, _state: &MatchState) -> PaddleIntent {
        PaddleIntent::Stop
    }
}

/// Plays the player paddle with the same rule the opponent uses
#[derive(Debug, Default)]
pub struct Tracker;

impl InputProvider for Tracker {
    fn intent(&mut self, state: &MatchState) -> PaddleIntent {
        let dy = tracking_delta(&state.player, &state.ball, state.config.dead_zone);
        match dy.signum() {
            1 => PaddleIntent::Down,
            -1 => PaddleIntent::Up,
            _ => PaddleIntent::Stop,
        }
    }
}

/// Sweeps wall to wall, ignoring the ball
#[derive(Debug)]
pub struct Sweep {
    dir: PaddleIntent,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            dir: PaddleIntent::Up,
        }
    }
}

impl InputProvider for Sweep {
    fn intent(&mut self, state: &MatchState) -> PaddleIntent {
        let paddle = &state.player;
        match self.dir {
            PaddleIntent::Up if paddle.rect.top() <= 0 => self.dir = PaddleIntent::Down,
            PaddleIntent::Down if paddle.rect.bottom() >= paddle.boundary_height => {
                self.dir = PaddleIntent::Up
            }
            _ => {}
        }
        self.dir
    }
}
