pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use rand::Rng;
use systems::*;

/// Run one deterministic tick of the Pong simulation
pub fn step<R: Rng + ?Sized>(state: &mut MatchState, intent: PaddleIntent, rng: &mut R) -> Events {
    let mut events = Events::new();

    // 1. Player paddle follows the input provider
    apply_player_input(state, intent);

    // 2. Opponent paddle follows the tracking policy
    apply_tracking(state);

    // 3. Move ball, bouncing off top/bottom walls
    move_ball(state, &mut events);

    // 4-5. Paddle contacts, player side first
    resolve_paddle_collisions(state, &mut events);

    // 6. Check scoring (ball reached a side wall) and serve again
    state.phase = check_scoring(state, &mut events);
    if let MatchPhase::Scored(_) = state.phase {
        serve(state, rng);
    }

    state.tick += 1;
    events
}

/// Helper to create a match with a seeded random source
pub fn create_match(config: Config, seed: u64) -> (MatchState, GameRng) {
    let mut rng = GameRng::new(seed);
    let state = MatchState::new(config, &mut rng);
    (state, rng)
}
