use crate::{MatchState, PaddleIntent};

/// Apply the input provider's intent to the player paddle
pub fn apply_player_input(state: &mut MatchState, intent: PaddleIntent) {
    let dy = intent.delta(state.player.speed);
    state.player.move_by(dy);
}
