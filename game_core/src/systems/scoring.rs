use rand::Rng;

use crate::{Events, MatchPhase, MatchState, Side};

/// Check if ball left the field and, if so, award the point.
///
/// Returns the phase for the rest of this tick; the caller serves on
/// `Scored`.
pub fn check_scoring(state: &mut MatchState, events: &mut Events) -> MatchPhase {
    let scorer = if state.ball.rect.left() <= 0 {
        Some(Side::Opponent)
    } else if state.ball.rect.right() >= state.field.width {
        Some(Side::Player)
    } else {
        None
    };

    let Some(side) = scorer else {
        return MatchPhase::Playing;
    };

    state.score.award(side);
    events.scored = Some(side);
    log::debug!(
        "tick {}: {:?} scored ({} - {})",
        state.tick,
        side,
        state.score.player,
        state.score.opponent
    );
    MatchPhase::Scored(side)
}

/// Serve a new ball after a point and resume play
pub fn serve<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R) {
    state.ball.reset(rng);
    state.phase = MatchPhase::Playing;
    log::debug!("tick {}: serve, ball vel {}", state.tick, state.ball.vel);
}
