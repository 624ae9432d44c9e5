use crate::{Events, MatchState};

/// Move ball one tick and report any top/bottom bounce
pub fn move_ball(state: &mut MatchState, events: &mut Events) {
    if let Some(wall) = state.ball.update() {
        log::trace!("tick {}: ball bounced off {:?} wall", state.tick, wall);
        events.ball_hit_wall = Some(wall);
    }
}
