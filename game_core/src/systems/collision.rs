use crate::{Ball, Deflection, Events, MatchState, Paddle, Side};

/// Bounce the ball off whichever paddle it is overlapping and approaching.
///
/// The player side is resolved before the opponent side. A ball that is still
/// inside a paddle but already moving away is left alone, so one contact
/// yields exactly one bounce.
pub fn resolve_paddle_collisions(state: &mut MatchState, events: &mut Events) {
    let deflection = state.config.deflection;

    for side in [Side::Player, Side::Opponent] {
        let paddle = *state.paddle(side);
        if bounce_off_paddle(&mut state.ball, &paddle, &deflection) {
            log::trace!(
                "tick {}: ball hit {:?} paddle, vel now {}",
                state.tick,
                side,
                state.ball.vel
            );
            events.ball_hit_paddle = Some(side);
        }
    }
}

/// Returns true if the ball bounced
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, deflection: &Deflection) -> bool {
    if !ball.rect.intersects(&paddle.rect) || !ball.moving_toward(paddle.side) {
        return false;
    }

    // Snap out of the paddle face so the ball cannot tunnel or stick
    match paddle.side {
        Side::Player => ball.rect.set_left(paddle.rect.right()),
        Side::Opponent => ball.rect.set_right(paddle.rect.left()),
    }
    ball.vel.x = -ball.vel.x;
    ball.deflect_off(paddle, deflection);
    true
}
