use crate::{Ball, MatchState, Paddle};

/// Vertical delta the tracking policy wants for `paddle` this tick.
///
/// Pure function of the current positions: chase the ball's center at the
/// paddle's own speed, holding still while within `dead_zone` of it.
pub fn tracking_delta(paddle: &Paddle, ball: &Ball, dead_zone: i32) -> i32 {
    let paddle_y = paddle.center_y();
    let ball_y = ball.rect.center_y();

    if paddle_y < ball_y - dead_zone {
        paddle.speed
    } else if paddle_y > ball_y + dead_zone {
        -paddle.speed
    } else {
        0
    }
}

/// Drive the opponent paddle with the tracking policy
pub fn apply_tracking(state: &mut MatchState) {
    let dy = tracking_delta(&state.opponent, &state.ball, state.config.dead_zone);
    if dy != 0 {
        state.opponent.move_by(dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Side};
    use glam::IVec2;

    fn setup(paddle_center: i32, ball_center: i32) -> (Paddle, Ball) {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Opponent, &config);
        paddle.move_by(paddle_center - paddle.center_y());
        let mut ball = Ball::new(&config);
        ball.rect.set_center(IVec2::new(450, ball_center));
        (paddle, ball)
    }

    #[test]
    fn test_paddle_above_ball_moves_down() {
        let (paddle, ball) = setup(200, 220);
        assert_eq!(tracking_delta(&paddle, &ball, 8), paddle.speed);
    }

    #[test]
    fn test_paddle_below_ball_moves_up() {
        let (paddle, ball) = setup(300, 220);
        assert_eq!(tracking_delta(&paddle, &ball, 8), -paddle.speed);
    }

    #[test]
    fn test_inside_dead_zone_holds() {
        let (paddle, ball) = setup(215, 220);
        assert_eq!(tracking_delta(&paddle, &ball, 8), 0);
    }

    #[test]
    fn test_dead_zone_edge_holds() {
        let (paddle, ball) = setup(212, 220);
        assert_eq!(tracking_delta(&paddle, &ball, 8), 0, "Exactly dead_zone away holds");
        let (paddle, ball) = setup(228, 220);
        assert_eq!(tracking_delta(&paddle, &ball, 8), 0);
    }

    #[test]
    fn test_apply_tracking_moves_opponent_only() {
        let config = Config::new();
        let mut state = MatchState::new(config, &mut crate::GameRng::new(3));
        state.ball.rect.set_center(IVec2::new(450, 400));
        let player = state.player;
        let top = state.opponent.rect.top();

        apply_tracking(&mut state);

        assert_eq!(state.opponent.rect.top(), top + state.config.opponent_speed);
        assert_eq!(state.player, player);
    }

    #[test]
    fn test_tracking_respects_walls() {
        let mut state = MatchState::new(Config::new(), &mut crate::GameRng::new(3));
        state.ball.rect.set_center(IVec2::new(450, 539));
        for _ in 0..200 {
            apply_tracking(&mut state);
        }
        assert_eq!(state.opponent.rect.bottom(), 540);
    }
}
