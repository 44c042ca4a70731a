//! Ball physics: integration, wall bounce, paddle collision and scoring
//!
//! Everything happens on the character grid with unit velocities, so a
//! collision is an exact coordinate match rather than an overlap test.

use super::state::{Ball, GameEvent, GameState, Player};
use crate::consts::*;

/// Whether a paddle whose top row is `top` covers row `y`
#[inline]
pub fn paddle_covers(top: i32, y: i32) -> bool {
    y >= top && y < top + PH
}

/// Move the ball one cell along its velocity
pub fn integrate(ball: &mut Ball) {
    ball.x += ball.dx;
    ball.y += ball.dy;
}

/// Reflect off the top or bottom wall.
///
/// The displacement is re-applied after flipping `dy` so the ball never
/// rests on a wall row.
pub fn bounce_walls(ball: &mut Ball) -> bool {
    if ball.y <= 1 || ball.y >= H - 2 {
        ball.dy = -ball.dy;
        ball.y += ball.dy;
        true
    } else {
        false
    }
}

/// Return the ball off either paddle.
///
/// The ball is pushed one column clear of the paddle so it cannot tunnel
/// through on the next step, whatever its incoming `dx`.
pub fn collide_paddles(ball: &mut Ball, paddle1: i32, paddle2: i32) -> Option<Player> {
    if ball.x == P1_COL && paddle_covers(paddle1, ball.y) {
        ball.dx = 1;
        ball.x = P1_COL + 1;
        return Some(Player::One);
    }
    if ball.x == P2_COL && paddle_covers(paddle2, ball.y) {
        ball.dx = -1;
        ball.x = P2_COL - 1;
        return Some(Player::Two);
    }
    None
}

/// Side that scores when the ball is in column `x`, if any
pub fn scoring_side(x: i32) -> Option<Player> {
    if x <= 1 {
        Some(Player::Two)
    } else if x >= W - 2 {
        Some(Player::One)
    } else {
        None
    }
}

/// Award the point and serve from the center.
///
/// The ball heads toward the side that conceded. A zero vertical draw falls
/// back to +1 when player 2 scored and -1 when player 1 scored.
pub fn serve(state: &mut GameState, scorer: Player) {
    state.award_point(scorer);
    let (dx, fallback) = match scorer {
        Player::Two => (-1, 1),
        Player::One => (1, -1),
    };
    let dy = state.rng.serve_dy(fallback);
    state.ball = Ball::centered(dx, dy);
}

/// Advance the ball by one frame and resolve everything it touches
pub fn step_ball(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    integrate(&mut state.ball);

    if bounce_walls(&mut state.ball) {
        events.push(GameEvent::WallBounce);
    }

    if let Some(player) = collide_paddles(&mut state.ball, state.paddle1, state.paddle2) {
        events.push(GameEvent::PaddleHit(player));
    }

    if let Some(scorer) = scoring_side(state.ball.x) {
        serve(state, scorer);
        log::debug!(
            "{:?} scored ({} - {})",
            scorer,
            state.score1,
            state.score2
        );
        events.push(GameEvent::Scored(scorer));
    }

    events
}
