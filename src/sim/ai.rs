//! Opponent paddle controller
//!
//! Tracks the ball one row at a time, but only on frames that pass an
//! irregular cadence gate, which keeps it beatable.

use super::state::GameState;
use crate::consts::*;

/// Whether the opponent may act on `frame`
#[inline]
pub fn cadence_open(frame: u32) -> bool {
    frame.wrapping_mul(AI_CADENCE_K) % AI_CADENCE_M == 0
}

/// Step the paddle center one row toward `ball_y`, staying inside the board
pub fn track(paddle: i32, ball_y: i32) -> i32 {
    let center = paddle + 1;
    if ball_y < center && paddle > PADDLE_MIN {
        paddle - 1
    } else if ball_y > center && paddle < PADDLE_MAX {
        paddle + 1
    } else {
        paddle
    }
}

/// Run the opponent for this frame. Returns true when the gate was open.
pub fn update_opponent(state: &mut GameState) -> bool {
    if !cadence_open(state.frame) {
        return false;
    }
    state.paddle2 = track(state.paddle2, state.ball.y);
    true
}
