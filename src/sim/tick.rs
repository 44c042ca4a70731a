//! Fixed-step simulation tick
//!
//! Advances the game state by one frame. Rendering, the frame counter and the
//! shadow positions belong to the match loop; this is pure game logic.

use super::ai::update_opponent;
use super::collision::step_ball;
use super::input::{Buttons, apply_buttons};
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame: ball, opponent, then player 1
pub fn tick(state: &mut GameState, buttons: Buttons) -> Vec<GameEvent> {
    let mut events = step_ball(state);

    if update_opponent(state) {
        events.push(GameEvent::OpponentActed);
    }

    apply_buttons(state, buttons);

    state.check_invariants();
    events
}
