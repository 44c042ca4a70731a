//! Player 1 controls sampled from the digital input register

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::*;

/// Button state for one frame, as a bitfield
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Buttons(pub u32);

impl Buttons {
    /// No buttons pressed
    pub const NONE: Buttons = Buttons(0);
    pub const UP: Buttons = Buttons(BUTTON_UP);
    pub const DOWN: Buttons = Buttons(BUTTON_DOWN);

    /// Extract the two control bits from a raw input register value
    pub fn from_register(raw: u32) -> Self {
        Buttons((raw >> INPUT_SHIFT) & (BUTTON_UP | BUTTON_DOWN))
    }

    /// Raw register value that would produce these buttons
    pub fn to_register(self) -> u32 {
        self.0 << INPUT_SHIFT
    }

    pub fn up(self) -> bool {
        self.0 & BUTTON_UP != 0
    }

    pub fn down(self) -> bool {
        self.0 & BUTTON_DOWN != 0
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Move paddle 1 one row per pressed button.
///
/// Up is applied before down, each against its own bound. With both pressed
/// the paddle holds still, except at the top bound where only the down step
/// is possible.
pub fn apply_buttons(state: &mut GameState, buttons: Buttons) -> bool {
    let before = state.paddle1;
    if buttons.up() && state.paddle1 > PADDLE_MIN {
        state.paddle1 -= 1;
    }
    if buttons.down() && state.paddle1 < PADDLE_MAX {
        state.paddle1 += 1;
    }
    state.paddle1 != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_register_uses_bits_8_and_9() {
        assert_eq!(Buttons::from_register(0x100), Buttons::UP);
        assert_eq!(Buttons::from_register(0x200), Buttons::DOWN);
        assert_eq!(Buttons::from_register(0x0FF), Buttons::NONE);
        assert_eq!(Buttons::from_register(0xFFFF_FFFF), Buttons::UP | Buttons::DOWN);
        assert_eq!(Buttons::from_register(Buttons::DOWN.to_register()), Buttons::DOWN);
    }

    #[test]
    fn test_up_and_down() {
        let mut state = GameState::default();
        assert!(apply_buttons(&mut state, Buttons::UP));
        assert_eq!(state.paddle1, 4);
        assert!(apply_buttons(&mut state, Buttons::DOWN));
        assert_eq!(state.paddle1, 5);
    }

    #[test]
    fn test_both_pressed() {
        let both = Buttons::UP | Buttons::DOWN;
        let mut state = GameState::default();
        assert!(!apply_buttons(&mut state, both));
        assert_eq!(state.paddle1, 5);

        state.paddle1 = PADDLE_MAX;
        assert!(!apply_buttons(&mut state, both));
        assert_eq!(state.paddle1, PADDLE_MAX);

        // Up is blocked at the top, so only the down step lands
        state.paddle1 = PADDLE_MIN;
        assert!(apply_buttons(&mut state, both));
        assert_eq!(state.paddle1, PADDLE_MIN + 1);
    }

    #[test]
    fn test_clamped_at_bounds() {
        let mut state = GameState::default();
        state.paddle1 = PADDLE_MIN;
        assert!(!apply_buttons(&mut state, Buttons::UP));
        assert_eq!(state.paddle1, PADDLE_MIN);
        state.paddle1 = PADDLE_MAX;
        assert!(!apply_buttons(&mut state, Buttons::DOWN));
        assert_eq!(state.paddle1, PADDLE_MAX);
    }
}
