//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;

pub use ai::{cadence_open, update_opponent};
pub use collision::{paddle_covers, step_ball};
pub use input::{Buttons, apply_buttons};
pub use rng::ServeRng;
pub use state::{Ball, GameEvent, GamePhase, GameState, Player, Shadow};
pub use tick::tick;
