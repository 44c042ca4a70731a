//! UART Pong - a frame-stepped Pong for character terminals
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, opponent, input)
//! - `renderer`: Escape-sequence terminal output and minimal-redraw rendering
//! - `platform`: Digital I/O and frame clock abstraction
//! - `game`: Match state machine driving one frame at a time
//! - `settings`: Host runner configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameReport, Match};
pub use settings::{ClockKind, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Board dimensions (character cells, border included)
    pub const W: i32 = 32;
    pub const H: i32 = 12;
    /// Paddle height in rows
    pub const PH: i32 = 3;

    /// Paddle columns
    pub const P1_COL: i32 = 2;
    pub const P2_COL: i32 = W - 3;

    /// Center line column, also the serve column
    pub const CENTER_COL: i32 = W / 2;
    pub const CENTER_ROW: i32 = H / 2;

    /// Lowest and highest legal paddle top rows
    pub const PADDLE_MIN: i32 = 1;
    pub const PADDLE_MAX: i32 = H - PH - 1;

    /// Points needed to win a round
    pub const WIN_SCORE: u32 = 5;

    /// Opponent cadence gate: acts when (frame * K) % M == 0
    pub const AI_CADENCE_K: u32 = 5;
    pub const AI_CADENCE_M: u32 = 11;

    /// Serve RNG (32-bit linear congruential generator)
    pub const LCG_A: u32 = 1_103_515_245;
    pub const LCG_C: u32 = 12_345;
    pub const DEFAULT_SEED: u32 = 12_345;

    /// Glyphs
    pub const BALL_GLYPH: char = 'O';
    pub const PADDLE_GLYPH: char = '#';
    pub const CENTER_GLYPH: char = ':';
    pub const BLANK_GLYPH: char = ' ';
    pub const CORNER_GLYPH: char = '+';
    pub const HORIZONTAL_GLYPH: char = '-';
    pub const VERTICAL_GLYPH: char = '|';

    /// Player 1 buttons live in bits 8-9 of the input register
    pub const INPUT_SHIFT: u32 = 8;
    pub const BUTTON_UP: u32 = 0x01;
    pub const BUTTON_DOWN: u32 = 0x02;

    /// Output register patterns
    pub const OUTPUT_DIRECTION_MASK: u32 = 0xFF;
    pub const FLASH_P1_SCORED: u32 = 0x0F;
    pub const FLASH_P2_SCORED: u32 = 0xF0;
    pub const FLASH_WIN: u32 = 0xFF;

    /// Frame clock ticks per frame and for the win banner
    pub const FRAME_DELAY_TICKS: u32 = 100;
    pub const WIN_DWELL_TICKS: u32 = 5000;

    // Paddle columns sit strictly inside the scoring columns and a paddle band
    // always fits between the walls, so the wall bounce (rows) and the paddle
    // collision (columns) never compete for the same coordinate.
    const _: () = assert!(P1_COL > 1 && P2_COL < W - 2 && P1_COL < CENTER_COL);
    const _: () = assert!(PADDLE_MIN <= PADDLE_MAX && H >= PH + 2);
    const _: () = assert!(WIN_SCORE <= 0x0F);
}
