//! Native terminal platform
//!
//! The keyboard stands in for the input register (raw mode, polled without
//! blocking), the output register is reported through the log, and frames
//! are paced by spinning or sleeping.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use thiserror::Error;

use super::{DigitalIo, FrameClock};
use crate::consts::{BUTTON_DOWN, BUTTON_UP, INPUT_SHIFT};

/// Host runner failure
#[derive(Error, Debug)]
pub enum HostError {
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Input register bits to assert for this frame
    Buttons(u32),
    Quit,
    Ignore,
}

/// Map a key event onto the input register
pub fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('w') | KeyCode::Up => KeyAction::Buttons(BUTTON_UP << INPUT_SHIFT),
        KeyCode::Char('s') | KeyCode::Down => KeyAction::Buttons(BUTTON_DOWN << INPUT_SHIFT),
        _ => KeyAction::Ignore,
    }
}

/// Keyboard-backed digital I/O.
///
/// Every key press queued since the previous sample asserts its bit for one
/// frame, so holding a key moves the paddle at the keyboard repeat rate.
#[derive(Debug, Default)]
pub struct CrosstermIo {
    quit: bool,
    last_output: Option<u32>,
    direction: u32,
}

impl CrosstermIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit key seen (q, Esc or Ctrl-C)
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn last_output(&self) -> Option<u32> {
        self.last_output
    }

    fn drain_keys(&mut self) -> io::Result<u32> {
        let mut raw = 0;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match key_action(&key) {
                    KeyAction::Buttons(bits) => raw |= bits,
                    KeyAction::Quit => {
                        log::info!("Quit requested");
                        self.quit = true;
                    }
                    KeyAction::Ignore => {}
                }
            }
        }
        Ok(raw)
    }
}

impl DigitalIo for CrosstermIo {
    fn read_input(&mut self) -> u32 {
        match self.drain_keys() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Keyboard poll failed: {}", e);
                0
            }
        }
    }

    fn write_output(&mut self, value: u32) {
        let value = value & self.direction;
        if self.last_output != Some(value) {
            log::debug!("Output register {:#04x}", value);
            self.last_output = Some(value);
        }
    }

    fn set_direction(&mut self, mask: u32) {
        log::debug!("Output direction mask {:#04x}", mask);
        self.direction = mask;
    }
}

/// Puts the terminal in raw mode with a hidden cursor until dropped
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self, HostError> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Busy-wait pacing, `spins_per_tick` spin-loop hints per tick
#[derive(Debug, Clone)]
pub struct SpinClock {
    spins_per_tick: u32,
}

impl SpinClock {
    pub fn new(spins_per_tick: u32) -> Self {
        Self { spins_per_tick }
    }
}

impl FrameClock for SpinClock {
    fn wait(&mut self, ticks: u32) {
        let spins = u64::from(ticks) * u64::from(self.spins_per_tick);
        for _ in 0..spins {
            std::hint::spin_loop();
        }
    }
}

/// Sleep-based pacing with a fixed tick length
#[derive(Debug, Clone)]
pub struct SleepClock {
    tick: Duration,
}

impl SleepClock {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Time spent waiting `ticks`, saturating instead of overflowing
    pub fn span(&self, ticks: u32) -> Duration {
        self.tick.checked_mul(ticks).unwrap_or(Duration::MAX)
    }
}

impl FrameClock for SleepClock {
    fn wait(&mut self, ticks: u32) {
        std::thread::sleep(self.span(ticks));
    }
}
