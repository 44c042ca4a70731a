//! Platform abstraction layer
//!
//! The game talks to the outside world through two narrow capabilities:
//! - [`DigitalIo`]: a fixed-width input register and output register
//! - [`FrameClock`]: the only place a frame ever waits
//!
//! `host` backs them with a real keyboard and wall clock, `scripted` with
//! deterministic doubles for tests and replays.

pub mod host;
pub mod scripted;

pub use host::{CrosstermIo, HostError, RawModeGuard, SleepClock, SpinClock};
pub use scripted::{ScriptedIo, VirtualClock};

/// Digital input/output lines
pub trait DigitalIo {
    /// Sample the input register. Never blocks.
    fn read_input(&mut self) -> u32;

    /// Overwrite the whole output register
    fn write_output(&mut self, value: u32);

    /// Configure which lines are outputs (1 = output)
    fn set_direction(&mut self, _mask: u32) {}
}

/// Frame pacing
pub trait FrameClock {
    /// Hold the loop for `ticks` clock ticks. Uninterruptible.
    fn wait(&mut self, ticks: u32);
}
