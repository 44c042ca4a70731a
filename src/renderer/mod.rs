//! Character terminal rendering
//!
//! Everything is drawn through [`TerminalSink`]: a cursor move, a character
//! write and a full-screen clear. The game never reads the screen back, so
//! [`diff`] keeps track of what it has drawn via the state's shadow positions.

pub mod ansi;
pub mod diff;
pub mod grid;

use std::fmt;

pub use ansi::AnsiTerminal;
pub use grid::VirtualTerminal;

/// A character-cell output device
pub trait TerminalSink {
    /// Write one character at the cursor and advance it by one column
    fn put_char(&mut self, c: char);

    /// Place the cursor at a zero-based column and row
    fn move_to(&mut self, col: i32, row: i32);

    /// Blank the whole screen
    fn clear_screen(&mut self);

    /// Push buffered output to the device
    fn flush(&mut self) {}

    fn put_str(&mut self, s: &str) {
        for c in s.chars() {
            self.put_char(c);
        }
    }

    fn put_fmt(&mut self, args: fmt::Arguments<'_>) {
        // SinkWriter never fails, so neither does formatting into it
        let _ = fmt::Write::write_fmt(&mut SinkWriter(self), args);
    }

    /// Unsigned decimal
    fn put_decimal(&mut self, value: u32) {
        self.put_fmt(format_args!("{value}"));
    }

    /// `0x` followed by eight uppercase hex digits
    fn put_hex(&mut self, value: u32) {
        self.put_fmt(format_args!("0x{value:08X}"));
    }
}

struct SinkWriter<'a, T: TerminalSink + ?Sized>(&'a mut T);

impl<T: TerminalSink + ?Sized> fmt::Write for SinkWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_str(s);
        Ok(())
    }
}
