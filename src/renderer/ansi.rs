//! ANSI escape-sequence terminal over any byte stream
//!
//! Writes are fire-and-forget. The first I/O error is latched and every later
//! write is dropped until the owner collects it with [`AnsiTerminal::take_error`].

use std::io::{self, Write};

use super::TerminalSink;

pub struct AnsiTerminal<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Take the latched write error, re-enabling output
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(bytes) {
            log::warn!("Terminal write failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> TerminalSink for AnsiTerminal<W> {
    fn put_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        self.write_bytes(encoded.as_bytes());
    }

    /// `ESC [ row+1 ; col+1 H`
    fn move_to(&mut self, col: i32, row: i32) {
        self.put_str("\x1b[");
        self.put_fmt(format_args!("{}", row + 1));
        self.put_char(';');
        self.put_fmt(format_args!("{}", col + 1));
        self.put_char('H');
    }

    /// `ESC [ 2 J`
    fn clear_screen(&mut self) {
        self.put_str("\x1b[2J");
    }

    fn flush(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.flush() {
            log::warn!("Terminal flush failed: {}", e);
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(term: AnsiTerminal<Vec<u8>>) -> String {
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn test_move_to_is_one_based() {
        let mut term = AnsiTerminal::new(Vec::new());
        term.move_to(3, 5);
        assert_eq!(output(term), "\x1b[6;4H");
    }

    #[test]
    fn test_clear_screen() {
        let mut term = AnsiTerminal::new(Vec::new());
        term.clear_screen();
        assert_eq!(output(term), "\x1b[2J");
    }

    #[test]
    fn test_number_formatting() {
        let mut term = AnsiTerminal::new(Vec::new());
        term.put_decimal(0);
        term.put_char(' ');
        term.put_decimal(4_294_967_295);
        term.put_char(' ');
        term.put_hex(0x34);
        assert_eq!(output(term), "0 4294967295 0x00000034");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_error_is_latched() {
        let mut term = AnsiTerminal::new(Broken);
        term.put_str("hello");
        term.move_to(0, 0);
        assert!(term.has_error());
        let err = term.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(term.take_error().is_none());
    }
}
