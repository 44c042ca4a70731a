//! In-memory character grid
//!
//! Stands in for a real terminal so a sequence of frames can be diffed cell
//! by cell. Writes outside the grid are clipped.

use super::TerminalSink;
use crate::consts::{BLANK_GLYPH, H, W};

#[derive(Debug, Clone)]
pub struct VirtualTerminal {
    width: i32,
    height: i32,
    cells: Vec<char>,
    cursor: (i32, i32),
    /// Number of characters written since creation
    pub chars_written: usize,
    /// Number of full-screen clears since creation
    pub clears: usize,
}

impl VirtualTerminal {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK_GLYPH; (width * height) as usize],
            cursor: (0, 0),
            chars_written: 0,
            clears: 0,
        }
    }

    /// Big enough for the board plus the stats row underneath it
    pub fn for_board() -> Self {
        Self::new(W, H + 1)
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if (0..self.width).contains(&col) && (0..self.height).contains(&row) {
            Some((row * self.width + col) as usize)
        } else {
            None
        }
    }

    /// Character at a cell, blank when out of range
    pub fn cell(&self, col: i32, row: i32) -> char {
        self.index(col, row)
            .map(|i| self.cells[i])
            .unwrap_or(BLANK_GLYPH)
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn row_text(&self, row: i32) -> String {
        (0..self.width).map(|col| self.cell(col, row)).collect()
    }

    /// Every row, top to bottom
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.row_text(row)).collect()
    }

    /// Positions of every occurrence of `glyph`
    pub fn find_all(&self, glyph: char) -> Vec<(i32, i32)> {
        let mut found = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cell(col, row) == glyph {
                    found.push((col, row));
                }
            }
        }
        found
    }
}

impl TerminalSink for VirtualTerminal {
    fn put_char(&mut self, c: char) {
        let (col, row) = self.cursor;
        if let Some(i) = self.index(col, row) {
            self.cells[i] = c;
        }
        self.cursor.0 += 1;
        self.chars_written += 1;
    }

    fn move_to(&mut self, col: i32, row: i32) {
        self.cursor = (col, row);
    }

    fn clear_screen(&mut self) {
        self.cells.fill(BLANK_GLYPH);
        self.clears += 1;
    }
}
