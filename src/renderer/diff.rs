//! Minimal-redraw rendering
//!
//! The border and center line are painted once per round. Each frame only
//! touches the cells that changed: stale ball and paddle cells are erased,
//! then paddles, ball and the HUD are drawn, always in that order.

use super::TerminalSink;
use crate::consts::*;
use crate::sim::{GameState, Player};

/// Column where the output register readout starts on the stats row
pub const REGISTER_COL: i32 = W - 14;

/// Width of the frame counter field, enough for any `u32`
const FRAME_FIELD_WIDTH: usize = 10;

/// What belongs in a cell when nothing is drawn over it
pub fn background_glyph(col: i32) -> char {
    if col == CENTER_COL {
        CENTER_GLYPH
    } else {
        BLANK_GLYPH
    }
}

/// Paint the border and the center line
pub fn draw_board<T: TerminalSink + ?Sized>(sink: &mut T) {
    draw_horizontal_edge(sink, 0);

    for row in 1..H - 1 {
        sink.move_to(0, row);
        sink.put_char(VERTICAL_GLYPH);
        sink.move_to(W - 1, row);
        sink.put_char(VERTICAL_GLYPH);
    }

    draw_horizontal_edge(sink, H - 1);

    for row in 1..H - 1 {
        sink.move_to(CENTER_COL, row);
        sink.put_char(CENTER_GLYPH);
    }
}

fn draw_horizontal_edge<T: TerminalSink + ?Sized>(sink: &mut T, row: i32) {
    sink.move_to(0, row);
    sink.put_char(CORNER_GLYPH);
    for _ in 0..W - 2 {
        sink.put_char(HORIZONTAL_GLYPH);
    }
    sink.put_char(CORNER_GLYPH);
}

/// Clear the screen and repaint the static background
pub fn redraw_background<T: TerminalSink + ?Sized>(sink: &mut T) {
    sink.clear_screen();
    draw_board(sink);
}

fn blank_paddle<T: TerminalSink + ?Sized>(sink: &mut T, col: i32, top: i32) {
    for row in top..top + PH {
        if row > 0 && row < H - 1 {
            sink.move_to(col, row);
            sink.put_char(BLANK_GLYPH);
        }
    }
}

/// Erase whatever moved since the shadow positions were drawn
pub fn erase_stale<T: TerminalSink + ?Sized>(sink: &mut T, state: &GameState) {
    let shadow = state.shadow;

    if (shadow.ball_x, shadow.ball_y) != (state.ball.x, state.ball.y) {
        sink.move_to(shadow.ball_x, shadow.ball_y);
        sink.put_char(background_glyph(shadow.ball_x));
    }

    if shadow.paddle1 != state.paddle1 {
        blank_paddle(sink, P1_COL, shadow.paddle1);
    }
    if shadow.paddle2 != state.paddle2 {
        blank_paddle(sink, P2_COL, shadow.paddle2);
    }
}

/// Draw both paddles, then the ball on top
pub fn draw_entities<T: TerminalSink + ?Sized>(sink: &mut T, state: &GameState) {
    for i in 0..PH {
        for (col, top) in [(P1_COL, state.paddle1), (P2_COL, state.paddle2)] {
            let row = top + i;
            if row > 0 && row < H - 1 {
                sink.move_to(col, row);
                sink.put_char(PADDLE_GLYPH);
            }
        }
    }

    sink.move_to(state.ball.x, state.ball.y);
    sink.put_char(BALL_GLYPH);
}

/// Score line on the top border, frame counter and output register below the board
pub fn draw_hud<T: TerminalSink + ?Sized>(sink: &mut T, state: &GameState) {
    sink.move_to(CENTER_COL - 3, 0);
    sink.put_char(' ');
    sink.put_decimal(state.score1);
    sink.put_str(" - ");
    sink.put_decimal(state.score2);
    sink.put_char(' ');

    sink.move_to(0, H);
    sink.put_str("F:");
    // Left-aligned and padded so a shorter number covers a longer one
    sink.put_fmt(format_args!("{:<width$}", state.frame, width = FRAME_FIELD_WIDTH));

    sink.move_to(REGISTER_COL, H);
    sink.put_str("LED:");
    sink.put_hex(state.output_register());
}

/// Win banner across the middle of the board
pub fn draw_banner<T: TerminalSink + ?Sized>(sink: &mut T, winner: Player) {
    sink.move_to(CENTER_COL - 5, CENTER_ROW);
    sink.put_str(winner.banner());
}

/// One frame of differential drawing
pub fn draw_frame<T: TerminalSink + ?Sized>(sink: &mut T, state: &GameState) {
    erase_stale(sink, state);
    draw_entities(sink, state);
    draw_hud(sink, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VirtualTerminal;
    use crate::sim::Ball;

    #[test]
    fn test_board_layout() {
        let mut term = VirtualTerminal::for_board();
        redraw_background(&mut term);
        let lines = term.lines();
        assert_eq!(lines[0], format!("+{}+", "-".repeat(30)));
        assert_eq!(lines[(H - 1) as usize], lines[0]);
        for row in 1..H - 1 {
            let line = &lines[row as usize];
            assert!(line.starts_with('|') && line.ends_with('|'));
            assert_eq!(term.cell(CENTER_COL, row), ':');
        }
    }

    #[test]
    fn test_erase_restores_center_line() {
        let mut term = VirtualTerminal::for_board();
        redraw_background(&mut term);
        let mut state = GameState::default();
        draw_entities(&mut term, &state);
        assert_eq!(term.cell(CENTER_COL, CENTER_ROW), BALL_GLYPH);

        state.ball = Ball { x: 17, y: 7, dx: 1, dy: 1 };
        erase_stale(&mut term, &state);
        assert_eq!(term.cell(CENTER_COL, CENTER_ROW), CENTER_GLYPH);
    }

    #[test]
    fn test_unmoved_entities_are_not_erased() {
        let mut term = VirtualTerminal::for_board();
        let state = GameState::default();
        erase_stale(&mut term, &state);
        assert_eq!(term.chars_written, 0);
    }

    #[test]
    fn test_moved_paddle_blanks_old_rows() {
        let mut term = VirtualTerminal::for_board();
        redraw_background(&mut term);
        let mut state = GameState::default();
        draw_entities(&mut term, &state);
        state.sync_shadow();

        state.paddle1 = 1;
        erase_stale(&mut term, &state);
        for row in 5..8 {
            assert_eq!(term.cell(P1_COL, row), BLANK_GLYPH);
        }
        // Right paddle did not move and is left alone
        assert_eq!(term.cell(P2_COL, 5), PADDLE_GLYPH);
    }

    #[test]
    fn test_hud_text() {
        let mut term = VirtualTerminal::for_board();
        let mut state = GameState::default();
        state.score1 = 2;
        state.score2 = 3;
        state.frame = 42;
        draw_hud(&mut term, &state);
        assert_eq!(&term.row_text(0)[13..20], " 2 - 3 ");
        let stats = term.row_text(H);
        assert!(stats.starts_with("F:42 "));
        assert_eq!(&stats[REGISTER_COL as usize..], "LED:0x00000023");
    }

    #[test]
    fn test_frame_counter_wrap_leaves_no_digits() {
        let mut term = VirtualTerminal::for_board();
        let mut state = GameState::default();
        state.frame = u32::MAX;
        draw_hud(&mut term, &state);
        assert!(term.row_text(H).starts_with("F:4294967295"));

        state.frame = state.frame.wrapping_add(1);
        draw_hud(&mut term, &state);
        let stats = term.row_text(H);
        assert_eq!(&stats[..2 + FRAME_FIELD_WIDTH], "F:0         ");
    }

    #[test]
    fn test_banner_text() {
        let mut term = VirtualTerminal::for_board();
        draw_banner(&mut term, Player::Two);
        assert_eq!(&term.row_text(CENTER_ROW)[11..21], " P2 WINS! ");
    }
}
