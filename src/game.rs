//! Match state machine
//!
//! Owns the game state and the three collaborators and runs one frame per
//! [`Match::step`]:
//!
//! 1. sample the input register
//! 2. tick the simulation (ball, opponent, player 1)
//! 3. erase stale cells, draw paddles, ball and HUD
//! 4. record the drawn positions as the new shadow
//! 5. write the score nibbles to the output register
//! 6. wait out the frame delay
//! 7. if someone reached the win score, show the banner, wait, reset the
//!    round and repaint the background
//!
//! There is no final state; [`Match::run`] never returns.

use crate::consts::*;
use crate::platform::{DigitalIo, FrameClock};
use crate::renderer::{TerminalSink, diff};
use crate::sim::{Buttons, GameEvent, GamePhase, GameState, Player, tick};

/// What happened during one call to [`Match::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame number shown on the stats line for this frame
    pub frame: u32,
    pub buttons: Buttons,
    pub events: Vec<GameEvent>,
    /// Set when this frame ended a round
    pub round_winner: Option<Player>,
}

impl FrameReport {
    pub fn scored(&self) -> Option<Player> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Scored(player) => Some(*player),
            _ => None,
        })
    }
}

pub struct Match<T, D, C> {
    state: GameState,
    sink: T,
    io: D,
    clock: C,
    frame_delay_ticks: u32,
    win_dwell_ticks: u32,
}

impl<T: TerminalSink, D: DigitalIo, C: FrameClock> Match<T, D, C> {
    pub fn new(state: GameState, sink: T, io: D, clock: C) -> Self {
        Self {
            state,
            sink,
            io,
            clock,
            frame_delay_ticks: FRAME_DELAY_TICKS,
            win_dwell_ticks: WIN_DWELL_TICKS,
        }
    }

    pub fn with_timing(mut self, frame_delay_ticks: u32, win_dwell_ticks: u32) -> Self {
        self.frame_delay_ticks = frame_delay_ticks;
        self.win_dwell_ticks = win_dwell_ticks;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &T {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }

    pub fn io(&self) -> &D {
        &self.io
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Bring up the outputs and paint the board once
    pub fn start(&mut self) {
        log::info!(
            "Match starting ({}x{} board, first to {})",
            W,
            H,
            WIN_SCORE
        );
        self.io.set_direction(OUTPUT_DIRECTION_MASK);
        self.io.write_output(0);
        diff::redraw_background(&mut self.sink);
        self.sink.flush();
    }

    /// Run a single frame, including the round-over sequence when it ends a round
    pub fn step(&mut self) -> FrameReport {
        debug_assert_eq!(self.state.phase, GamePhase::Playing);

        let buttons = Buttons::from_register(self.io.read_input());
        let events = tick(&mut self.state, buttons);

        for event in &events {
            if let GameEvent::Scored(player) = event {
                let flash = match player {
                    Player::One => FLASH_P1_SCORED,
                    Player::Two => FLASH_P2_SCORED,
                };
                self.io.write_output(flash);
            }
        }

        diff::draw_frame(&mut self.sink, &self.state);
        self.sink.flush();
        self.state.sync_shadow();

        self.io.write_output(self.state.output_register());

        let frame = self.state.frame;
        log::trace!(
            "frame {} ball=({}, {}) paddles=({}, {}) score={}-{}",
            frame,
            self.state.ball.x,
            self.state.ball.y,
            self.state.paddle1,
            self.state.paddle2,
            self.state.score1,
            self.state.score2
        );
        self.state.frame = frame.wrapping_add(1);
        self.clock.wait(self.frame_delay_ticks);

        let round_winner = self.state.winner();
        if let Some(winner) = round_winner {
            self.finish_round(winner);
        }

        FrameReport {
            frame,
            buttons,
            events,
            round_winner,
        }
    }

    fn finish_round(&mut self, winner: Player) {
        self.state.phase = GamePhase::RoundOver { winner };
        log::info!(
            "{:?} wins the round {} - {} at frame {}",
            winner,
            self.state.score1,
            self.state.score2,
            self.state.frame
        );
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&self.state) {
                log::trace!("Round end state: {}", json);
            }
        }

        diff::draw_banner(&mut self.sink, winner);
        self.sink.flush();
        self.io.write_output(FLASH_WIN);
        self.clock.wait(self.win_dwell_ticks);

        self.state.reset_round();
        diff::redraw_background(&mut self.sink);
        self.sink.flush();
        log::debug!("Round reset, serving from the center");
    }

    /// Play forever
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// Play until `keep_going` returns false; returns the number of frames run.
    /// `start` must already have been called.
    pub fn run_until(&mut self, mut keep_going: impl FnMut(&mut Self) -> bool) -> u64 {
        let mut frames = 0;
        while keep_going(self) {
            self.step();
            frames += 1;
        }
        frames
    }
}
