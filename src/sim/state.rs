//! Game state and core simulation types
//!
//! One owned aggregate holds everything a frame reads or writes.

use serde::{Deserialize, Serialize};

use super::rng::ServeRng;
use crate::consts::*;

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle, keyboard / input register controlled
    One,
    /// Right paddle, driven by the opponent controller
    Two,
}

impl Player {
    /// Win banner text, padded so it clears the cells around it
    pub fn banner(&self) -> &'static str {
        match self {
            Player::One => " P1 WINS! ",
            Player::Two => " P2 WINS! ",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal frame stepping
    Playing,
    /// Win banner on screen, waiting for the dwell to elapse
    RoundOver { winner: Player },
}

/// Something observable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball returned by a paddle
    PaddleHit(Player),
    /// A point was awarded and the ball served from the center
    Scored(Player),
    /// Opponent cadence gate opened this frame
    OpponentActed,
}

/// The ball, in grid cells with a unit velocity per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Ball {
    pub fn centered(dx: i32, dy: i32) -> Self {
        Self {
            x: CENTER_COL,
            y: CENTER_ROW,
            dx,
            dy,
        }
    }
}

/// Positions as rendered on the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadow {
    pub ball_x: i32,
    pub ball_y: i32,
    pub paddle1: i32,
    pub paddle2: i32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Top row of the left paddle
    pub paddle1: i32,
    /// Top row of the right paddle
    pub paddle2: i32,
    pub score1: u32,
    pub score2: u32,
    /// Frame counter, wraps at u32::MAX
    pub frame: u32,
    pub shadow: Shadow,
    pub phase: GamePhase,
    /// Serve RNG
    pub rng: ServeRng,
}

impl GameState {
    /// Create a fresh match: ball and paddles centered, scores zero
    pub fn new(seed: u32) -> Self {
        let ball = Ball::centered(1, 1);
        let paddle = H / 2 - 1;
        Self {
            ball,
            paddle1: paddle,
            paddle2: paddle,
            score1: 0,
            score2: 0,
            frame: 0,
            shadow: Shadow {
                ball_x: ball.x,
                ball_y: ball.y,
                paddle1: paddle,
                paddle2: paddle,
            },
            phase: GamePhase::Playing,
            rng: ServeRng::new(seed),
        }
    }

    /// Record the current positions as the previously rendered ones
    pub fn sync_shadow(&mut self) {
        self.shadow = Shadow {
            ball_x: self.ball.x,
            ball_y: self.ball.y,
            paddle1: self.paddle1,
            paddle2: self.paddle2,
        };
    }

    pub fn award_point(&mut self, player: Player) {
        match player {
            Player::One => self.score1 += 1,
            Player::Two => self.score2 += 1,
        }
    }

    /// First side to reach the win score, player 1 checked first
    pub fn winner(&self) -> Option<Player> {
        if self.score1 >= WIN_SCORE {
            Some(Player::One)
        } else if self.score2 >= WIN_SCORE {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Move the ball back to the board center, keeping its velocity
    pub fn recenter_ball(&mut self) {
        self.ball.x = CENTER_COL;
        self.ball.y = CENTER_ROW;
    }

    /// Start a new round after a win: scores zeroed, ball recentered.
    ///
    /// The ball shadow follows the ball because the screen is about to be
    /// cleared; there is no stale ball glyph left to erase.
    pub fn reset_round(&mut self) {
        self.score1 = 0;
        self.score2 = 0;
        self.recenter_ball();
        self.shadow.ball_x = self.ball.x;
        self.shadow.ball_y = self.ball.y;
        self.phase = GamePhase::Playing;
    }

    /// Output register value encoding both scores as nibbles
    pub fn output_register(&self) -> u32 {
        (self.score1 << 4) | (self.score2 & 0x0F)
    }

    /// Assert the frame-boundary invariants (debug builds only)
    pub fn check_invariants(&self) {
        debug_assert!(
            (1..=H - 2).contains(&self.ball.y),
            "ball row {} outside board",
            self.ball.y
        );
        debug_assert!(self.ball.dy != 0, "ball lost its vertical velocity");
        debug_assert!(self.ball.dx == 1 || self.ball.dx == -1);
        debug_assert!((PADDLE_MIN..=PADDLE_MAX).contains(&self.paddle1));
        debug_assert!((PADDLE_MIN..=PADDLE_MAX).contains(&self.paddle2));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
