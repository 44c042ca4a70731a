//! UART Pong entry point
//!
//! Runs the match on the local terminal. Player 1 uses `w`/`s` or the arrow
//! keys; `q`, Esc or Ctrl-C quits. Logs go to stderr.

use std::io::{self, BufWriter, Stdout};

use uart_pong::consts::H;
use uart_pong::platform::{CrosstermIo, FrameClock, HostError, RawModeGuard, SleepClock, SpinClock};
use uart_pong::renderer::{AnsiTerminal, TerminalSink};
use uart_pong::sim::GameState;
use uart_pong::{ClockKind, Match, Settings};

type HostTerminal = AnsiTerminal<BufWriter<Stdout>>;

fn main() -> Result<(), HostError> {
    env_logger::init();
    log::info!("UART Pong (native) starting...");

    let settings = Settings::load();
    log::info!("Game initialized with seed: {}", settings.seed);

    let _guard = RawModeGuard::enable()?;
    let sink = AnsiTerminal::new(BufWriter::new(io::stdout()));
    let io = CrosstermIo::new();

    match settings.clock {
        ClockKind::Sleep => play(&settings, sink, io, SleepClock::new(settings.tick())),
        ClockKind::Spin => play(&settings, sink, io, SpinClock::new(settings.spins_per_tick)),
    }
}

fn play<C: FrameClock>(
    settings: &Settings,
    sink: HostTerminal,
    io: CrosstermIo,
    clock: C,
) -> Result<(), HostError> {
    let mut game = Match::new(GameState::new(settings.seed), sink, io, clock)
        .with_timing(settings.frame_delay_ticks, settings.win_dwell_ticks);

    game.start();

    let mut failure = None;
    let mut played = 0u64;
    let frames = game.run_until(|game| {
        if let Some(e) = game.sink_mut().take_error() {
            failure = Some(e);
            return false;
        }
        if game.io().quit_requested() {
            return false;
        }
        let more = settings.max_frames.is_none_or(|max| played < max);
        played += 1;
        more
    });

    // Leave the shell prompt below the board
    game.sink_mut().move_to(0, H + 1);
    game.sink_mut().put_str("\r\n");
    game.sink_mut().flush();

    log::info!(
        "Stopped after {} frames at {} - {}",
        frames,
        game.state().score1,
        game.state().score2
    );

    match failure {
        Some(e) => Err(HostError::Terminal(e)),
        None => Ok(()),
    }
}
