//! Bloomtui: tile-matching puzzle in the terminal. Tap groups of three or more before
//! the clock runs out.

mod app;
mod bear;
mod error;
mod game;
mod grid;
mod input;
mod matching;
mod rng;
mod scoring;
mod theme;
mod tile;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, ValueEnum};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Largest board the CLI accepts; anything above is clamped.
pub const MAX_ROWS: u16 = 24;
pub const MAX_COLS: u16 = 32;
/// A radius this large already covers every `MAX_ROWS` x `MAX_COLS` board.
pub const MAX_BOMB_RADIUS: usize = MAX_COLS as usize;

/// Session options that shape the match game (board size, clock, scoring rules).
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub time_limit: f64,
    pub seed: Option<u64>,
    pub bomb_radius: usize,
    pub penalize_lonely_bomb: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 10,
            time_limit: scoring::MAX_TIMER_SECS,
            seed: None,
            bomb_radius: 1,
            penalize_lonely_bomb: false,
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        Self {
            rows: usize::from(args.rows.clamp(1, MAX_ROWS)),
            cols: usize::from(args.cols.clamp(1, MAX_COLS)),
            time_limit: args.time_limit.max(1.0),
            seed: args.seed,
            bomb_radius: args.bomb_radius.min(MAX_BOMB_RADIUS),
            penalize_lonely_bomb: args.penalize_lonely_bomb,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.verbose)?;
    let theme = theme::Theme::load(args.theme.as_deref(), args.palette).unwrap_or_default();
    let config = GameConfig::from(&args);
    tracing::info!(?config, mode = ?args.mode, "starting");
    let mut app = App::new(args, config, theme)?;
    app.run()?;
    Ok(())
}

/// The terminal belongs to the UI, so events only go to a file, and only when asked for.
fn init_logging(path: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .init();
    Ok(())
}

/// Tile-matching puzzle against the clock.
#[derive(Debug, Parser)]
#[command(
    name = "bloomtui",
    version,
    about = "Tile-matching puzzle in the terminal. Tap groups of three or more matching tiles before time runs out.",
    long_about = "Bloomtui is a terminal tile-matching game.\n\n\
        Click (or move the cursor and press Enter) on a tile to clear its group of same-kind \
        neighbours. Three or more clear and buy time; five or more leave a bomb that clears \
        everything around it. Tapping a lone tile or a group of rocks costs points and time.\n\n\
        CONTROLS:\n  Mouse click  Tap tile     Arrows / hjkl  Move cursor\n  Enter/Space  Tap cursor   P  Pause   Q / Esc  Quit\n\n\
        ICEBERG MODE (--mode bear):\n  Left/Right  Jump sideways    Up  Jump back    Down  Jump forward"
)]
pub struct Args {
    /// Game: match (tile puzzle) or bear (iceberg-jump mini-game).
    #[arg(short, long, default_value = "match")]
    pub mode: GameMode,

    /// Board rows (at most 24).
    #[arg(long, default_value = "9", value_name = "ROWS")]
    pub rows: u16,

    /// Board columns (at most 32).
    #[arg(long, default_value = "10", value_name = "COLS")]
    pub cols: u16,

    /// Countdown start and ceiling, in seconds.
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub time_limit: f64,

    /// Seed for the random source; same seed, same boards.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Bomb reach in cells (1 clears a 3x3 square).
    #[arg(long, default_value = "1", value_name = "N")]
    pub bomb_radius: usize,

    /// Also charge the wrong-tap penalty for a bomb tapped with fewer than three bombs connected.
    #[arg(long)]
    pub penalize_lonely_bomb: bool,

    /// Game ticks per second.
    #[arg(long, default_value = "25", value_name = "RATE")]
    pub frame_rate: u32,

    /// Skip the instruction screens and start straight away.
    #[arg(long)]
    pub skip_instructions: bool,

    /// Path to theme file (btop-style theme[key]=\"value\"). Uses One Dark if not set.
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<std::path::PathBuf>,

    /// Colour palette: normal (theme), high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,

    /// Write events to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<std::path::PathBuf>,

    /// Include debug events (taps, phase changes) in the log.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameMode {
    #[default]
    Match,
    #[value(alias = "iceberg")]
    Bear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_match_default_config() {
        let args = Args::parse_from(["bloomtui"]);
        let config = GameConfig::from(&args);
        let default = GameConfig::default();
        assert_eq!(config.rows, default.rows);
        assert_eq!(config.cols, default.cols);
        assert_eq!(config.time_limit, default.time_limit);
        assert_eq!(config.bomb_radius, default.bomb_radius);
        assert!(!config.penalize_lonely_bomb);
        assert_eq!(args.mode, GameMode::Match);
    }

    #[test]
    fn degenerate_sizes_are_clamped() {
        let args = Args::parse_from([
            "bloomtui",
            "--rows",
            "0",
            "--cols",
            "3",
            "--time-limit",
            "0",
            "--seed",
            "5",
            "--mode",
            "bear",
        ]);
        let config = GameConfig::from(&args);
        assert_eq!(config.rows, 1);
        assert_eq!(config.cols, 3);
        assert_eq!(config.time_limit, 1.0);
        assert_eq!(config.seed, Some(5));
        assert_eq!(args.mode, GameMode::Bear);
    }

    #[test]
    fn oversized_board_and_radius_are_clamped() {
        let args = Args::parse_from([
            "bloomtui",
            "--rows",
            "65535",
            "--cols",
            "20000",
            "--bomb-radius",
            "1099511627776",
        ]);
        let config = GameConfig::from(&args);
        assert_eq!(config.rows, usize::from(MAX_ROWS));
        assert_eq!(config.cols, usize::from(MAX_COLS));
        assert_eq!(config.bomb_radius, MAX_BOMB_RADIUS);
    }
}
