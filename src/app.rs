//! App: terminal init, main loop, tick and input dispatch.

use crate::bear::{BearConfig, BearGame, Direction as Jump};
use crate::game::{Cue, GameState, Phase};
use crate::input::{Action, key_to_action, mouse_click};
use crate::theme::Theme;
use crate::{Args, GameConfig, GameMode};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tachyonfx::Effect;
use tracing::{debug, info};

pub struct App {
    mode: GameMode,
    theme: Theme,
    state: GameState,
    bear: BearGame,
    paused: bool,
    /// Keyboard cursor (row, col).
    cursor: (usize, usize),
    last_cue: Option<Cue>,
    tick_interval: Duration,
    last_tick: Instant,
    /// Terminal area of the last frame, for mouse hit tests.
    area: Rect,
    /// TachyonFX fade over dying tiles (created when a removal wave starts).
    removal_effect: Option<Effect>,
    removal_effect_time: Option<Instant>,
}

impl App {
    pub fn new(args: Args, config: GameConfig, theme: Theme) -> Result<Self> {
        let mut state = GameState::new(&config);
        let mut bear = BearGame::new(BearConfig::with_frame_rate(args.frame_rate));
        if args.skip_instructions {
            state.tick(0.0)?;
            state.handle_tap(None)?;
            state.handle_tap(None)?;
            bear.tap(None);
            bear.tap(None);
        }
        Ok(Self {
            mode: args.mode,
            theme,
            state,
            bear,
            paused: false,
            cursor: (0, 0),
            last_cue: None,
            tick_interval: Duration::from_secs_f64(1.0 / f64::from(args.frame_rate.max(1))),
            last_tick: Instant::now(),
            area: Rect::default(),
            removal_effect: None,
            removal_effect_time: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            event::{DisableMouseCapture, EnableMouseCapture},
            execute,
            terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let mut terminal =
            ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        let result = self.run_loop(&mut terminal);

        // Restore
        execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            let now = Instant::now();
            terminal.draw(|f| {
                self.area = f.area();
                match self.mode {
                    GameMode::Match => crate::ui::draw_match(
                        f,
                        &self.state,
                        &self.theme,
                        self.cursor,
                        self.paused,
                        self.last_cue,
                        &mut self.removal_effect,
                        &mut self.removal_effect_time,
                        now,
                    ),
                    GameMode::Bear => crate::ui::draw_bear(f, &self.bear, &self.theme, self.paused),
                }
            })?;

            let timeout = self.tick_interval.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                while event::poll(Duration::ZERO)? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if self.handle_action(key_to_action(key))? {
                                return Ok(());
                            }
                        }
                        Event::Mouse(mouse) => {
                            if let Some((column, row)) = mouse_click(mouse) {
                                self.handle_click(column, row)?;
                            }
                        }
                        _ => {}
                    }
                }
            }

            let elapsed = self.last_tick.elapsed();
            if elapsed >= self.tick_interval {
                self.last_tick = Instant::now();
                if !self.paused {
                    self.step(elapsed.as_secs_f64())?;
                }
            }
        }
    }

    /// Advance the active game by `dt` seconds and collect its cues.
    fn step(&mut self, dt: f64) -> Result<()> {
        match self.mode {
            GameMode::Match => {
                self.state.tick(dt)?;
                for cue in self.state.drain_cues() {
                    info!(?cue, outcome = ?self.state.last_outcome(), score = self.state.score(), "cue");
                    self.last_cue = Some(cue);
                }
                if self.state.phase() != Phase::Removing {
                    self.removal_effect = None;
                    self.removal_effect_time = None;
                }
            }
            GameMode::Bear => self.bear.tick(dt),
        }
        Ok(())
    }

    fn can_pause(&self) -> bool {
        match self.mode {
            GameMode::Match => !self.state.phase().is_overlay(),
            GameMode::Bear => matches!(
                self.bear.phase(),
                crate::bear::BearPhase::Ready | crate::bear::BearPhase::Jumping(_)
            ),
        }
    }

    /// Returns true when the app should quit.
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Pause if self.paused => self.paused = false,
            Action::Pause if self.can_pause() => self.paused = true,
            _ if self.paused => {}
            _ => match self.mode {
                GameMode::Match => self.match_action(action)?,
                GameMode::Bear => self.bear_action(action),
            },
        }
        Ok(false)
    }

    fn match_action(&mut self, action: Action) -> Result<()> {
        let grid = self.state.grid();
        let (rows, cols) = (grid.rows(), grid.cols());
        let (row, col) = self.cursor;
        match action {
            Action::Up => self.cursor.0 = row.saturating_sub(1),
            Action::Down => self.cursor.0 = (row + 1).min(rows.saturating_sub(1)),
            Action::Left => self.cursor.1 = col.saturating_sub(1),
            Action::Right => self.cursor.1 = (col + 1).min(cols.saturating_sub(1)),
            Action::Tap => self.state.handle_tap(Some(self.cursor))?,
            Action::Pause | Action::Quit | Action::None => {}
        }
        Ok(())
    }

    fn bear_action(&mut self, action: Action) {
        let jump = match action {
            Action::Left => Some(Jump::Left),
            Action::Right => Some(Jump::Right),
            Action::Up => Some(Jump::Backward),
            Action::Down => Some(Jump::Forward),
            Action::Tap => None,
            Action::Pause | Action::Quit | Action::None => return,
        };
        self.bear.tap(jump);
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        match self.mode {
            GameMode::Match => {
                let hit = crate::ui::board_hit(self.area, self.state.grid(), column, row);
                debug!(column, row, ?hit, "click");
                if let Some(cell) = hit {
                    self.cursor = cell;
                }
                self.state.handle_tap(hit)?;
            }
            GameMode::Bear => {
                let jump = crate::ui::bear_button_hit(self.area, &self.bear, column, row);
                self.bear.tap(jump);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bear::BearPhase;
    use clap::Parser;

    fn app(extra: &[&str]) -> App {
        let mut argv = vec!["bloomtui", "--seed", "3", "--skip-instructions"];
        argv.extend_from_slice(extra);
        let args = Args::parse_from(argv);
        let config = GameConfig::from(&args);
        App::new(args, config, Theme::default()).unwrap()
    }

    #[test]
    fn skip_instructions_starts_spawning() {
        let app = app(&[]);
        assert_eq!(app.state.phase(), Phase::Spawning);
        assert_eq!(app.bear.phase(), BearPhase::Ready);
    }

    #[test]
    fn cursor_stays_on_board() {
        let mut app = app(&["--rows", "3", "--cols", "2"]);
        for _ in 0..5 {
            app.handle_action(Action::Down).unwrap();
            app.handle_action(Action::Right).unwrap();
        }
        assert_eq!(app.cursor, (2, 1));
        for _ in 0..5 {
            app.handle_action(Action::Up).unwrap();
            app.handle_action(Action::Left).unwrap();
        }
        assert_eq!(app.cursor, (0, 0));
    }

    #[test]
    fn quit_and_pause() {
        let mut app = app(&[]);
        assert!(app.handle_action(Action::Quit).unwrap());
        assert!(!app.handle_action(Action::Pause).unwrap());
        assert!(app.paused);
        app.handle_action(Action::Down).unwrap();
        assert_eq!(app.cursor, (0, 0));
        app.handle_action(Action::Pause).unwrap();
        assert!(!app.paused);
    }

    #[test]
    fn no_pause_on_instruction_screens() {
        let args = Args::parse_from(["bloomtui", "--seed", "1"]);
        let config = GameConfig::from(&args);
        let mut app = App::new(args, config, Theme::default()).unwrap();
        app.handle_action(Action::Pause).unwrap();
        assert!(!app.paused);
    }

    #[test]
    fn ticks_reach_ready() {
        let mut app = app(&[]);
        app.step(0.6).unwrap();
        assert_eq!(app.state.phase(), Phase::Ready);
        assert!(app.removal_effect.is_none());
    }

    #[test]
    fn bear_arrows_jump() {
        let mut app = app(&["--mode", "bear"]);
        app.handle_action(Action::Down).unwrap();
        assert_eq!(app.bear.phase(), BearPhase::Jumping(Jump::Forward));
        app.step(0.5).unwrap();
        assert_eq!(app.bear.phase(), BearPhase::Ready);
        let (_, y) = app.bear.position();
        assert!(y > 200.0);
    }
}
