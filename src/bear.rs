//! Iceberg-jump mini-game: a bear hops across an ice flow against the clock.
//!
//! Runs its own phase machine; shares nothing with the match game but the driver.

use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Backward,
    Forward,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Backward, Self::Forward, Self::Right];

    /// Unit step in field coordinates; forward is towards the far edge (+y).
    fn unit(self) -> (f64, f64) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Backward => (0.0, -1.0),
            Self::Forward => (0.0, 1.0),
            Self::Right => (1.0, 0.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Backward => "back",
            Self::Forward => "forward",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfLives,
    OutOfTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearPhase {
    Initialised,
    Instructions,
    Ready,
    Jumping(Direction),
    GameOver(GameOverReason),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearConfig {
    pub lives: u32,
    pub duration_secs: f64,
    /// Jump speed in px/s along each axis.
    pub jump_speed_x: f64,
    pub jump_speed_y: f64,
    pub jump_secs: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub field_width: f64,
    pub field_height: f64,
}

/// Iceberg spacing in px: one jump covers one column or one row.
const ICEBERG_COL: f64 = 160.0;
const ICEBERG_ROW: f64 = 105.0;
/// Animation frames in a jump.
const JUMP_FRAMES: f64 = 11.0;

impl BearConfig {
    /// Jump timing for a given animation frame rate; the distance covered stays one iceberg.
    pub fn with_frame_rate(fps: u32) -> Self {
        let fps = f64::from(fps.max(1));
        Self {
            lives: 2,
            duration_secs: 10.0,
            jump_speed_x: ICEBERG_COL * fps / JUMP_FRAMES,
            jump_speed_y: ICEBERG_ROW * fps / JUMP_FRAMES,
            jump_secs: JUMP_FRAMES / fps,
            start_x: 170.0,
            start_y: 100.0,
            field_width: 640.0,
            field_height: 413.0,
        }
    }
}

impl Default for BearConfig {
    fn default() -> Self {
        Self::with_frame_rate(25)
    }
}

#[derive(Debug, Clone)]
pub struct BearGame {
    config: BearConfig,
    phase: BearPhase,
    x: f64,
    y: f64,
    lives: u32,
    level: u32,
    elapsed: f64,
    jump_elapsed: f64,
}

impl BearGame {
    pub fn new(config: BearConfig) -> Self {
        Self {
            config,
            phase: BearPhase::Initialised,
            x: config.start_x,
            y: config.start_y,
            lives: config.lives,
            level: 1,
            elapsed: 0.0,
            jump_elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &BearConfig {
        &self.config
    }

    pub fn phase(&self) -> BearPhase {
        self.phase
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Seconds left on the clock, never negative.
    pub fn remaining(&self) -> f64 {
        (self.config.duration_secs - self.elapsed).max(0.0)
    }

    fn is_playing(&self) -> bool {
        matches!(self.phase, BearPhase::Ready | BearPhase::Jumping(_))
    }

    /// Screens advance on any tap. In `Ready` a direction starts a jump.
    pub fn tap(&mut self, direction: Option<Direction>) {
        match self.phase {
            BearPhase::Initialised => self.phase = BearPhase::Instructions,
            BearPhase::Instructions => {
                self.elapsed = 0.0;
                self.phase = BearPhase::Ready;
            }
            BearPhase::GameOver(_) => self.restart(),
            BearPhase::Complete => self.next_level(),
            BearPhase::Ready => {
                if let Some(dir) = direction {
                    debug!(?dir, x = self.x, y = self.y, "jump");
                    self.jump_elapsed = 0.0;
                    self.phase = BearPhase::Jumping(dir);
                }
            }
            BearPhase::Jumping(_) => {}
        }
    }

    pub fn tick(&mut self, dt: f64) {
        if !self.is_playing() {
            return;
        }
        let dt = dt.max(0.0);
        self.elapsed += dt;
        if self.elapsed > self.config.duration_secs {
            info!(lives = self.lives, "bear out of time");
            self.phase = BearPhase::GameOver(GameOverReason::OutOfTime);
            return;
        }

        let BearPhase::Jumping(dir) = self.phase else {
            return;
        };
        let step = dt.min(self.config.jump_secs - self.jump_elapsed).max(0.0);
        let (ux, uy) = dir.unit();
        self.x += ux * self.config.jump_speed_x * step;
        self.y += uy * self.config.jump_speed_y * step;
        self.jump_elapsed += dt;
        if self.jump_elapsed >= self.config.jump_secs {
            self.land();
        }
    }

    fn land(&mut self) {
        let c = self.config;
        self.phase = BearPhase::Ready;
        if self.y >= c.field_height {
            info!(elapsed = self.elapsed, "ice flow crossed");
            self.phase = BearPhase::Complete;
        } else if self.x < 0.0 || self.x > c.field_width || self.y < 0.0 {
            self.lives = self.lives.saturating_sub(1);
            info!(lives = self.lives, "bear fell in");
            self.x = c.start_x;
            self.y = c.start_y;
            if self.lives == 0 {
                self.phase = BearPhase::GameOver(GameOverReason::OutOfLives);
            }
        }
    }

    /// Back to the start of the flow one level up; lives carry over.
    fn next_level(&mut self) {
        self.level += 1;
        self.reset_run();
        info!(level = self.level, lives = self.lives, "bear next level");
    }

    fn reset_run(&mut self) {
        let c = self.config;
        self.elapsed = 0.0;
        self.jump_elapsed = 0.0;
        self.x = c.start_x;
        self.y = c.start_y;
        self.phase = BearPhase::Ready;
    }

    pub fn restart(&mut self) {
        self.level = 1;
        self.lives = self.config.lives;
        self.reset_run();
        info!("bear restarted");
    }
}
