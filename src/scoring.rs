//! Score and countdown deltas for match outcomes.
//!
//! Everything random goes through the injected source so tests can pin the values.

use crate::rng::RandomSource;

/// Countdown start and ceiling, in seconds.
pub const MAX_TIMER_SECS: f64 = 30.0;

/// Tunable parts of the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Countdown ceiling; also the value a new session starts from.
    pub max_timer: f64,
    /// Bomb reach: radius 1 clears a 3x3 square.
    pub bomb_radius: usize,
    /// Also charge the wrong-tap penalty when a bomb with fewer than three
    /// connected bombs goes off.
    pub penalize_lonely_bomb: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            max_timer: MAX_TIMER_SECS,
            bomb_radius: 1,
            penalize_lonely_bomb: false,
        }
    }
}

/// Change to apply to score and countdown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deltas {
    pub score: i64,
    pub timer: f64,
}

impl std::ops::Add for Deltas {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            score: self.score + rhs.score,
            timer: self.timer + rhs.timer,
        }
    }
}

/// Remove / merge: `+n` points and up to `n * 5` seconds.
pub fn reward(n: usize, rng: &mut dyn RandomSource) -> Deltas {
    Deltas {
        score: n as i64,
        timer: rng.unit() * n as f64 * 5.0,
    }
}

/// Matched hazards: lose up to 10 points and up to `n * 5` seconds.
pub fn hazard_penalty(n: usize, rng: &mut dyn RandomSource) -> Deltas {
    Deltas {
        score: -((rng.unit() * 10.0).round() as i64),
        timer: -(rng.unit() * n as f64 * 5.0),
    }
}

/// Tap on a group too small to clear: lose up to 10 points and up to 5 seconds.
pub fn wrong_tap_penalty(rng: &mut dyn RandomSource) -> Deltas {
    Deltas {
        timer: -(rng.unit() * 5.0),
        score: -((rng.unit() * 10.0).round() as i64),
    }
}

/// Bomb: up to 50 points, plus `1..=(2r+1)^2` whole seconds.
pub fn detonation_bonus(radius: usize, rng: &mut dyn RandomSource) -> Deltas {
    let score = (rng.unit() * 50.0).round() as i64;
    let side = radius.saturating_mul(2).saturating_add(1);
    let area = side.saturating_mul(side);
    let timer = (rng.below(area) + 1) as f64;
    Deltas { score, timer }
}

/// Apply a timer delta; increases are capped at `max`, decreases may go negative.
pub fn apply_timer(timer: f64, delta: f64, max: f64) -> f64 {
    let next = timer + delta;
    if delta > 0.0 { next.min(max) } else { next }
}
