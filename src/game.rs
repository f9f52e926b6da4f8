//! Game state: phase machine, countdown, tap dispatch and cues.
//!
//! The driver calls `tick` once per frame with the elapsed seconds and forwards taps to
//! `handle_tap`. Nothing here schedules itself.

use crate::error::GameError;
use crate::grid::{Grid, GridGeometry};
use crate::matching::{self, MIN_MATCH, Match, Outcome};
use crate::rng::{GameRng, RandomSource};
use crate::scoring::{self, Deltas, ScoringPolicy};
use crate::tile::{Tile, TileId, TilePalette, TileTimings};
use tracing::{debug, error, info, warn};

/// Shuffles tried before accepting a board with no available match.
const RESHUFFLE_ATTEMPTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Instructions1,
    Instructions2,
    Spawning,
    Ready,
    Removing,
    Dropping,
    GameOver,
}

impl Phase {
    /// Screens where the board is frozen behind an overlay.
    pub fn is_overlay(self) -> bool {
        matches!(
            self,
            Self::Init | Self::Instructions1 | Self::Instructions2 | Self::GameOver
        )
    }

    /// Phase a tap moves to, for phases where taps only navigate screens.
    fn after_tap(self) -> Option<Self> {
        match self {
            Self::Instructions1 => Some(Self::Instructions2),
            Self::Instructions2 | Self::GameOver => Some(Self::Spawning),
            _ => None,
        }
    }
}

/// Notifications for the sound side; drained by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    MatchSucceeded,
    MatchFailed,
    TilesDropped,
    BombDetonated,
}

#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    phase: Phase,
    score: i64,
    /// Countdown in seconds; may go negative after a penalty.
    timer: f64,
    policy: ScoringPolicy,
    rng: Box<dyn RandomSource>,
    cues: Vec<Cue>,
    last_outcome: Option<Outcome>,
    /// Set once the grid was found inconsistent; every later call reports it.
    halted: Option<GameError>,
}

impl GameState {
    pub fn new(config: &crate::GameConfig) -> Self {
        Self::with_rng(config, Box::new(GameRng::new(config.seed)))
    }

    pub fn with_rng(config: &crate::GameConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let policy = ScoringPolicy {
            max_timer: config.time_limit,
            bomb_radius: config.bomb_radius,
            penalize_lonely_bomb: config.penalize_lonely_bomb,
        };
        let mut grid = Grid::new(
            config.rows,
            config.cols,
            GridGeometry::default(),
            TilePalette::default(),
            TileTimings::default(),
        );
        grid.populate(rng.as_mut());
        Self {
            grid,
            phase: Phase::Init,
            score: 0,
            timer: policy.max_timer,
            policy,
            rng,
            cues: Vec::new(),
            last_outcome: None,
            halted: None,
        }
    }

    /// Session already in `Ready` on a hand-built grid.
    #[cfg(test)]
    pub fn with_grid(grid: Grid, policy: ScoringPolicy, rng: Box<dyn RandomSource>) -> Self {
        Self {
            grid,
            phase: Phase::Ready,
            score: 0,
            timer: policy.max_timer,
            policy,
            rng,
            cues: Vec::new(),
            last_outcome: None,
            halted: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[inline]
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Remaining time as a 0..=1 fraction of the ceiling.
    pub fn timer_ratio(&self) -> f64 {
        if self.policy.max_timer <= 0.0 {
            return 0.0;
        }
        (self.timer / self.policy.max_timer).clamp(0.0, 1.0)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Visible tiles with kind, position and lifecycle.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.tiles()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Take the queued cues.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt: f64) -> Result<(), GameError> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }
        // Overlays freeze the board.
        let dt = if self.phase.is_overlay() { 0.0 } else { dt.max(0.0) };

        self.grid.update_tiles(dt);
        self.grid.remove_dead();

        match self.phase {
            Phase::Init => self.set_phase(Phase::Instructions1),
            Phase::Spawning => {
                if self.grid.is_full() && !self.grid.tiles().any(Tile::is_settling) {
                    self.enter_ready();
                }
            }
            Phase::Ready => self.timer -= dt,
            Phase::Removing => {
                if !self.grid.tiles().any(Tile::is_dying) {
                    let dropped = self.grid.collapse_gaps(self.rng.as_mut());
                    if let Err(err) = self.grid.verify() {
                        error!(%err, "grid corrupted after collapse; halting");
                        self.halted = Some(err.clone());
                        return Err(err);
                    }
                    debug!(dropped, "gaps collapsed");
                    self.cues.push(Cue::TilesDropped);
                    self.set_phase(Phase::Dropping);
                }
            }
            Phase::Dropping => {
                if !self.grid.tiles().any(Tile::is_settling) {
                    self.enter_ready();
                }
            }
            Phase::Instructions1 | Phase::Instructions2 | Phase::GameOver => {}
        }

        self.timer = self.timer.min(self.policy.max_timer);
        if self.phase == Phase::Ready && self.timer <= 0.0 {
            info!(score = self.score, "time is up");
            self.set_phase(Phase::GameOver);
        }
        Ok(())
    }

    fn enter_ready(&mut self) {
        self.set_phase(Phase::Ready);
        for attempt in 1..=RESHUFFLE_ATTEMPTS {
            if matching::any_available_match(&self.grid) {
                return;
            }
            info!(attempt, "no matches on the board, reshuffling");
            self.grid.shuffle_kinds(self.rng.as_mut());
        }
    }

    /// A tap resolved by the input side to a cell, or `None` for a miss.
    ///
    /// Screen taps (instructions, game over) advance on any tap. Tile taps only count in
    /// `Ready`; everything else is ignored.
    pub fn handle_tap(&mut self, hit: Option<(usize, usize)>) -> Result<(), GameError> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }
        if let Some(next) = self.phase.after_tap() {
            if self.phase == Phase::GameOver {
                self.restart();
            } else {
                if next == Phase::Spawning {
                    self.timer = self.policy.max_timer;
                }
                self.set_phase(next);
            }
            return Ok(());
        }
        match (self.phase, hit) {
            (Phase::Ready, Some((row, col))) => self.tap_cell(row, col),
            (phase, _) => debug!(?phase, ?hit, "tap ignored"),
        }
        Ok(())
    }

    fn tap_cell(&mut self, row: usize, col: usize) {
        let found = match matching::find_connected(&self.grid, row, col) {
            Ok(m) => m,
            Err(err) => {
                warn!(%err, "tap outside the grid");
                return;
            }
        };
        let outcome = matching::classify(&found, self.grid.palette());
        debug!(row, col, size = found.size(), ?outcome, "tap");
        self.apply(outcome, &found);
    }

    fn apply(&mut self, outcome: Outcome, found: &Match) {
        let n = found.size();
        let deltas = match outcome {
            Outcome::Absorbed => return,
            Outcome::Remove => {
                self.kill_all(&found.cells);
                self.cues.push(Cue::MatchSucceeded);
                scoring::reward(n, self.rng.as_mut())
            }
            Outcome::MergeToSpecial => {
                if let Err(err) = self.merge_to_special(found) {
                    error!(%err, "merge refused");
                    return;
                }
                self.cues.push(Cue::MatchSucceeded);
                scoring::reward(n, self.rng.as_mut())
            }
            Outcome::Penalty { remove } => {
                self.cues.push(Cue::MatchFailed);
                if remove {
                    self.kill_all(&found.cells);
                    scoring::hazard_penalty(n, self.rng.as_mut())
                } else {
                    scoring::wrong_tap_penalty(self.rng.as_mut())
                }
            }
            Outcome::Detonate => {
                let Some((row, col)) = found.seed() else { return };
                let mut deltas = Deltas::default();
                if self.policy.penalize_lonely_bomb && n < MIN_MATCH {
                    self.cues.push(Cue::MatchFailed);
                    deltas = scoring::wrong_tap_penalty(self.rng.as_mut());
                }
                self.grid.kill(row, col);
                let blast = matching::blast_area(&self.grid, row, col, self.policy.bomb_radius);
                self.kill_all(&blast);
                self.cues.push(Cue::BombDetonated);
                deltas + scoring::detonation_bonus(self.policy.bomb_radius, self.rng.as_mut())
            }
        };

        self.score += deltas.score;
        self.timer = scoring::apply_timer(self.timer, deltas.timer, self.policy.max_timer);
        self.last_outcome = Some(outcome);
        if outcome.removes_tiles() {
            self.set_phase(Phase::Removing);
        }
    }

    fn kill_all(&mut self, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            self.grid.kill(row, col);
        }
    }

    /// Kill the matched tiles and put a fresh bomb on the seed cell.
    pub fn merge_to_special(&mut self, found: &Match) -> Result<TileId, GameError> {
        let Some((row, col)) = found.seed() else {
            return Err(GameError::EmptyMatchMerge);
        };
        self.kill_all(&found.cells);
        let bomb = self.grid.palette().bomb;
        let id = self.grid.place_tile(row, col, bomb)?;
        debug!(row, col, "bomb created");
        Ok(id)
    }

    /// Fresh session: score 0, full timer, new board, straight into spawning.
    pub fn restart(&mut self) {
        info!(final_score = self.score, "restarting");
        self.score = 0;
        self.timer = self.policy.max_timer;
        self.cues.clear();
        self.last_outcome = None;
        self.grid.populate(self.rng.as_mut());
        self.set_phase(Phase::Spawning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use crate::tile::{Lifecycle, TileKind};

    const A: Option<u8> = Some(0);
    const B: Option<u8> = Some(1);
    const C: Option<u8> = Some(3);
    const D: Option<u8> = Some(4);
    const BOMB: Option<u8> = Some(2);
    const ROCK: Option<u8> = Some(7);

    fn ready(rows: &[&[Option<u8>]], random: f64) -> GameState {
        ready_with(rows, random, ScoringPolicy::default())
    }

    fn ready_with(rows: &[&[Option<u8>]], random: f64, policy: ScoringPolicy) -> GameState {
        let grid = Grid::from_kinds(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>());
        GameState::with_grid(grid, policy, Box::new(ScriptedRandom::constant(random)))
    }

    fn dying(state: &GameState) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = state
            .tiles()
            .filter(|t| t.is_dying())
            .filter_map(|t| state.grid().cell_of(t.id))
            .collect();
        cells.sort_unstable();
        cells
    }

    fn small_config() -> crate::GameConfig {
        crate::GameConfig {
            rows: 4,
            cols: 5,
            seed: Some(11),
            ..crate::GameConfig::default()
        }
    }

    #[test]
    fn screens_advance_to_spawning_then_ready() {
        let mut state = GameState::new(&small_config());
        assert_eq!(state.phase(), Phase::Init);
        state.handle_tap(None).unwrap();
        assert_eq!(state.phase(), Phase::Init);
        state.tick(0.016).unwrap();
        assert_eq!(state.phase(), Phase::Instructions1);
        state.handle_tap(None).unwrap();
        assert_eq!(state.phase(), Phase::Instructions2);
        // Overlays freeze spawn animations.
        state.tick(5.0).unwrap();
        assert!(state.tiles().all(|t| t.lifecycle == Lifecycle::Spawning));
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        assert_eq!(state.timer(), 30.0);

        state.tick(0.3).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        state.tick(0.3).unwrap();
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.grid().is_full());
        // The countdown only runs in Ready.
        assert_eq!(state.timer(), 30.0);
        state.tick(1.0).unwrap();
        assert!((state.timer() - 29.0).abs() < 1e-9);
    }

    #[test]
    fn taps_are_ignored_while_spawning() {
        let mut state = GameState::new(&small_config());
        state.tick(0.0).unwrap();
        state.handle_tap(None).unwrap();
        state.handle_tap(None).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        assert_eq!(state.score(), 0);
        assert!(dying(&state).is_empty());
    }

    #[test]
    fn l_shape_of_three_is_removed() {
        let mut state = ready(&[&[A, A], &[A, B]], 0.0);
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.score(), 3);
        assert_eq!(state.phase(), Phase::Removing);
        assert_eq!(state.last_outcome(), Some(Outcome::Remove));
        assert_eq!(dying(&state), vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(state.drain_cues(), vec![Cue::MatchSucceeded]);
        assert!(state.drain_cues().is_empty());
    }

    #[test]
    fn removal_wave_drops_and_returns_to_ready() {
        let mut state = ready(&[&[A, A], &[A, B]], 0.0);
        state.handle_tap(Some((0, 0))).unwrap();
        state.drain_cues();

        state.tick(0.5).unwrap();
        assert_eq!(state.phase(), Phase::Removing);
        state.tick(0.5).unwrap();
        assert_eq!(state.phase(), Phase::Dropping);
        assert_eq!(state.drain_cues(), vec![Cue::TilesDropped]);
        assert!(state.grid().is_full());
        assert!(state.tiles().any(|t| t.lifecycle == Lifecycle::Dropping));

        state.tick(1.0).unwrap();
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.tiles().all(|t| t.lifecycle == Lifecycle::Static));
        assert_eq!(state.grid().tile_count(), 4);
    }

    #[test]
    fn taps_are_ignored_while_dropping() {
        let mut state = ready(&[&[A, A], &[A, B]], 0.0);
        state.handle_tap(Some((0, 0))).unwrap();
        state.tick(0.5).unwrap();
        state.tick(0.5).unwrap();
        assert_eq!(state.phase(), Phase::Dropping);
        state.drain_cues();

        let (score, timer) = (state.score(), state.timer());
        let before: Vec<_> = state.tiles().map(|t| (t.id, t.kind, t.lifecycle)).collect();
        state.handle_tap(Some((1, 1))).unwrap();
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.phase(), Phase::Dropping);
        assert_eq!(state.score(), score);
        assert_eq!(state.timer(), timer);
        assert!(state.drain_cues().is_empty());
        let after: Vec<_> = state.tiles().map(|t| (t.id, t.kind, t.lifecycle)).collect();
        assert_eq!(before, after);
        assert!(dying(&state).is_empty());
    }

    #[test]
    fn second_tap_in_same_frame_is_ignored() {
        let mut state = ready(&[&[A, A, A], &[B, C, B]], 0.0);
        state.handle_tap(Some((0, 0))).unwrap();
        state.handle_tap(Some((0, 1))).unwrap();
        assert_eq!(state.score(), 3);
        assert_eq!(state.drain_cues(), vec![Cue::MatchSucceeded]);
    }

    #[test]
    fn five_in_a_row_merges_into_bomb() {
        let mut state = ready(&[&[A, A, A, A, A]], 0.0);
        state.handle_tap(Some((0, 2))).unwrap();
        assert_eq!(state.last_outcome(), Some(Outcome::MergeToSpecial));
        assert_eq!(state.score(), 5);
        let bomb = state.grid().tile_at(0, 2).unwrap();
        assert_eq!(bomb.kind, TileKind(2));
        assert!(!bomb.is_dying());

        let grid = state.grid_mut();
        grid.update_tiles(1.0);
        grid.remove_dead();
        assert_eq!(grid.tile_count(), 1);
        for col in [0, 1, 3, 4] {
            assert!(grid.id_at(0, col).is_none());
        }
        assert_eq!(grid.tile_at(0, 2).map(|t| t.kind), Some(TileKind(2)));
    }

    #[test]
    fn merged_bomb_survives_the_wave() {
        let mut state = ready(&[&[B, C, D, B, C], &[A, A, A, A, A]], 0.0);
        state.handle_tap(Some((1, 0))).unwrap();
        state.tick(1.0).unwrap();
        assert_eq!(state.phase(), Phase::Dropping);
        assert_eq!(
            state.grid().tile_at(1, 0).map(|t| t.kind),
            Some(TileKind(2))
        );
        state.grid().verify().unwrap();
    }

    #[test]
    fn four_hazards_cost_points_and_time() {
        let mut state = ready(&[&[ROCK, ROCK, A], &[ROCK, ROCK, B], &[A, B, C]], 0.5);
        state.handle_tap(Some((1, 1))).unwrap();
        assert_eq!(state.last_outcome(), Some(Outcome::Penalty { remove: true }));
        assert_eq!(state.score(), -5);
        assert!((state.timer() - 20.0).abs() < 1e-9);
        assert_eq!(dying(&state), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(state.phase(), Phase::Removing);
        assert_eq!(state.drain_cues(), vec![Cue::MatchFailed]);
    }

    #[test]
    fn small_hazard_group_is_absorbed() {
        let mut state = ready(&[&[ROCK, ROCK, A], &[B, C, D]], 0.5);
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.score(), 0);
        assert_eq!(state.timer(), 30.0);
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.drain_cues().is_empty());
        assert_eq!(state.last_outcome(), None);
    }

    #[test]
    fn wrong_tap_penalises_without_removal() {
        let mut state = ready(&[&[A, B, C], &[B, C, A]], 0.5);
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.score(), -5);
        assert!((state.timer() - 27.5).abs() < 1e-9);
        assert!(dying(&state).is_empty());
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.drain_cues(), vec![Cue::MatchFailed]);
    }

    #[test]
    fn timer_never_exceeds_ceiling() {
        let mut state = ready(&[&[A, A, A, A], &[B, C, B, C]], 0.9);
        state.timer = 29.0;
        state.handle_tap(Some((0, 0))).unwrap();
        assert_eq!(state.timer(), 30.0);
        state.tick(0.0).unwrap();
        assert_eq!(state.timer(), 30.0);
    }

    #[test]
    fn negative_timer_ends_game_on_next_tick() {
        let mut state = ready(&[&[A, B, C], &[B, C, A]], 0.9);
        state.timer = 2.0;
        state.handle_tap(Some((0, 0))).unwrap();
        assert!(state.timer() < 0.0);
        assert_eq!(state.phase(), Phase::Ready);
        state.tick(0.016).unwrap();
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn countdown_runs_out() {
        let mut state = ready(&[&[A, B, C], &[B, C, A]], 0.5);
        state.tick(29.0).unwrap();
        assert_eq!(state.phase(), Phase::Ready);
        state.tick(1.5).unwrap();
        assert_eq!(state.phase(), Phase::GameOver);
        // Game over freezes everything but restart.
        state.handle_tap(None).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
    }

    #[test]
    fn restart_resets_session() {
        let mut state = GameState::new(&small_config());
        state.score = -12;
        state.timer = -1.0;
        state.phase = Phase::GameOver;
        state.cues.push(Cue::MatchFailed);
        state.handle_tap(Some((2, 2))).unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        assert_eq!(state.score(), 0);
        assert_eq!(state.timer(), 30.0);
        assert!(state.grid().is_full());
        assert_eq!(state.grid().tile_count(), 20);
        assert!(state.drain_cues().is_empty());
        state.grid().verify().unwrap();
    }

    #[test]
    fn bomb_clears_its_neighbourhood() {
        let mut state = ready(
            &[
                &[A, B, BOMB, D],
                &[C, BOMB, A, B],
                &[D, A, B, C],
                &[A, C, D, A],
            ],
            0.5,
        );
        state.timer = 20.0;
        state.handle_tap(Some((1, 1))).unwrap();
        assert_eq!(state.last_outcome(), Some(Outcome::Detonate));
        assert_eq!(
            dying(&state),
            vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
        assert!(!state.grid().tile_at(0, 2).unwrap().is_dying());
        assert_eq!(state.score(), 25);
        assert!((state.timer() - 25.0).abs() < 1e-9);
        assert_eq!(state.phase(), Phase::Removing);
        assert_eq!(state.drain_cues(), vec![Cue::BombDetonated]);
    }

    #[test]
    fn lonely_bomb_penalty_is_opt_in() {
        let policy = ScoringPolicy {
            penalize_lonely_bomb: true,
            ..ScoringPolicy::default()
        };
        let mut state = ready_with(&[&[BOMB, A], &[B, C]], 0.5, policy);
        state.timer = 20.0;
        state.handle_tap(Some((0, 0))).unwrap();
        // -5 penalty + 25 bonus; -2.5 s + 5 s.
        assert_eq!(state.score(), 20);
        assert!((state.timer() - 22.5).abs() < 1e-9);
        assert_eq!(
            state.drain_cues(),
            vec![Cue::MatchFailed, Cue::BombDetonated]
        );
    }

    #[test]
    fn empty_merge_is_refused() {
        let mut state = ready(&[&[A, A]], 0.0);
        let empty = Match {
            seed_kind: None,
            cells: Vec::new(),
        };
        assert_eq!(state.merge_to_special(&empty), Err(GameError::EmptyMatchMerge));
        assert_eq!(state.grid().tile_count(), 2);
        assert!(dying(&state).is_empty());
    }

    #[test]
    fn out_of_bounds_tap_is_absorbed() {
        let mut state = ready(&[&[A, A, A]], 0.0);
        state.handle_tap(Some((5, 0))).unwrap();
        state.handle_tap(Some((0, 9))).unwrap();
        state.handle_tap(None).unwrap();
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.score(), 0);
        assert!(state.drain_cues().is_empty());
    }

    #[test]
    fn corrupted_grid_halts_the_session() {
        let mut state = ready(&[&[A, A, A], &[B, C, B]], 0.0);
        state.handle_tap(Some((0, 0))).unwrap();
        let stolen = state.grid().id_at(1, 2);
        state.grid_mut().set_cell(1, 0, stolen);

        let err = state.tick(1.0).unwrap_err();
        assert!(matches!(err, GameError::InconsistentGridState(_)));
        assert!(state.halted.is_some());
        assert_eq!(state.tick(0.016), Err(err.clone()));
        assert_eq!(state.handle_tap(Some((0, 0))), Err(err));
    }

    #[test]
    fn unplayable_board_is_left_after_bounded_shuffles() {
        let mut state = ready(&[&[A, B]], 0.0);
        state.phase = Phase::Dropping;
        state.tick(0.0).unwrap();
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.grid().tile_count(), 2);
    }
}
