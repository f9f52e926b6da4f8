//! Tiles: kind, lifecycle and the timers that drive it.

use crate::rng::RandomSource;

/// Index into the tile palette; also picks the glyph and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(pub u8);

/// Stable identity of a tile while it lives in the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

/// Fixed palette handed over by the asset side before the first populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePalette {
    /// Number of kinds (frames) in the palette.
    pub kinds: u8,
    /// Kind created by large matches; never spawned at random.
    pub bomb: TileKind,
    /// Rock: matching it costs points and time.
    pub hazard: TileKind,
    /// Index random spawns skip.
    pub reserved: TileKind,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            kinds: 8,
            bomb: TileKind(2),
            hazard: TileKind(7),
            reserved: TileKind(2),
        }
    }
}

impl TilePalette {
    pub fn is_bomb(&self, kind: TileKind) -> bool {
        kind == self.bomb
    }

    pub fn is_hazard(&self, kind: TileKind) -> bool {
        kind == self.hazard
    }

    /// Ordinary kinds plus the hazard: everything a random spawn may produce.
    pub fn spawnable(&self) -> Vec<TileKind> {
        (0..self.kinds)
            .map(TileKind)
            .filter(|&k| k != self.reserved && k != self.bomb)
            .collect()
    }

    /// Uniform draw over the spawnable kinds.
    ///
    /// Draws from `0..kinds - 1` and shifts values at or above the reserved index up by
    /// one; a bomb index distinct from the reserved one is skipped the same way.
    pub fn spawn_kind(&self, rng: &mut dyn RandomSource) -> TileKind {
        let candidates = self.spawnable();
        if candidates.is_empty() {
            return TileKind(0);
        }
        candidates[rng.below(candidates.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Spawning,
    Static,
    Dying,
    Dropping,
}

/// Lifecycle durations and drop speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTimings {
    pub spawn_secs: f64,
    pub die_secs: f64,
    /// Pixels per second.
    pub drop_speed: f64,
}

impl Default for TileTimings {
    fn default() -> Self {
        Self {
            spawn_secs: 0.5,
            die_secs: 0.8,
            drop_speed: 450.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub lifecycle: Lifecycle,
    pub x: f64,
    pub y: f64,
    /// Rest position while dropping.
    pub target_y: f64,
    /// Seconds spent in the current timed lifecycle.
    elapsed: f64,
}

impl Tile {
    pub fn new(id: TileId, kind: TileKind, x: f64, y: f64) -> Self {
        Self {
            id,
            kind,
            lifecycle: Lifecycle::Spawning,
            x,
            y,
            target_y: y,
            elapsed: 0.0,
        }
    }

    pub fn kill(&mut self) {
        if self.lifecycle != Lifecycle::Dying {
            self.lifecycle = Lifecycle::Dying;
            self.elapsed = 0.0;
        }
    }

    /// Start falling towards `target_y`. Dying tiles stay dying.
    pub fn drop_to(&mut self, target_y: f64) {
        if self.lifecycle == Lifecycle::Dying {
            return;
        }
        self.target_y = target_y;
        self.lifecycle = if self.y < target_y {
            Lifecycle::Dropping
        } else {
            self.y = target_y;
            Lifecycle::Static
        };
    }

    pub fn is_dying(&self) -> bool {
        self.lifecycle == Lifecycle::Dying
    }

    /// Dying and its death timer has run out.
    pub fn is_dead(&self, timings: &TileTimings) -> bool {
        self.is_dying() && self.elapsed >= timings.die_secs
    }

    /// Still animating into place (spawning or falling).
    pub fn is_settling(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Spawning | Lifecycle::Dropping)
    }

    /// 0.0 (just started) ..= 1.0 (done) for the timed lifecycles.
    pub fn progress(&self, timings: &TileTimings) -> f64 {
        let total = match self.lifecycle {
            Lifecycle::Spawning => timings.spawn_secs,
            Lifecycle::Dying => timings.die_secs,
            _ => return 1.0,
        };
        if total <= 0.0 {
            1.0
        } else {
            (self.elapsed / total).min(1.0)
        }
    }

    pub fn update(&mut self, dt: f64, timings: &TileTimings) {
        match self.lifecycle {
            Lifecycle::Spawning => {
                self.elapsed += dt;
                if self.elapsed >= timings.spawn_secs {
                    self.lifecycle = Lifecycle::Static;
                    self.elapsed = 0.0;
                }
            }
            Lifecycle::Dying => self.elapsed += dt,
            Lifecycle::Dropping => {
                self.y += timings.drop_speed * dt;
                if self.y >= self.target_y {
                    self.y = self.target_y;
                    self.lifecycle = Lifecycle::Static;
                }
            }
            Lifecycle::Static => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn spawn_never_yields_bomb() {
        let palette = TilePalette::default();
        let spawnable = palette.spawnable();
        assert_eq!(spawnable.len(), 7);
        assert!(!spawnable.contains(&palette.bomb));
        assert!(spawnable.contains(&palette.hazard));

        let mut rng = ScriptedRandom::new(&[0.0, 0.2, 0.3, 0.45, 0.6, 0.75, 0.99]);
        for _ in 0..7 {
            assert_ne!(palette.spawn_kind(&mut rng), palette.bomb);
        }
    }

    #[test]
    fn spawn_shifts_past_reserved_index() {
        let palette = TilePalette::default();
        // Draw of 2 (of 0..7) lands on 3 after skipping the reserved index.
        let mut rng = ScriptedRandom::constant(2.5 / 7.0);
        assert_eq!(palette.spawn_kind(&mut rng), TileKind(3));
        let mut rng = ScriptedRandom::constant(0.999);
        assert_eq!(palette.spawn_kind(&mut rng), TileKind(7));
    }

    #[test]
    fn distinct_reserved_and_bomb_are_both_skipped() {
        let palette = TilePalette {
            kinds: 6,
            bomb: TileKind(5),
            hazard: TileKind(4),
            reserved: TileKind(0),
        };
        assert_eq!(
            palette.spawnable(),
            vec![TileKind(1), TileKind(2), TileKind(3), TileKind(4)]
        );
    }

    #[test]
    fn spawning_becomes_static() {
        let t = TileTimings::default();
        let mut tile = Tile::new(TileId(1), TileKind(0), 0.0, 0.0);
        tile.update(0.3, &t);
        assert_eq!(tile.lifecycle, Lifecycle::Spawning);
        tile.update(0.3, &t);
        assert_eq!(tile.lifecycle, Lifecycle::Static);
    }

    #[test]
    fn dying_tile_dies_after_timer() {
        let t = TileTimings::default();
        let mut tile = Tile::new(TileId(1), TileKind(0), 0.0, 0.0);
        tile.kill();
        tile.update(0.5, &t);
        assert!(!tile.is_dead(&t));
        tile.update(0.4, &t);
        assert!(tile.is_dead(&t));
    }

    #[test]
    fn dropping_stops_on_target() {
        let t = TileTimings::default();
        let mut tile = Tile::new(TileId(1), TileKind(0), 0.0, -64.0);
        tile.drop_to(128.0);
        assert_eq!(tile.lifecycle, Lifecycle::Dropping);
        tile.update(0.2, &t);
        assert!((tile.y - 26.0).abs() < 1e-9);
        tile.update(1.0, &t);
        assert_eq!(tile.y, 128.0);
        assert_eq!(tile.lifecycle, Lifecycle::Static);
    }

    #[test]
    fn drop_does_not_revive_dying_tile() {
        let mut tile = Tile::new(TileId(1), TileKind(0), 0.0, 0.0);
        tile.kill();
        tile.drop_to(64.0);
        assert!(tile.is_dying());
    }
}
