//! Match engine: connected components from a seed cell and outcome classification.

use crate::error::GameError;
use crate::grid::Grid;
use crate::tile::{TileKind, TilePalette};
use std::collections::HashSet;

/// Minimum component size that clears tiles.
pub const MIN_MATCH: usize = 3;
/// Components at least this large merge into a bomb.
pub const MERGE_MATCH: usize = 5;

/// Result of one flood fill. `cells[0]` is the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub seed_kind: Option<TileKind>,
    pub cells: Vec<(usize, usize)>,
}

impl Match {
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn seed(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }
}

/// What a tap on a component does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Tap lands on nothing that reacts (small hazard group, empty cell).
    Absorbed,
    /// 3..5 ordinary tiles die.
    Remove,
    /// 5+ ordinary tiles die and a bomb appears at the seed.
    MergeToSpecial,
    /// Wrong tap. `remove` is set for hazard groups, whose tiles die too.
    Penalty { remove: bool },
    /// Bomb seed: clears its neighbourhood.
    Detonate,
}

impl Outcome {
    /// Outcomes that kill tiles and therefore start a removal wave.
    pub fn removes_tiles(self) -> bool {
        matches!(
            self,
            Self::Remove | Self::MergeToSpecial | Self::Detonate | Self::Penalty { remove: true }
        )
    }
}

/// Flood fill shared by `find_connected` and the availability scan.
///
/// Cells are marked in `visited` when pushed, so none is expanded twice.
fn flood(
    grid: &Grid,
    seed: (usize, usize),
    kind: TileKind,
    visited: &mut HashSet<(usize, usize)>,
) -> Vec<(usize, usize)> {
    let mut component = Vec::new();
    let mut stack = vec![seed];
    visited.insert(seed);
    while let Some((row, col)) = stack.pop() {
        component.push((row, col));
        for (nr, nc) in grid.neighbors_of(row, col) {
            let same = grid.tile_at(nr, nc).is_some_and(|t| t.kind == kind && !t.is_dying());
            if same && visited.insert((nr, nc)) {
                stack.push((nr, nc));
            }
        }
    }
    component
}

/// All same-kind tiles 4-connected to the seed. An empty seed gives an empty match.
pub fn find_connected(grid: &Grid, seed_row: usize, seed_col: usize) -> Result<Match, GameError> {
    grid.check(seed_row, seed_col)?;
    let Some(seed) = grid.tile_at(seed_row, seed_col) else {
        return Ok(Match {
            seed_kind: None,
            cells: Vec::new(),
        });
    };
    let kind = seed.kind;
    let mut visited = HashSet::new();
    let cells = flood(grid, (seed_row, seed_col), kind, &mut visited);
    Ok(Match {
        seed_kind: Some(kind),
        cells,
    })
}

pub fn classify(m: &Match, palette: &TilePalette) -> Outcome {
    let Some(kind) = m.seed_kind else {
        return Outcome::Absorbed;
    };
    let n = m.size();
    if palette.is_bomb(kind) {
        Outcome::Detonate
    } else if palette.is_hazard(kind) {
        if n >= MIN_MATCH {
            Outcome::Penalty { remove: true }
        } else {
            Outcome::Absorbed
        }
    } else if n >= MERGE_MATCH {
        Outcome::MergeToSpecial
    } else if n >= MIN_MATCH {
        Outcome::Remove
    } else {
        Outcome::Penalty { remove: false }
    }
}

/// True if some tap would clear ordinary tiles: a bomb, or an ordinary group of 3+.
pub fn any_available_match(grid: &Grid) -> bool {
    let palette = grid.palette();
    let mut visited = HashSet::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(tile) = grid.tile_at(row, col) else { continue };
            if tile.is_dying() {
                continue;
            }
            if palette.is_bomb(tile.kind) {
                return true;
            }
            if palette.is_hazard(tile.kind) || visited.contains(&(row, col)) {
                continue;
            }
            if flood(grid, (row, col), tile.kind, &mut visited).len() >= MIN_MATCH {
                return true;
            }
        }
    }
    false
}

/// Cells a bomb at (row, col) clears: the square of `radius` around it, bombs excluded.
pub fn blast_area(grid: &Grid, row: usize, col: usize, radius: usize) -> Vec<(usize, usize)> {
    let palette = grid.palette();
    let last_row = row.saturating_add(radius).min(grid.rows().saturating_sub(1));
    let last_col = col.saturating_add(radius).min(grid.cols().saturating_sub(1));
    let rows = row.saturating_sub(radius)..=last_row;
    rows.flat_map(|r| {
        let cols = col.saturating_sub(radius)..=last_col;
        cols.map(move |c| (r, c))
    })
    .filter(|&(r, c)| (r, c) != (row, col))
    .filter(|&(r, c)| grid.tile_at(r, c).is_some_and(|t| !palette.is_bomb(t.kind)))
    .collect()
}
