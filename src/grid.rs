//! Grid: the rows x cols matrix of tile ids and the active tile set behind it.
//!
//! The grid is the only owner of the tile-to-cell mapping. Tiles never know their cell;
//! `cell_of` scans. Dying tiles may linger in the active set after being detached (a
//! merge replaces the seed with a bomb) until `remove_dead` prunes them.

use crate::error::GameError;
use crate::rng::RandomSource;
use crate::tile::{Tile, TileId, TileKind, TilePalette, TileTimings};
use std::collections::{BTreeMap, HashSet};

/// Cell-to-pixel mapping. Positions are tile centres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub tile_width: f64,
    pub tile_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            tile_width: 64.0,
            tile_height: 64.0,
            origin_x: 150.0,
            origin_y: 40.0,
        }
    }
}

impl GridGeometry {
    #[inline]
    pub fn x_of(&self, col: usize) -> f64 {
        self.origin_x + col as f64 * self.tile_width
    }

    #[inline]
    pub fn y_of(&self, row: usize) -> f64 {
        self.origin_y + row as f64 * self.tile_height
    }

    /// Fractional row for a pixel y; negative above the visible top edge.
    #[inline]
    pub fn row_at(&self, y: f64) -> f64 {
        (y - self.origin_y) / self.tile_height
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major; `cells[row * cols + col]`.
    cells: Vec<Option<TileId>>,
    tiles: BTreeMap<TileId, Tile>,
    next_id: u64,
    geometry: GridGeometry,
    palette: TilePalette,
    timings: TileTimings,
}

impl Grid {
    pub fn new(
        rows: usize,
        cols: usize,
        geometry: GridGeometry,
        palette: TilePalette,
        timings: TileTimings,
    ) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            tiles: BTreeMap::new(),
            next_id: 0,
            geometry,
            palette,
            timings,
        }
    }

    /// Build a grid with fixed kinds (`None` = empty). All tiles start static.
    #[cfg(test)]
    pub fn from_kinds(layout: &[Vec<Option<u8>>]) -> Self {
        let rows = layout.len();
        let cols = layout.first().map_or(0, Vec::len);
        let mut grid = Self::new(
            rows,
            cols,
            GridGeometry::default(),
            TilePalette::default(),
            TileTimings::default(),
        );
        for (r, line) in layout.iter().enumerate() {
            for (c, kind) in line.iter().enumerate() {
                if let Some(k) = kind {
                    let id = grid
                        .place_tile(r, c, TileKind(*k))
                        .expect("layout fits the grid");
                    if let Some(t) = grid.tiles.get_mut(&id) {
                        t.lifecycle = crate::tile::Lifecycle::Static;
                    }
                }
            }
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    pub fn timings(&self) -> &TileTimings {
        &self.timings
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn check(&self, row: usize, col: usize) -> Result<(), GameError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(GameError::InvalidCellReference {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Id of the tile placed at (row, col).
    pub fn id_at(&self, row: usize, col: usize) -> Option<TileId> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.id_at(row, col).and_then(|id| self.tiles.get(&id))
    }

    #[cfg(test)]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Every active tile, including detached dying ones.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    #[cfg(test)]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Reverse lookup: which cell holds this tile.
    pub fn cell_of(&self, id: TileId) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == Some(id))
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Orthogonal in-bounds neighbours. Diagonals are never neighbours.
    pub fn neighbors_of(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        const NEIGHBOURS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        if !self.in_bounds(row, col) {
            return Vec::new();
        }
        NEIGHBOURS_4
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.in_bounds(r, c).then_some((r, c))
            })
            .collect()
    }

    /// Screen-point hit test against tile centres.
    pub fn cell_at_point(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let g = &self.geometry;
        let col = ((x - g.origin_x) / g.tile_width + 0.5).floor();
        let row = ((y - g.origin_y) / g.tile_height + 0.5).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.in_bounds(row, col).then_some((row, col))
    }

    fn make_tile(&mut self, kind: TileKind, x: f64, y: f64) -> Tile {
        let id = TileId(self.next_id);
        self.next_id += 1;
        Tile::new(id, kind, x, y)
    }

    /// Spawn a tile of `kind` at the cell. A previous occupant is detached, not destroyed.
    pub fn place_tile(
        &mut self,
        row: usize,
        col: usize,
        kind: TileKind,
    ) -> Result<TileId, GameError> {
        self.check(row, col)?;
        let tile = self.make_tile(kind, self.geometry.x_of(col), self.geometry.y_of(row));
        let id = tile.id;
        self.tiles.insert(id, tile);
        let i = self.index(row, col);
        self.cells[i] = Some(id);
        Ok(id)
    }

    /// Mark the tile at (row, col) dying. Returns false if the cell is empty.
    pub fn kill(&mut self, row: usize, col: usize) -> bool {
        match self.id_at(row, col).and_then(|id| self.tiles.get_mut(&id)) {
            Some(tile) => {
                tile.kill();
                true
            }
            None => false,
        }
    }

    /// Drop every tile and fill each cell with a fresh random spawn.
    pub fn populate(&mut self, rng: &mut dyn RandomSource) {
        self.tiles.clear();
        self.cells.iter_mut().for_each(|c| *c = None);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let kind = self.palette.spawn_kind(rng);
                let tile = self.make_tile(kind, self.geometry.x_of(col), self.geometry.y_of(row));
                let i = self.index(row, col);
                self.cells[i] = Some(tile.id);
                self.tiles.insert(tile.id, tile);
            }
        }
    }

    /// Advance every active tile by the same delta.
    pub fn update_tiles(&mut self, dt: f64) {
        let timings = self.timings;
        for tile in self.tiles.values_mut() {
            tile.update(dt, &timings);
        }
    }

    /// Prune dying tiles whose timer ran out, repeating until a pass removes nothing.
    pub fn remove_dead(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let dead: Vec<TileId> = self
                .tiles
                .values()
                .filter(|t| t.is_dead(&self.timings))
                .map(|t| t.id)
                .collect();
            if dead.is_empty() {
                break;
            }
            for id in dead {
                if let Some(cell) = self.cells.iter_mut().find(|c| **c == Some(id)) {
                    *cell = None;
                }
                self.tiles.remove(&id);
                removed += 1;
            }
        }
        removed
    }

    /// Gravity: slide survivors down each column and spawn refills above the top edge.
    ///
    /// Returns how many tiles were set falling.
    pub fn collapse_gaps(&mut self, rng: &mut dyn RandomSource) -> usize {
        let mut dropping = 0;
        for col in 0..self.cols {
            for row in (0..self.rows).rev() {
                if self.cells[self.index(row, col)].is_some() {
                    continue;
                }
                let above = (0..row)
                    .rev()
                    .find(|&r| self.cells[self.index(r, col)].is_some());
                let Some(r) = above else { break };
                let (to, from) = (self.index(row, col), self.index(r, col));
                self.cells.swap(to, from);
                let target = self.geometry.y_of(row);
                if let Some(tile) = self.cells[to].and_then(|id| self.tiles.get_mut(&id)) {
                    tile.drop_to(target);
                    dropping += 1;
                }
            }

            let empty_top = (0..self.rows)
                .take_while(|&r| self.cells[self.index(r, col)].is_none())
                .count();
            for r in (0..empty_top).rev() {
                let above = (empty_top - r) as f64;
                let kind = self.palette.spawn_kind(rng);
                let y = self.geometry.origin_y - self.geometry.tile_height * above;
                let mut tile = self.make_tile(kind, self.geometry.x_of(col), y);
                tile.drop_to(self.geometry.y_of(r));
                let i = self.index(r, col);
                self.cells[i] = Some(tile.id);
                self.tiles.insert(tile.id, tile);
                dropping += 1;
            }
        }
        dropping
    }

    /// Cross-check the cell matrix against the active tile set.
    pub fn verify(&self) -> Result<(), GameError> {
        let mut placed = HashSet::new();
        for (i, cell) in self.cells.iter().enumerate() {
            let Some(id) = cell else { continue };
            let (row, col) = (i / self.cols, i % self.cols);
            if !self.tiles.contains_key(id) {
                return Err(GameError::InconsistentGridState(format!(
                    "cell ({row}, {col}) refers to unknown tile {}",
                    id.0
                )));
            }
            if !placed.insert(*id) {
                return Err(GameError::InconsistentGridState(format!(
                    "tile {} occupies more than one cell",
                    id.0
                )));
            }
        }
        if let Some(stray) = self
            .tiles
            .values()
            .find(|t| !t.is_dying() && !placed.contains(&t.id))
        {
            return Err(GameError::InconsistentGridState(format!(
                "live tile {} is not placed in any cell",
                stray.id.0
            )));
        }
        Ok(())
    }

    /// Reassign the kinds of all placed tiles in a random order; tiles keep their cells.
    pub fn shuffle_kinds(&mut self, rng: &mut dyn RandomSource) {
        let ids: Vec<TileId> = self.cells.iter().flatten().copied().collect();
        let mut kinds: Vec<TileKind> = ids
            .iter()
            .filter_map(|id| self.tiles.get(id).map(|t| t.kind))
            .collect();
        rng.shuffle_kinds(&mut kinds);
        for (id, kind) in ids.iter().zip(kinds) {
            if let Some(tile) = self.tiles.get_mut(id) {
                tile.kind = kind;
            }
        }
    }

    /// Test hook for corrupting the matrix.
    #[cfg(test)]
    pub fn set_cell(&mut self, row: usize, col: usize, id: Option<TileId>) {
        let i = self.index(row, col);
        self.cells[i] = id;
    }
}
