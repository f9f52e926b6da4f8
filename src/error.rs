//! Engine error taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A tap or neighbour query outside the grid. Absorbed as "no hit" by the tap handler.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidCellReference {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Merge-to-bomb requested with no matched tiles.
    #[error("refusing to merge an empty match into a bomb")]
    EmptyMatchMerge,

    /// Active tile set and cell matrix disagree. Fatal; the session halts.
    #[error("inconsistent grid state: {0}")]
    InconsistentGridState(String),
}
