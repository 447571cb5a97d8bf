use std::path::PathBuf;

use thiserror::Error;

use crate::ladders::{Coord, Piece, Tile};

/// Reasons a roll is refused. A refused roll never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("roll of {steps} is outside 1..={faces}")]
    InvalidRoll { steps: u8, faces: u8 },

    #[error("game already decided: {winner:?} has won")]
    GameAlreadyWon { winner: Piece },

    #[error("previous move is still in progress")]
    Busy,
}

/// A board, table or die that cannot be played on.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {columns}x{rows} must have between 2 and {} tiles", Tile::MAX)]
    GridSize { columns: u8, rows: u8 },

    #[error("coordinate {coord:?} is not on the path")]
    OffBoard { coord: Coord },

    #[error("tile {tile} is outside 0..={last}")]
    TileOutOfRange { tile: Tile, last: Tile },

    #[error("tile {tile} maps onto itself")]
    SelfLoop { tile: Tile },

    #[error("tile {tile} is listed more than once in the same table")]
    DuplicateSource { tile: Tile },

    #[error("tile {tile} is both a shortcut and a setback")]
    DualMembership { tile: Tile },

    #[error("shortcut {from} -> {to} does not lead forward")]
    ShortcutNotAscending { from: Tile, to: Tile },

    #[error("setback {from} -> {to} does not lead backward")]
    SetbackNotDescending { from: Tile, to: Tile },

    #[error("final tile {tile} cannot be a special tile")]
    SpecialOnFinalTile { tile: Tile },

    #[error("a die needs at least one face")]
    NoFaces,

    #[error("{field} of {ms} ms is longer than {max} ms")]
    DelayTooLong { field: &'static str, ms: u64, max: u64 },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
