use crate::ladders::{ConfigError, Coord, Heading, Tile};

/// The fixed zigzag traversal of the grid.
///
/// Row 0 runs left to right, row 1 right to left, and so on, so consecutive
/// tiles are always grid neighbours. Built once; the lookup in both directions
/// is a plain table access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    columns: u8,
    rows: u8,
    coords: Vec<Coord>,
    // Indexed by `row * columns + col`.
    tiles: Vec<Tile>,
}

impl Path {
    pub const CLASSIC_SIZE: u8 = 10;

    pub fn new(columns: u8, rows: u8) -> Result<Self, ConfigError> {
        let len = columns as usize * rows as usize;
        if len < 2 || len > Tile::MAX as usize {
            return Err(ConfigError::GridSize { columns, rows });
        }

        Ok(Self::zigzag(columns, rows))
    }

    /// The 10x10 board.
    pub fn classic() -> Self {
        Self::zigzag(Self::CLASSIC_SIZE, Self::CLASSIC_SIZE)
    }

    fn zigzag(columns: u8, rows: u8) -> Self {
        let len = columns as usize * rows as usize;
        let mut coords = Vec::with_capacity(len);
        let mut tiles = vec![0; len];
        for row in 0..rows {
            for x in 0..columns {
                let col = if row % 2 == 0 { x } else { columns - 1 - x };
                tiles[row as usize * columns as usize + col as usize] = coords.len() as Tile;
                coords.push(Coord::new(col, row));
            }
        }
        Path { columns, rows, coords, tiles }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of tiles on the path.
    pub fn len(&self) -> u16 {
        self.coords.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The tile a piece has to reach to win.
    pub fn last_tile(&self) -> Tile {
        self.len() - 1
    }

    pub fn coord_of(&self, tile: Tile) -> Option<Coord> {
        self.coords.get(tile as usize).copied()
    }

    /// Coordinates outside the grid are a configuration fault, never a default tile.
    pub fn tile_of(&self, coord: Coord) -> Result<Tile, ConfigError> {
        if coord.col >= self.columns || coord.row >= self.rows {
            return Err(ConfigError::OffBoard { coord });
        }
        Ok(self.tiles[coord.row as usize * self.columns as usize + coord.col as usize])
    }

    /// The direction of the step that enters `tile`. The first tile faces North.
    pub fn heading(&self, tile: Tile) -> Option<Heading> {
        let to = self.coord_of(tile)?;
        match tile.checked_sub(1).and_then(|prev| self.coord_of(prev)) {
            Some(from) => Heading::between(from, to),
            None => Some(Heading::North),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tile, Coord)> + '_ {
        self.coords.iter().enumerate().map(|(i, &c)| (i as Tile, c))
    }
}
