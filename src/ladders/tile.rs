use std::fmt::Debug;

/// Index of a square along the traversal order, starting at 0.
pub type Tile = u16;

/// Grid position of a tile. `row` 0 is the row the pieces start on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Coord { col, row }
    }

    pub fn manhattan(&self, other: &Coord) -> u16 {
        self.col.abs_diff(other.col) as u16 + self.row.abs_diff(other.row) as u16
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Direction a piece faces while standing on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Direction of a single step from `from` to the grid-adjacent `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Heading> {
        match (to.col as i16 - from.col as i16, to.row as i16 - from.row as i16) {
            (1, 0) => Some(Heading::East),
            (-1, 0) => Some(Heading::West),
            (0, 1) => Some(Heading::North),
            (0, -1) => Some(Heading::South),
            _ => None,
        }
    }

    /// Rotation in radians, counter-clockwise from East.
    pub fn radians(&self) -> f32 {
        match self {
            Heading::East => 0.0,
            Heading::North => std::f32::consts::FRAC_PI_2,
            Heading::West => std::f32::consts::PI,
            Heading::South => -std::f32::consts::FRAC_PI_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan(&Coord::new(3, 4)), 7);
        assert_eq!(Coord::new(9, 2).manhattan(&Coord::new(9, 3)), 1);
        assert_eq!(Coord::new(5, 5).manhattan(&Coord::new(5, 5)), 0);
    }

    #[test]
    fn heading_between_neighbours() {
        let c = Coord::new(4, 4);
        assert_eq!(Heading::between(c, Coord::new(5, 4)), Some(Heading::East));
        assert_eq!(Heading::between(c, Coord::new(3, 4)), Some(Heading::West));
        assert_eq!(Heading::between(c, Coord::new(4, 5)), Some(Heading::North));
        assert_eq!(Heading::between(c, Coord::new(4, 3)), Some(Heading::South));
        assert_eq!(Heading::between(c, Coord::new(6, 4)), None);
        assert_eq!(Heading::between(c, c), None);
    }
}
