#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    First,
    Second,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::First, Piece::Second];

    pub fn opposite(&self) -> Piece {
        match self {
            Piece::First => Piece::Second,
            Piece::Second => Piece::First,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Piece::First => 0,
            Piece::Second => 1,
        }
    }
}
