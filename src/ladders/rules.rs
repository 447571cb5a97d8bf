use hashbrown::HashMap;

use crate::ladders::{ConfigError, Tile};

/// Which table moved a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jump {
    /// A ladder: leads forward.
    Shortcut,
    /// A snake: leads backward.
    Setback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Shortcut(Tile),
    Setback(Tile),
    Plain,
}

impl TileKind {
    pub fn jump(&self) -> Option<(Jump, Tile)> {
        match *self {
            TileKind::Shortcut(to) => Some((Jump::Shortcut, to)),
            TileKind::Setback(to) => Some((Jump::Setback, to)),
            TileKind::Plain => None,
        }
    }
}

/// Shortcut and setback tables of a board. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    shortcuts: HashMap<Tile, Tile>,
    setbacks: HashMap<Tile, Tile>,
}

impl Rules {
    pub const CLASSIC_SHORTCUTS: [(Tile, Tile); 8] = [
        (5, 14), (9, 31), (20, 38), (28, 84), (40, 59), (51, 67), (63, 81), (71, 91),
    ];

    pub const CLASSIC_SETBACKS: [(Tile, Tile); 8] = [
        (11, 7), (54, 34), (62, 19), (64, 60), (87, 24), (93, 73), (95, 75), (98, 79),
    ];

    /// Validates both tables against a board of `tiles` squares.
    pub fn new(
        tiles: u16,
        shortcuts: impl IntoIterator<Item = (Tile, Tile)>,
        setbacks: impl IntoIterator<Item = (Tile, Tile)>,
    ) -> Result<Self, ConfigError> {
        let last = tiles.saturating_sub(1);
        let shortcuts = Self::table(last, shortcuts, Jump::Shortcut)?;
        let setbacks = Self::table(last, setbacks, Jump::Setback)?;

        if let Some(&tile) = shortcuts.keys().find(|k| setbacks.contains_key(*k)) {
            return Err(ConfigError::DualMembership { tile });
        }

        Ok(Rules { shortcuts, setbacks })
    }

    /// The tables of the 10x10 board.
    pub fn classic() -> Self {
        Rules {
            shortcuts: Self::CLASSIC_SHORTCUTS.into_iter().collect(),
            setbacks: Self::CLASSIC_SETBACKS.into_iter().collect(),
        }
    }

    /// A board without any special tiles.
    pub fn plain() -> Self {
        Rules { shortcuts: HashMap::new(), setbacks: HashMap::new() }
    }

    fn table(
        last: Tile,
        entries: impl IntoIterator<Item = (Tile, Tile)>,
        jump: Jump,
    ) -> Result<HashMap<Tile, Tile>, ConfigError> {
        let mut table = HashMap::new();
        for (from, to) in entries {
            for tile in [from, to] {
                if tile > last {
                    return Err(ConfigError::TileOutOfRange { tile, last });
                }
            }
            if from == to {
                return Err(ConfigError::SelfLoop { tile: from });
            }
            if from == last {
                return Err(ConfigError::SpecialOnFinalTile { tile: from });
            }
            match jump {
                Jump::Shortcut if to < from => {
                    return Err(ConfigError::ShortcutNotAscending { from, to });
                }
                Jump::Setback if to > from => {
                    return Err(ConfigError::SetbackNotDescending { from, to });
                }
                _ => (),
            }
            if table.insert(from, to).is_some() {
                return Err(ConfigError::DuplicateSource { tile: from });
            }
        }
        Ok(table)
    }

    pub fn classify(&self, tile: Tile) -> TileKind {
        if let Some(&to) = self.shortcuts.get(&tile) {
            TileKind::Shortcut(to)
        } else if let Some(&to) = self.setbacks.get(&tile) {
            TileKind::Setback(to)
        } else {
            TileKind::Plain
        }
    }

    /// Shortcut entries ordered by source tile.
    pub fn shortcuts(&self) -> Vec<(Tile, Tile)> {
        Self::sorted(&self.shortcuts)
    }

    /// Setback entries ordered by source tile.
    pub fn setbacks(&self) -> Vec<(Tile, Tile)> {
        Self::sorted(&self.setbacks)
    }

    fn sorted(table: &HashMap<Tile, Tile>) -> Vec<(Tile, Tile)> {
        let mut entries: Vec<_> = table.iter().map(|(&a, &b)| (a, b)).collect();
        entries.sort_unstable();
        entries
    }
}
