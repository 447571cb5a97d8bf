use std::{fs, path::Path as FsPath, time::Duration};

use serde::{Deserialize, Serialize};

use crate::ladders::{ConfigError, Die, Path, Piece, Rules, Tile};

/// What happens when a roll would carry a piece past the final tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overshoot {
    /// Continue counting from tile 0.
    #[default]
    Wrap,
    /// Stop on the final tile.
    Clamp,
}

/// Everything a game is built from. Every field defaults to the classic board,
/// so a TOML file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub columns: u8,
    pub rows: u8,
    pub faces: u8,
    pub overshoot: Overshoot,
    pub step_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub names: [String; 2],
    pub shortcuts: Vec<(Tile, Tile)>,
    pub setbacks: Vec<(Tile, Tile)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: Path::CLASSIC_SIZE,
            rows: Path::CLASSIC_SIZE,
            faces: Die::STANDARD.faces(),
            overshoot: Overshoot::Wrap,
            step_delay_ms: 300,
            settle_delay_ms: 100,
            names: ["Mario".to_string(), "Luigi".to_string()],
            shortcuts: Rules::CLASSIC_SHORTCUTS.to_vec(),
            setbacks: Rules::CLASSIC_SETBACKS.to_vec(),
        }
    }
}

/// A configuration that passed validation.
#[derive(Debug, Clone)]
pub struct Board {
    pub path: Path,
    pub rules: Rules,
    pub die: Die,
}

impl GameConfig {
    /// Upper bound for either animation delay: one hour.
    pub const MAX_DELAY_MS: u64 = 60 * 60 * 1000;

    pub fn from_file<P: AsRef<FsPath>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.board()?;
        Ok(config)
    }

    /// A game without special tiles, otherwise classic.
    pub fn plain() -> Self {
        GameConfig { shortcuts: Vec::new(), setbacks: Vec::new(), ..Default::default() }
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        let path = Path::new(self.columns, self.rows)?;
        let rules = Rules::new(path.len(), self.shortcuts.iter().copied(), self.setbacks.iter().copied())?;
        let die = Die::new(self.faces)?;
        for (field, ms) in [("step_delay_ms", self.step_delay_ms), ("settle_delay_ms", self.settle_delay_ms)] {
            if ms > Self::MAX_DELAY_MS {
                return Err(ConfigError::DelayTooLong { field, ms, max: Self::MAX_DELAY_MS });
            }
        }
        Ok(Board { path, rules, die })
    }

    pub fn name(&self, piece: Piece) -> &str {
        &self.names[piece.index()]
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let board = GameConfig::default().board().unwrap();
        assert_eq!(board.path, Path::classic());
        assert_eq!(board.rules, Rules::classic());
        assert_eq!(board.die, Die::STANDARD);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            faces = 8
            overshoot = "clamp"
            names = ["Ana", "Bo"]
            shortcuts = [[3, 40]]
            "#,
        )
        .unwrap();
        assert_eq!(config.faces, 8);
        assert_eq!(config.overshoot, Overshoot::Clamp);
        assert_eq!(config.name(Piece::Second), "Bo");
        assert_eq!(config.shortcuts, vec![(3, 40)]);
        assert_eq!(config.setbacks, Rules::CLASSIC_SETBACKS.to_vec());
        assert_eq!(config.columns, 10);
    }

    #[test]
    fn invalid_tables_fail_to_load() {
        let err = GameConfig::from_toml_str("shortcuts = [[11, 40]]").unwrap_err();
        assert!(matches!(err, ConfigError::DualMembership { tile: 11 }));

        let err = GameConfig::from_toml_str("rows = 5\nsetbacks = [[60, 2]]").unwrap_err();
        assert!(matches!(err, ConfigError::TileOutOfRange { .. }));
    }

    #[test]
    fn unknown_keys_and_bad_syntax_are_parse_errors() {
        assert!(matches!(
            GameConfig::from_toml_str("ladders = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("faces = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn delays() {
        let config = GameConfig::default();
        assert_eq!(config.step_delay(), Duration::from_millis(300));
        assert_eq!(config.settle_delay(), Duration::from_millis(100));
    }

    #[test]
    fn overlong_delays_fail_to_load() {
        let err = GameConfig::from_toml_str("step_delay_ms = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::DelayTooLong { field: "step_delay_ms", .. }));

        let config = GameConfig { settle_delay_ms: GameConfig::MAX_DELAY_MS + 1, ..GameConfig::default() };
        assert!(matches!(
            config.board(),
            Err(ConfigError::DelayTooLong { field: "settle_delay_ms", .. })
        ));

        let config = GameConfig { step_delay_ms: GameConfig::MAX_DELAY_MS, ..GameConfig::default() };
        assert!(config.board().is_ok());
    }
}
