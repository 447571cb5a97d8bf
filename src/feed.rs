use snakes_ladders::ladders::{Jump, Piece, Presenter, Rules, Tile, TileKind};
use tracing::{debug, info};

/// Text shown next to the board, kept current from game events.
///
/// There is no audio here: every cue the board would play is emitted as a
/// `cue` field on a log event instead.
#[derive(Debug, Clone)]
pub struct Feed {
    names: [String; 2],
    positions: [Tile; 2],
    active: Piece,
    winner: Option<Piece>,
    last_roll: Option<(Piece, u8)>,
    message: String,
}

impl Feed {
    pub fn new(names: [String; 2]) -> Self {
        Feed {
            names,
            positions: [0; 2],
            active: Piece::First,
            winner: None,
            last_roll: None,
            message: String::new(),
        }
    }

    pub fn name(&self, piece: Piece) -> &str {
        &self.names[piece.index()]
    }

    pub fn turn_line(&self) -> String {
        format!("Turn: {} (Player {})", self.name(self.active), self.active.index() + 1)
    }

    pub fn status_line(&self, piece: Piece, rules: &Rules) -> String {
        let tile = self.positions[piece.index()];
        let hint = match rules.classify(tile) {
            TileKind::Shortcut(to) => format!(" (shortcut to {to})"),
            TileKind::Setback(to) => format!(" (setback to {to})"),
            TileKind::Plain => String::new(),
        };
        format!("{}: tile {tile}{hint}", self.name(piece))
    }

    pub fn roll_line(&self) -> Option<String> {
        self.last_roll
            .map(|(piece, steps)| format!("{} rolled {steps}", self.name(piece)))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner(&self) -> Option<String> {
        self.winner.map(|piece| format!("{} (Player {}) wins!", self.name(piece), piece.index() + 1))
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl Presenter for Feed {
    fn on_rolled(&mut self, piece: Piece, steps: u8) {
        self.last_roll = Some((piece, steps));
        self.message.clear();
        info!(cue = "dice", player = self.name(piece), steps);
    }

    fn on_position_changed(&mut self, piece: Piece, tile: Tile) {
        self.positions[piece.index()] = tile;
        debug!(cue = "move", player = self.name(piece), tile);
    }

    fn on_special_tile_resolved(&mut self, piece: Piece, jump: Jump, _from: Tile, to: Tile) {
        self.positions[piece.index()] = to;
        self.message = match jump {
            Jump::Shortcut => format!("Shortcut! {} climbs to tile {to}", self.name(piece)),
            Jump::Setback => format!("Setback! {} slides down to tile {to}", self.name(piece)),
        };
        let cue = match jump {
            Jump::Shortcut => "shortcut",
            Jump::Setback => "setback",
        };
        info!(cue, player = self.name(piece), to);
    }

    fn on_turn_changed(&mut self, active: Piece) {
        self.active = active;
    }

    fn on_victory(&mut self, winner: Piece) {
        self.winner = Some(winner);
        self.message = "Press R to play again".to_string();
    }

    fn on_reset(&mut self) {
        self.positions = [0; 2];
        self.active = Piece::First;
        self.winner = None;
        self.last_roll = None;
        self.message = "New game".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakes_ladders::ladders::{Game, GameConfig};

    fn feed() -> Feed {
        Feed::new(["Mario".to_string(), "Luigi".to_string()])
    }

    #[test]
    fn follows_a_shortcut() {
        let config = GameConfig { shortcuts: vec![(5, 14)], setbacks: vec![], ..GameConfig::default() };
        let mut game = Game::new(&config).unwrap();
        let mut feed = feed();
        game.roll(5, &mut feed).unwrap();
        game.finish(&mut feed);

        assert_eq!(feed.status_line(Piece::First, game.rules()), "Mario: tile 14");
        assert_eq!(feed.message(), "Shortcut! Mario climbs to tile 14");
        assert_eq!(feed.turn_line(), "Turn: Luigi (Player 2)");
        assert_eq!(feed.roll_line().as_deref(), Some("Mario rolled 5"));
    }

    #[test]
    fn hints_special_tiles() {
        let rules = Rules::classic();
        let mut feed = feed();
        feed.on_position_changed(Piece::Second, 98);
        assert_eq!(feed.status_line(Piece::Second, &rules), "Luigi: tile 98 (setback to 79)");
        feed.on_position_changed(Piece::Second, 9);
        assert_eq!(feed.status_line(Piece::Second, &rules), "Luigi: tile 9 (shortcut to 31)");
    }

    #[test]
    fn victory_and_reset() {
        let mut feed = feed();
        feed.on_victory(Piece::Second);
        assert_eq!(feed.banner().as_deref(), Some("Luigi (Player 2) wins!"));
        feed.on_reset();
        assert_eq!(feed.banner(), None);
        assert_eq!(feed.turn_line(), "Turn: Mario (Player 1)");
        assert_eq!(feed.roll_line(), None);
    }
}
