use crate::ladders::{Jump, Piece, Tile};

/// Receives everything a game does, in the order it happens.
///
/// The game never draws, plays sounds or writes text itself. All methods
/// default to doing nothing so a presenter only implements what it shows.
pub trait Presenter {
    /// A die result was accepted and the walk is about to start.
    fn on_rolled(&mut self, _piece: Piece, _steps: u8) {}

    /// One step of a walk, or a restored position.
    fn on_position_changed(&mut self, _piece: Piece, _tile: Tile) {}

    fn on_special_tile_resolved(&mut self, _piece: Piece, _jump: Jump, _from: Tile, _to: Tile) {}

    fn on_turn_changed(&mut self, _active: Piece) {}

    fn on_victory(&mut self, _winner: Piece) {}

    fn on_reset(&mut self) {}
}

impl Presenter for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Rolled { piece: Piece, steps: u8 },
    PositionChanged { piece: Piece, tile: Tile },
    SpecialTileResolved { piece: Piece, jump: Jump, from: Tile, to: Tile },
    TurnChanged { active: Piece },
    Victory { winner: Piece },
    Reset,
}

/// Records every event.
impl Presenter for Vec<GameEvent> {
    fn on_rolled(&mut self, piece: Piece, steps: u8) {
        self.push(GameEvent::Rolled { piece, steps });
    }

    fn on_position_changed(&mut self, piece: Piece, tile: Tile) {
        self.push(GameEvent::PositionChanged { piece, tile });
    }

    fn on_special_tile_resolved(&mut self, piece: Piece, jump: Jump, from: Tile, to: Tile) {
        self.push(GameEvent::SpecialTileResolved { piece, jump, from, to });
    }

    fn on_turn_changed(&mut self, active: Piece) {
        self.push(GameEvent::TurnChanged { active });
    }

    fn on_victory(&mut self, winner: Piece) {
        self.push(GameEvent::Victory { winner });
    }

    fn on_reset(&mut self) {
        self.push(GameEvent::Reset);
    }
}
