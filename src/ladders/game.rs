use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    ladders::{Board, ConfigError, Die, GameConfig, Overshoot, Path, Piece, Presenter, RollError, Rules, Tile},
    misc::Scheduler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    InProgress,
    Won(Piece),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Step { piece: Piece, tile: Tile },
    Settle { piece: Piece },
}

/// Two pieces racing along the zigzag path.
///
/// A roll is accepted at once but plays out over time: one step per tile,
/// then the shortcut/setback check, the turn change and the win check. The
/// owner drives the clock with [`Game::advance`] (or [`Game::finish`] to
/// skip the waiting), and every visible change is reported to a [`Presenter`].
#[derive(Debug, Clone)]
pub struct Game {
    path: Path,
    rules: Rules,
    die: Die,
    overshoot: Overshoot,
    step_delay: Duration,
    settle_delay: Duration,
    positions: [Tile; 2],
    active: Piece,
    phase: Phase,
    pending: Scheduler<Action>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(config.board()?, config))
    }

    /// The 10x10 board with the classic tables, wrapping overshoot and the
    /// default animation pace.
    pub fn classic() -> Self {
        let board = Board { path: Path::classic(), rules: Rules::classic(), die: Die::STANDARD };
        Self::with_board(board, &GameConfig::default())
    }

    fn with_board(board: Board, config: &GameConfig) -> Self {
        Game {
            path: board.path,
            rules: board.rules,
            die: board.die,
            overshoot: config.overshoot,
            step_delay: config.step_delay(),
            settle_delay: config.settle_delay(),
            positions: [0; 2],
            active: Piece::First,
            phase: Phase::InProgress,
            pending: Scheduler::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn die(&self) -> Die {
        self.die
    }

    pub fn overshoot(&self) -> Overshoot {
        self.overshoot
    }

    pub fn position(&self, piece: Piece) -> Tile {
        self.positions[piece.index()]
    }

    pub fn active_piece(&self) -> Piece {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a previous roll is still playing out.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_idle()
    }

    /// Starts moving the active piece `steps` tiles.
    ///
    /// Only the roll itself is reported immediately; the steps and the
    /// resolution follow as the clock advances.
    pub fn roll<P: Presenter + ?Sized>(&mut self, steps: u8, presenter: &mut P) -> Result<(), RollError> {
        if let Err(err) = self.accept(steps) {
            warn!(%err, steps, "roll rejected");
            return Err(err);
        }

        let piece = self.active;
        let walk = self.walk(self.position(piece), steps);
        debug!(?piece, steps, from = self.position(piece), ?walk, "rolled");
        presenter.on_rolled(piece, steps);

        for (i, &tile) in walk.iter().enumerate() {
            let due = self.step_delay.saturating_mul(i as u32 + 1);
            self.pending.schedule(due, Action::Step { piece, tile });
        }
        let settle = self.step_delay.saturating_mul(walk.len() as u32).saturating_add(self.settle_delay);
        self.pending.schedule(settle, Action::Settle { piece });
        Ok(())
    }

    /// Rolls the die for the active piece.
    pub fn roll_die<R, P>(&mut self, rng: &mut R, presenter: &mut P) -> Result<u8, RollError>
    where
        R: Rng + ?Sized,
        P: Presenter + ?Sized,
    {
        let steps = self.die.roll_with(rng);
        self.roll(steps, presenter)?;
        Ok(steps)
    }

    /// Moves the clock and applies everything that became due.
    pub fn advance<P: Presenter + ?Sized>(&mut self, elapsed: Duration, presenter: &mut P) {
        for action in self.pending.advance(elapsed) {
            self.apply(action, presenter);
        }
    }

    /// Applies every pending action without waiting.
    pub fn finish<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for action in self.pending.drain() {
            self.apply(action, presenter);
        }
    }

    /// Back to the start. Anything still pending from the last roll is dropped.
    pub fn reset<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let cancelled = self.pending.cancel();
        self.positions = [0; 2];
        self.active = Piece::First;
        self.phase = Phase::InProgress;
        info!(cancelled, "game reset");
        presenter.on_reset();
    }

    fn accept(&self, steps: u8) -> Result<u8, RollError> {
        if let Phase::Won(winner) = self.phase {
            return Err(RollError::GameAlreadyWon { winner });
        }
        if self.is_busy() {
            return Err(RollError::Busy);
        }
        self.die.check(steps)
    }

    /// Every tile entered on the way, in order. The last one is where the piece lands.
    fn walk(&self, from: Tile, steps: u8) -> Vec<Tile> {
        let len = self.path.len() as u32;
        match self.overshoot {
            Overshoot::Wrap => (1..=steps as u32)
                .map(|i| ((from as u32 + i) % len) as Tile)
                .collect(),
            Overshoot::Clamp => {
                let last = self.path.last_tile();
                let target = last.min(from.saturating_add(steps as Tile));
                (from + 1..=target).collect()
            }
        }
    }

    fn apply<P: Presenter + ?Sized>(&mut self, action: Action, presenter: &mut P) {
        match action {
            Action::Step { piece, tile } => {
                self.positions[piece.index()] = tile;
                debug!(?piece, tile, "step");
                presenter.on_position_changed(piece, tile);
            }
            Action::Settle { piece } => self.settle(piece, presenter),
        }
    }

    // One hop at most: the destination of a jump is never looked up again.
    fn settle<P: Presenter + ?Sized>(&mut self, piece: Piece, presenter: &mut P) {
        let landed = self.position(piece);
        if let Some((jump, to)) = self.rules.classify(landed).jump() {
            self.positions[piece.index()] = to;
            info!(?piece, ?jump, from = landed, to, "special tile");
            presenter.on_special_tile_resolved(piece, jump, landed, to);
        }

        self.active = piece.opposite();
        presenter.on_turn_changed(self.active);

        if self.position(piece) == self.path.last_tile() {
            self.phase = Phase::Won(piece);
            info!(?piece, "victory");
            presenter.on_victory(piece);
        }
    }
}
