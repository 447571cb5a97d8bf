use hashbrown::HashMap;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{info, warn};

use crate::ladders::{ConfigError, Game, GameConfig, Jump, Phase, Piece, Presenter, Tile};

/// Games still running after this many rolls are given up on.
pub const ROLL_CAP: u32 = 10_000;

/// Outcome of one game played to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub winner: Option<Piece>,
    pub rolls: u32,
    pub shortcuts: u32,
    pub setbacks: u32,
}

#[derive(Debug, Default)]
struct Tally {
    rolls: u32,
    shortcuts: u32,
    setbacks: u32,
}

impl Presenter for Tally {
    fn on_rolled(&mut self, _piece: Piece, _steps: u8) {
        self.rolls += 1;
    }

    fn on_special_tile_resolved(&mut self, _piece: Piece, jump: Jump, _from: Tile, _to: Tile) {
        match jump {
            Jump::Shortcut => self.shortcuts += 1,
            Jump::Setback => self.setbacks += 1,
        }
    }
}

/// Rolls for both pieces until someone wins or the roll cap is hit,
/// skipping all animation delays.
pub fn play_out<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Record {
    let mut tally = Tally::default();
    game.finish(&mut tally);

    while game.phase() == Phase::InProgress && tally.rolls < ROLL_CAP {
        if let Err(err) = game.roll_die(rng, &mut tally) {
            warn!(%err, rolls = tally.rolls, "playout stopped early");
            break;
        }
        game.finish(&mut tally);
    }

    let winner = match game.phase() {
        Phase::Won(piece) => Some(piece),
        Phase::InProgress => None,
    };
    Record { winner, rolls: tally.rolls, shortcuts: tally.shortcuts, setbacks: tally.setbacks }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: u64,
    pub wins: [u64; 2],
    pub unfinished: u64,
    pub total_rolls: u64,
    /// Shortest finished game, in rolls.
    pub min_rolls: Option<u32>,
    pub max_rolls: u32,
    pub shortcuts: u64,
    pub setbacks: u64,
    /// Finished games by number of rolls.
    pub lengths: HashMap<u32, u64>,
}

impl Summary {
    pub fn record(mut self, record: Record) -> Self {
        self.games += 1;
        self.total_rolls += record.rolls as u64;
        self.shortcuts += record.shortcuts as u64;
        self.setbacks += record.setbacks as u64;
        match record.winner {
            Some(piece) => {
                self.wins[piece.index()] += 1;
                self.min_rolls = Some(self.min_rolls.map_or(record.rolls, |m| m.min(record.rolls)));
                self.max_rolls = self.max_rolls.max(record.rolls);
                *self.lengths.entry(record.rolls).or_insert(0) += 1;
            }
            None => self.unfinished += 1,
        }
        self
    }

    pub fn merge(mut self, other: Summary) -> Self {
        self.games += other.games;
        self.wins[0] += other.wins[0];
        self.wins[1] += other.wins[1];
        self.unfinished += other.unfinished;
        self.total_rolls += other.total_rolls;
        self.min_rolls = match (self.min_rolls, other.min_rolls) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_rolls = self.max_rolls.max(other.max_rolls);
        self.shortcuts += other.shortcuts;
        self.setbacks += other.setbacks;
        for (rolls, count) in other.lengths {
            *self.lengths.entry(rolls).or_insert(0) += count;
        }
        self
    }

    pub fn win_rate(&self, piece: Piece) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[piece.index()] as f64 / self.games as f64 * 100.0
    }

    pub fn average_rolls(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rolls as f64 / self.games as f64
    }

    /// Most common game length among finished games.
    pub fn mode_rolls(&self) -> Option<u32> {
        self.lengths
            .iter()
            .max_by(|(r1, c1), (r2, c2)| c1.cmp(c2).then(r2.cmp(r1)))
            .map(|(&rolls, _)| rolls)
    }
}

/// Plays `games` independent games in parallel. Game `i` rolls with a
/// generator seeded from `seed + i`, so the result only depends on the inputs.
pub fn simulate(config: &GameConfig, games: u64, seed: u64) -> Result<Summary, ConfigError> {
    let template = Game::new(config)?;

    let summary = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut game = template.clone();
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            play_out(&mut game, &mut rng)
        })
        .fold(Summary::default, Summary::record)
        .reduce(Summary::default, Summary::merge);

    info!(
        games = summary.games,
        unfinished = summary.unfinished,
        average_rolls = summary.average_rolls(),
        "simulation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladders::Overshoot;

    #[test]
    fn play_out_reaches_a_winner() {
        let mut game = Game::classic();
        let mut rng = StdRng::seed_from_u64(42);
        let record = play_out(&mut game, &mut rng);

        let winner = record.winner.unwrap();
        assert_eq!(game.phase(), Phase::Won(winner));
        assert_eq!(game.position(winner), 99);
        assert!(record.rolls > 0);
    }

    #[test]
    fn simulate_is_deterministic() {
        let config = GameConfig::default();
        let a = simulate(&config, 200, 9).unwrap();
        let b = simulate(&config, 200, 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.games, 200);
        assert_eq!(a.wins[0] + a.wins[1] + a.unfinished, 200);
    }

    #[test]
    fn clamped_plain_board_always_finishes() {
        let config = GameConfig { overshoot: Overshoot::Clamp, ..GameConfig::plain() };
        let summary = simulate(&config, 100, 1).unwrap();
        assert_eq!(summary.unfinished, 0);
        assert_eq!(summary.shortcuts + summary.setbacks, 0);
        // 99 tiles at most 6 per roll, both pieces rolling.
        assert!(summary.min_rolls.unwrap() >= 2 * 16 + 1);
        assert_eq!(summary.lengths.values().sum::<u64>(), 100);
    }

    #[test]
    fn merge_matches_sequential_recording() {
        let records = [
            Record { winner: Some(Piece::First), rolls: 40, shortcuts: 2, setbacks: 1 },
            Record { winner: Some(Piece::Second), rolls: 31, shortcuts: 0, setbacks: 3 },
            Record { winner: None, rolls: ROLL_CAP, shortcuts: 5, setbacks: 5 },
            Record { winner: Some(Piece::First), rolls: 40, shortcuts: 1, setbacks: 0 },
        ];
        let sequential = records.iter().fold(Summary::default(), |s, &r| s.record(r));
        let left = Summary::default().record(records[0]).record(records[1]);
        let right = Summary::default().record(records[2]).record(records[3]);
        assert_eq!(left.merge(right), sequential);

        assert_eq!(sequential.wins, [2, 1]);
        assert_eq!(sequential.unfinished, 1);
        assert_eq!(sequential.min_rolls, Some(31));
        assert_eq!(sequential.max_rolls, 40);
        assert_eq!(sequential.mode_rolls(), Some(40));
        assert_eq!(sequential.win_rate(Piece::First), 50.0);
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = GameConfig { faces: 0, ..GameConfig::default() };
        assert!(matches!(simulate(&config, 10, 0), Err(ConfigError::NoFaces)));
    }

    #[test]
    fn overlong_delays_are_reported_before_playing() {
        let config = GameConfig { step_delay_ms: u64::MAX, settle_delay_ms: u64::MAX, ..GameConfig::default() };
        assert!(matches!(simulate(&config, 500, 0), Err(ConfigError::DelayTooLong { .. })));
    }

    #[test]
    fn play_out_stops_on_a_decided_game() {
        let mut game = Game::new(&GameConfig { overshoot: Overshoot::Clamp, ..GameConfig::plain() }).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let first = play_out(&mut game, &mut rng);
        let again = play_out(&mut game, &mut rng);
        assert_eq!(again.winner, first.winner);
        assert_eq!(again.rolls, 0);
    }
}
