use rand::{Rng, random_range};

use crate::ladders::{ConfigError, RollError};

/// A single fair die numbered `1..=faces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    faces: u8,
}

impl Die {
    pub const STANDARD: Die = Die { faces: 6 };

    pub fn new(faces: u8) -> Result<Self, ConfigError> {
        if faces == 0 {
            return Err(ConfigError::NoFaces);
        }
        Ok(Die { faces })
    }

    pub fn faces(&self) -> u8 {
        self.faces
    }

    pub fn roll(&self) -> u8 {
        random_range(1..=self.faces)
    }

    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.random_range(1..=self.faces)
    }

    /// Accepts `steps` only if this die could have shown it.
    pub fn check(&self, steps: u8) -> Result<u8, RollError> {
        if (1..=self.faces).contains(&steps) {
            Ok(steps)
        } else {
            Err(RollError::InvalidRoll { steps, faces: self.faces })
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        Die::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_die_roll() {
        let die = Die::STANDARD;
        for _ in 1..=100 {
            let value = die.roll();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn seeded_rolls_repeat() {
        let die = Die::new(12).unwrap();
        let a: Vec<u8> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..50).map(|_| die.roll_with(&mut rng)).collect()
        };
        let b: Vec<u8> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..50).map(|_| die.roll_with(&mut rng)).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (1..=12).contains(v)));
    }

    #[test]
    fn check_bounds() {
        let die = Die::STANDARD;
        assert_eq!(die.check(1), Ok(1));
        assert_eq!(die.check(6), Ok(6));
        assert_eq!(die.check(0), Err(RollError::InvalidRoll { steps: 0, faces: 6 }));
        assert_eq!(die.check(7), Err(RollError::InvalidRoll { steps: 7, faces: 6 }));
    }

    #[test]
    fn zero_faces_rejected() {
        assert!(matches!(Die::new(0), Err(ConfigError::NoFaces)));
    }
}
