use tinyrand::{Rand, Seeded, StdRand};

use crate::gaussian;
use crate::profile::DistributionParams;

pub const DEFAULT_TRIALS: u64 = 10_000;

/// A reusable, seedable simulator of closest-to-the-pin contests over a fixed set of
/// shot-distance distributions.
pub struct MonteCarloEngine<'a> {
    trials: u64,
    params: Option<&'a [DistributionParams]>,
    rand: StdRand,
}
impl<'a> Default for MonteCarloEngine<'a> {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            params: None,
            rand: StdRand::default(),
        }
    }
}
impl<'a> MonteCarloEngine<'a> {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_params(mut self, params: &'a [DistributionParams]) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rand = StdRand::seed(seed);
        self
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Runs the full set of trials, returning each player's win tally in field order.
    /// The tallies sum to the trial count.
    pub fn simulate(&mut self) -> Vec<u64> {
        let params = self.params.expect("no distribution params specified");
        let distances = sample_distances(params, self.trials, &mut self.rand);
        tally_wins(&distances, params.len())
    }
}

/// Samples every player's distance from the pin across `trials` contests. The returned
/// buffer is player-major: player `p`'s samples occupy `p * trials..(p + 1) * trials`.
pub fn sample_distances(
    params: &[DistributionParams],
    trials: u64,
    rand: &mut impl Rand,
) -> Vec<f64> {
    let (len, overflow) = params.len().overflowing_mul(trials as usize);
    assert!(
        !overflow,
        "allocation of a {}x{trials} sample buffer failed due to overflow",
        params.len()
    );
    let mut distances = Vec::with_capacity(len);
    for param in params {
        for _ in 0..trials {
            distances.push(gaussian::sample(param.mean, param.stddev, rand));
        }
    }
    distances
}

/// Scans each trial for its winner: the player with the least distance from the pin.
/// An exact tie goes to the earliest player in the field.
pub fn tally_wins(distances: &[f64], players: usize) -> Vec<u64> {
    debug_assert!(players > 0);
    debug_assert_eq!(0, distances.len() % players);

    let trials = distances.len() / players;
    let mut wins = vec![0; players];
    for trial in 0..trials {
        let mut winner = 0;
        let mut closest = distances[trial];
        for player in 1..players {
            let distance = distances[player * trials + trial];
            if distance < closest {
                closest = distance;
                winner = player;
            }
        }
        wins[winner] += 1;
    }
    wins
}
