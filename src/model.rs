use std::time::Instant;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::mc::MonteCarloEngine;
use crate::moneyline::Moneyline;
use crate::profile::{InvalidProfile, PlayerProfile};

/// One priced outcome of the contest, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRow {
    pub player: String,
    pub win_percentage: f64,
    pub moneyline: Moneyline,
}

#[derive(Debug, Error)]
pub enum InvalidParameter {
    #[error("at least one player must be specified")]
    NoPlayers,

    #[error("at least one trial must be specified")]
    NoTrials,

    #[error("duplicate player {0}")]
    DuplicatePlayer(String),
}

#[derive(Debug, Error)]
pub enum OddsError {
    #[error("{0}")]
    InvalidProfile(#[from] InvalidProfile),

    #[error("{0}")]
    InvalidParameter(#[from] InvalidParameter),
}

/// Simulates `trials` contests among `players` and prices each player's chance of
/// landing closest to the pin. Rows come back in field order, one per player. Win
/// percentages are rounded to two decimals independently; their sum may drift from
/// 100 by up to half a basis point per player. The moneyline is struck from the
/// rounded percentage. Passing a seed makes the run reproducible.
pub fn compute_odds(
    players: &[PlayerProfile],
    trials: u64,
    seed: Option<u64>,
) -> Result<Vec<OddsRow>, OddsError> {
    if players.is_empty() {
        return Err(InvalidParameter::NoPlayers.into());
    }
    if trials == 0 {
        return Err(InvalidParameter::NoTrials.into());
    }
    let mut names = FxHashSet::default();
    for player in players {
        player.validate()?;
        if !names.insert(player.name.as_str()) {
            return Err(InvalidParameter::DuplicatePlayer(player.name.clone()).into());
        }
    }

    let start_time = Instant::now();
    let params: Vec<_> = players.iter().map(PlayerProfile::distribution).collect();
    let mut engine = MonteCarloEngine::default()
        .with_trials(trials)
        .with_params(&params);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }
    let wins = engine.simulate();
    debug!(
        "simulated {trials} trials over {} players in {:.3}s",
        players.len(),
        start_time.elapsed().as_millis() as f64 / 1_000.
    );

    let rows = players
        .iter()
        .zip(wins)
        .map(|(player, wins)| {
            let win_percentage = round2(wins as f64 / trials as f64 * 100.0);
            OddsRow {
                player: player.name.clone(),
                win_percentage,
                moneyline: Moneyline::from_percentage(win_percentage),
            }
        })
        .collect();
    Ok(rows)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
