use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::interp;

const BASE_MEAN: [f64; <SkillTier as strum::EnumCount>::COUNT] = [12.0, 20.0, 30.0, 40.0];
const DRIVE_DOMAIN: (f64, f64) = (200.0, 320.0);
const DRIVE_ADJUST: (f64, f64) = (4.0, -2.0);
const ROUNDS_DOMAIN: (f64, f64) = (0.0, 100.0);
const STDDEV_RANGE: (f64, f64) = (12.0, 6.0);

/// Self-assessed playing standard, the dominant term of the expected shot distance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Ordinal,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum SkillTier {
    Scratch,
    SingleDigit,
    BogeyGolfer,
    HighHandicap,
}
impl SkillTier {
    pub fn base_mean(&self) -> f64 {
        BASE_MEAN[self.ordinal()]
    }
}

impl From<SkillTier> for usize {
    fn from(tier: SkillTier) -> Self {
        tier.ordinal()
    }
}

#[derive(Debug, Error)]
pub enum InvalidProfile {
    #[error("player name is blank")]
    BlankName,

    #[error("non-finite {field} {value} for {name}")]
    NonFinite {
        field: &'static str,
        value: f64,
        name: String,
    },
}

/// Qualitative attributes captured for one golfer. `driving_distance` is meaningful
/// over 200 to 320 yards and `rounds_played` over 0 to 100 rounds; values beyond
/// those bounds are clamped when the distribution is derived, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub skill: SkillTier,
    pub driving_distance: f64,
    pub rounds_played: f64,
}
impl PlayerProfile {
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        if self.name.trim().is_empty() {
            return Err(InvalidProfile::BlankName);
        }
        self.check_finite("driving_distance", self.driving_distance)?;
        self.check_finite("rounds_played", self.rounds_played)?;
        Ok(())
    }

    fn check_finite(&self, field: &'static str, value: f64) -> Result<(), InvalidProfile> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(InvalidProfile::NonFinite {
                field,
                value,
                name: self.name.clone(),
            })
        }
    }

    /// Derives the shot-distance distribution. Longer hitters skew closer to the pin;
    /// frequent players spread less.
    pub fn distribution(&self) -> DistributionParams {
        let mean = self.skill.base_mean()
            + interp::lerp(self.driving_distance, DRIVE_DOMAIN, DRIVE_ADJUST);
        let stddev = interp::lerp(self.rounds_played, ROUNDS_DOMAIN, STDDEV_RANGE);
        DistributionParams { mean, stddev }
    }
}

impl FromStr for PlayerProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut frags = s.splitn(4, ':');
        let name = frags.next().context("no name to parse")?;
        if name.is_empty() {
            bail!("no name to parse in {s:?}");
        }
        let skill = frags
            .next()
            .with_context(|| format!("no skill tier in {s:?}"))?;
        let skill = skill
            .parse::<SkillTier>()
            .with_context(|| format!("unsupported skill tier {skill:?}"))?;
        let driving_distance = frags
            .next()
            .with_context(|| format!("no driving distance in {s:?}"))?
            .parse()?;
        let rounds_played = frags
            .next()
            .with_context(|| format!("no rounds played in {s:?}"))?
            .parse()?;
        Ok(Self {
            name: name.to_string(),
            skill,
            driving_distance,
            rounds_played,
        })
    }
}

/// Normal distribution of a player's distance from the pin, in yards. Derived from a
/// [`PlayerProfile`] and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionParams {
    pub mean: f64,
    pub stddev: f64,
}

pub fn read_roster(path: impl AsRef<Path>) -> anyhow::Result<Vec<PlayerProfile>> {
    let file = File::open(path)?;
    let players = serde_json::from_reader(file)?;
    Ok(players)
}
