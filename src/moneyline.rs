use std::fmt::{Display, Formatter};

/// American-style price on a single outcome. The sign convention follows the
/// bookmaker's ledger: a negative quote is the stake needed to win 100, a positive
/// quote is the winnings on a 100 stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moneyline {
    /// The outcome never paid out; no finite price exists.
    NoChance,
    /// Positive quote.
    Underdog(u32),
    /// Negative quote.
    Favorite(u32),
    /// The outcome always paid out; no finite price exists.
    Certainty,
}
impl Moneyline {
    /// Quotes a win percentage in `0.0..=100.0`. An even chance quotes as the `-100`
    /// favorite; the two endpoints collapse to the infinite quotes, sidestepping the
    /// division by zero in the favorite formula at 100.
    pub fn from_percentage(pct: f64) -> Self {
        debug_assert!((0.0..=100.0).contains(&pct), "invalid percentage {pct}");
        if pct == 0.0 {
            Moneyline::NoChance
        } else if pct == 100.0 {
            Moneyline::Certainty
        } else if pct >= 50.0 {
            Moneyline::Favorite(f64::round(100.0 * pct / (100.0 - pct)) as u32)
        } else {
            Moneyline::Underdog(f64::round(100.0 * (100.0 - pct) / pct) as u32)
        }
    }

    /// The win percentage this quote implies, subject to the rounding applied when
    /// the quote was struck.
    pub fn implied_percentage(&self) -> f64 {
        match self {
            Moneyline::NoChance => 0.0,
            Moneyline::Underdog(quote) => 100.0 * 100.0 / (*quote as f64 + 100.0),
            Moneyline::Favorite(quote) => 100.0 * *quote as f64 / (*quote as f64 + 100.0),
            Moneyline::Certainty => 100.0,
        }
    }
}

impl Display for Moneyline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Moneyline::NoChance => write!(f, "∞"),
            Moneyline::Underdog(quote) => write!(f, "+{quote}"),
            Moneyline::Favorite(quote) => write!(f, "-{quote}"),
            Moneyline::Certainty => write!(f, "-∞"),
        }
    }
}
