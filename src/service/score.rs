//! Score engine.
//!
//! A driver's score is a weighted linear sum of their race statistics. Weights come from
//! the licence configuration, never from constants, so the formula can be retuned
//! without a release.

use std::fmt;

use crate::model::{driver::DriverStats, licence::ScoreWeights};

/// One term of a score: the input value, its weight and the resulting contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTerm {
    /// Short label used in moderator log lines.
    pub label: &'static str,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Per-term decomposition of a score. The contributions sum to the score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> f64 {
        self.terms.iter().map(|t| t.contribution).sum()
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{}:{}*{}={:.2}",
                term.label, term.value, term.weight, term.contribution
            )?;
        }
        Ok(())
    }
}

/// Computes a driver's score.
///
/// Total for every input: missing statistics were already decoded as zero, and
/// per-100km rates fall back to zero when no distance was driven.
///
/// # Arguments
/// - `stats` - Driver statistics from the rank snapshot
/// - `weights` - Signed weight per term
///
/// # Returns
/// - `f64` - The weighted sum
pub fn compute_score(stats: &DriverStats, weights: &ScoreWeights) -> f64 {
    score_breakdown(stats, weights).total()
}

/// Decomposes a driver's score into its weighted terms.
pub fn score_breakdown(stats: &DriverStats, weights: &ScoreWeights) -> ScoreBreakdown {
    let infractions_rate = per_100km(
        stats.infractions_per_100km,
        stats.infractions,
        stats.kilometers,
    );
    let crashes_rate = per_100km(stats.crashes_per_100km, stats.crashes, stats.kilometers);

    let inputs = [
        ("money", stats.points, weights.points),
        ("wins", stats.wins, weights.wins),
        ("podiums", stats.podiums, weights.podiums),
        ("poles", stats.poles, weights.poles),
        ("flaps", stats.fastest_laps, weights.fastest_laps),
        ("kms", stats.kilometers, weights.kilometers),
        ("infr", stats.infractions, weights.infractions),
        ("crashes", stats.crashes, weights.crashes),
        ("infr/100", infractions_rate, weights.infractions_per_100km),
        ("cr/100", crashes_rate, weights.crashes_per_100km),
    ];

    ScoreBreakdown {
        terms: inputs
            .into_iter()
            .map(|(label, value, weight)| ScoreTerm {
                label,
                value,
                weight,
                // `+ 0.0` normalises -0.0
                contribution: value * weight + 0.0,
            })
            .collect(),
    }
}

/// Uses the precomputed rate when present, otherwise derives it from the totals.
///
/// Zero distance yields a zero rate rather than a division by zero.
fn per_100km(precomputed: Option<f64>, count: f64, kilometers: f64) -> f64 {
    match precomputed {
        Some(rate) => rate,
        None if kilometers > 0.0 => count * 100.0 / kilometers,
        None => 0.0,
    }
}
