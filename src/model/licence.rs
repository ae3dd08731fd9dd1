//! Licence tiers and scoring weights.
//!
//! The tier table is validated once when the licence configuration is loaded, which is
//! what lets [`TierTable::classify`] be a total function: every score maps to exactly one
//! tier.

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::config::ConfigError;

/// A named licence with the minimum score (inclusive) needed to hold it.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenceTier {
    /// Display name, e.g. `Gold Licence`.
    pub name: String,
    /// Minimum score (inclusive) for this tier.
    pub min_score: f64,
    /// Discord role granted to holders of this tier.
    pub role_id: u64,
}

/// Ordered, validated list of licence tiers.
///
/// Tiers are stored in strictly descending threshold order and the last tier has a
/// threshold of zero or lower.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<LicenceTier>,
    /// Last entry of `tiers`.
    floor: LicenceTier,
}

impl TierTable {
    /// Validates and wraps a tier list.
    ///
    /// # Arguments
    /// - `tiers` - Tiers in descending threshold order, floor tier last
    ///
    /// # Returns
    /// - `Ok(TierTable)` - Table satisfying every ordering invariant
    /// - `Err(ConfigError::EmptyTierTable)` - No tiers given
    /// - `Err(ConfigError::NonFiniteThreshold)` - A threshold is NaN or infinite
    /// - `Err(ConfigError::UnorderedTiers)` - Thresholds are not strictly descending
    /// - `Err(ConfigError::MissingFloorTier)` - Lowest threshold is above zero
    /// - `Err(ConfigError::DuplicateTierRole)` - Two tiers share a role
    pub fn new(tiers: Vec<LicenceTier>) -> Result<Self, ConfigError> {
        let Some(floor) = tiers.last() else {
            return Err(ConfigError::EmptyTierTable);
        };

        if let Some(tier) = tiers.iter().find(|t| !t.min_score.is_finite()) {
            return Err(ConfigError::NonFiniteThreshold(tier.name.clone()));
        }

        for pair in tiers.windows(2) {
            let (previous, tier) = (&pair[0], &pair[1]);
            if tier.min_score >= previous.min_score {
                return Err(ConfigError::UnorderedTiers {
                    tier: tier.name.clone(),
                    min_score: tier.min_score,
                    previous: previous.name.clone(),
                    previous_min_score: previous.min_score,
                });
            }
        }

        if floor.min_score > 0.0 {
            return Err(ConfigError::MissingFloorTier {
                tier: floor.name.clone(),
                min_score: floor.min_score,
            });
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            if !seen.insert(tier.role_id) {
                return Err(ConfigError::DuplicateTierRole {
                    role_id: tier.role_id,
                });
            }
        }

        let floor = floor.clone();

        Ok(Self { tiers, floor })
    }

    /// Returns the tier for a score.
    ///
    /// Picks the first tier (highest threshold first) whose threshold is at or below the
    /// score. Scores below the floor threshold, including `NaN`, land in the floor tier.
    pub fn classify(&self, score: f64) -> &LicenceTier {
        self.tiers
            .iter()
            .find(|tier| tier.min_score <= score)
            .unwrap_or_else(|| self.floor())
    }

    /// Lowest tier of the table.
    pub fn floor(&self) -> &LicenceTier {
        &self.floor
    }

    /// All tiers, highest threshold first.
    pub fn tiers(&self) -> &[LicenceTier] {
        &self.tiers
    }

    /// Every role managed by the tier table.
    pub fn role_ids(&self) -> Vec<u64> {
        self.tiers.iter().map(|t| t.role_id).collect()
    }
}

/// Signed weight for each scoring term.
///
/// Positive weights reward, negative weights penalise. The per-100km weights are steeper
/// than the raw totals so a long-distance driver cannot dilute a poor safety record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub points: f64,
    pub wins: f64,
    pub podiums: f64,
    pub poles: f64,
    pub fastest_laps: f64,
    pub kilometers: f64,
    pub infractions: f64,
    pub crashes: f64,
    pub infractions_per_100km: f64,
    pub crashes_per_100km: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            points: 0.5,
            wins: 10.0,
            podiums: 8.0,
            poles: 15.0,
            fastest_laps: 12.0,
            kilometers: 0.2,
            infractions: -2.0,
            crashes: -3.0,
            infractions_per_100km: -20.0,
            crashes_per_100km: -25.0,
        }
    }
}
