//! Lap-time leaderboard snapshot and its rendered view.

use serde::Deserialize;
use std::collections::HashMap;

use crate::model::lenient;

/// A single best-lap entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    /// Driver name as recorded by the server.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    /// Lap time in milliseconds.
    #[serde(default, deserialize_with = "lenient::unsigned_or_zero")]
    pub laptime: u64,
}

/// Snapshot of `leaderboard.json`: track → car → entries.
pub type LeaderboardData = HashMap<String, HashMap<String, Vec<LeaderboardEntry>>>;

/// The (track, car) pair whose leaderboard is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSelection {
    pub track: String,
    pub car: String,
}

impl LeaderboardSelection {
    pub fn new(track: impl Into<String>, car: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            car: car.into(),
        }
    }

    /// The same pair with track and car exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            track: self.car.clone(),
            car: self.track.clone(),
        }
    }
}

/// Rendering limits for the published leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Number of places shown.
    pub top_n: usize,
    /// Maximum characters of a driver name.
    pub name_max_chars: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            name_max_chars: 30,
        }
    }
}

/// One rendered place on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based place.
    pub place: usize,
    /// Truncated driver name.
    pub name: String,
    /// Lap time formatted as `m:ss.mmm`.
    pub lap_time: String,
}

impl LeaderboardRow {
    /// Medal shown next to the podium places.
    pub fn medal(&self) -> Option<&'static str> {
        match self.place {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }
}

/// Leaderboard ready to be posted.
///
/// `selection` is the pair that was actually found in the snapshot, which differs from
/// the configured pair when the configuration had track and car swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardView {
    pub selection: LeaderboardSelection,
    pub top_n: usize,
    pub rows: Vec<LeaderboardRow>,
    pub description: String,
    pub image_url: Option<String>,
}
