//! Driver statistics decoded from the rank snapshot.

use serde::Deserialize;

use crate::model::lenient;

/// Accumulated race statistics for one driver.
///
/// Decoded from the `rank.json` array. Every counter falls back to zero when missing or
/// unreadable so scoring never sees `NaN`; the per-100km rates stay `None` in that case
/// and are derived from the totals instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DriverStats {
    /// Steam64 ID of the driver.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub guid: Option<String>,
    /// In-game display name.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub points: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub wins: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub podiums: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub poles: f64,
    #[serde(
        default,
        rename = "flaps",
        deserialize_with = "lenient::number_or_zero"
    )]
    pub fastest_laps: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub kilometers: f64,
    #[serde(
        default,
        rename = "infr",
        deserialize_with = "lenient::number_or_zero"
    )]
    pub infractions: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub crashes: f64,
    #[serde(
        default,
        rename = "infr_per_100km",
        deserialize_with = "lenient::optional_number"
    )]
    pub infractions_per_100km: Option<f64>,
    #[serde(
        default,
        rename = "cr_per_100km",
        deserialize_with = "lenient::optional_number"
    )]
    pub crashes_per_100km: Option<f64>,
}

impl DriverStats {
    /// Name to show in logs, falling back to the Steam ID.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.guid.as_deref())
            .unwrap_or("Unknown")
    }

    /// Whether this record belongs to the given Steam64 ID.
    pub fn is_driver(&self, steam_id: &str) -> bool {
        self.guid.as_deref() == Some(steam_id)
    }
}
