use crate::{
    config::{LicenceConfig, RemoteFiles},
    model::{
        driver::DriverStats,
        leaderboard::{LeaderboardSelection, PublisherConfig},
    },
};

mod settings;

const RANK_FILE: &str = "kissmyrank/rank.json";
const LEADERBOARD_FILE: &str = "kissmyrank/leaderboard.json";
const MESSAGE_ID_FILE: &str = "discord_message_id.txt";

const PLATINUM_ROLE: u64 = 1397007839456657478;
const GOLD_ROLE: u64 = 1396647621187076248;
const SILVER_ROLE: u64 = 1396647665172742164;
const BRONZE_ROLE: u64 = 1396647702766420061;

fn remote_files() -> RemoteFiles {
    RemoteFiles {
        rank: RANK_FILE.to_string(),
        leaderboard: LEADERBOARD_FILE.to_string(),
        message_id: MESSAGE_ID_FILE.to_string(),
    }
}

/// Platinum 700, Gold 500, Silver 200, Bronze 0 with the default weights.
fn licence_config() -> LicenceConfig {
    let raw = format!(
        r#"{{
            "tiers": [
                {{ "name": "Platinum Licence", "min_score": 700, "role_id": "{}" }},
                {{ "name": "Gold Licence", "min_score": 500, "role_id": "{}" }},
                {{ "name": "Silver Licence", "min_score": 200, "role_id": "{}" }},
                {{ "name": "Bronze Licence", "min_score": 0, "role_id": "{}" }}
            ]
        }}"#,
        PLATINUM_ROLE, GOLD_ROLE, SILVER_ROLE, BRONZE_ROLE
    );
    LicenceConfig::from_json("licences.json", &raw).unwrap()
}

fn publisher_config() -> PublisherConfig {
    PublisherConfig::default()
}

fn selection() -> LeaderboardSelection {
    LeaderboardSelection::new("ks_nurburgring_layout_gp_a", "tatuusfa1")
}

/// Stats scoring exactly 712 with the default weights: 500 + 50 + 72 + 30 + 60.
fn platinum_stats(guid: &str) -> DriverStats {
    DriverStats {
        guid: Some(guid.to_string()),
        name: Some("Max".to_string()),
        points: 1000.0,
        wins: 5.0,
        podiums: 9.0,
        poles: 2.0,
        fastest_laps: 5.0,
        ..Default::default()
    }
}

/// Stats scoring exactly 250 with the default weights.
fn silver_stats(guid: &str) -> DriverStats {
    DriverStats {
        guid: Some(guid.to_string()),
        name: Some("Lando".to_string()),
        points: 500.0,
        ..Default::default()
    }
}

/// Serializes stats the way the rank plugin writes them.
fn rank_json(stats: &[DriverStats]) -> String {
    let records: Vec<serde_json::Value> = stats
        .iter()
        .map(|s| {
            serde_json::json!({
                "guid": s.guid,
                "name": s.name,
                "points": s.points,
                "wins": s.wins,
                "podiums": s.podiums,
                "poles": s.poles,
                "flaps": s.fastest_laps,
                "kilometers": s.kilometers,
                "infr": s.infractions,
                "crashes": s.crashes,
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}
