//! Moderator command parsing.

/// A command typed in the mod-tools channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModCommand {
    /// `!changetrack [track] <car>`; a missing track means the configured default.
    ChangeTrack { track: Option<String>, car: String },
    /// `!changetrack` without arguments.
    ChangeTrackUsage,
    /// `!assignlicences`
    AssignLicences,
    /// `!updateleaderboard`
    UpdateLeaderboard,
    /// `!achelp`
    Help,
}

impl ModCommand {
    /// Parses a message, returning `None` when it is not a moderator command.
    pub fn parse(content: &str) -> Option<Self> {
        let mut words = content.split_whitespace();
        let name = words.next()?.to_lowercase();

        match name.as_str() {
            "!changetrack" => {
                let args: Vec<&str> = words.collect();
                Some(match args.as_slice() {
                    [] => Self::ChangeTrackUsage,
                    [car] => Self::ChangeTrack {
                        track: None,
                        car: car.to_string(),
                    },
                    [track, car, ..] => Self::ChangeTrack {
                        track: Some(track.to_string()),
                        car: car.to_string(),
                    },
                })
            }
            "!assignlicences" => Some(Self::AssignLicences),
            "!updateleaderboard" => Some(Self::UpdateLeaderboard),
            "!achelp" => Some(Self::Help),
            _ => None,
        }
    }
}
