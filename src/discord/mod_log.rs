//! Moderator log channel.
//!
//! Lines posted here are informational; a failed post is logged and otherwise ignored
//! so it never interrupts the run it describes.

use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::service::licence::{AssignmentOutcome, AssignmentReport, DriverAssignment};

/// Discord caps message content at 2000 characters.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Clone)]
pub struct ModLog {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ModLog {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    /// Posts a line to the moderator log channel, logging instead of failing.
    pub async fn post(&self, content: impl Into<String>) {
        let mut content: String = content.into();
        if content.chars().count() > MAX_MESSAGE_CHARS {
            content = content.chars().take(MAX_MESSAGE_CHARS).collect();
        }

        if let Err(e) = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
        {
            tracing::warn!(
                "Failed to post to moderator log channel {}: {}",
                self.channel_id,
                e
            );
        }
    }

    /// Posts one line per assigned driver of a licence run.
    ///
    /// # Arguments
    /// - `report` - Outcome of the run
    /// - `verb` - Leading verb, e.g. `Assigned` or `Auto-assigned`
    pub async fn post_assignments(&self, report: &AssignmentReport, verb: &str) {
        for assignment in &report.assignments {
            if let Some(line) = assignment_line(assignment, verb) {
                self.post(line).await;
            }
        }
    }
}

/// Formats the moderator log line for one driver, or `None` for skipped drivers.
pub fn assignment_line(assignment: &DriverAssignment, verb: &str) -> Option<String> {
    let AssignmentOutcome::Assigned {
        tier,
        score,
        breakdown,
        role_sync,
        ..
    } = &assignment.outcome
    else {
        return None;
    };

    let mut line = format!(
        "{} **{}** to <@{}> (score: {:.2}). Breakdown: {}",
        verb, tier, assignment.discord_id, score, breakdown
    );

    if !role_sync.is_complete() {
        line.push_str(&format!(
            "\n⚠️ {} role change(s) failed, see logs.",
            role_sync.failures().len()
        ));
    }

    Some(line)
}
