//! Scheduled jobs.
//!
//! - `auto_run` - licence assignment followed by a leaderboard publish, on a cron
//!   schedule in daemon mode or once from the command line

pub mod auto_run;
