//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees entities. All database queries, inserts and updates are
//! performed through these repositories.

pub mod driver_link;
pub mod leaderboard_settings;

#[cfg(test)]
mod test;
