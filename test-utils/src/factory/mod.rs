//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let link = factory::driver_link::create_driver_link(&db).await?;
//!
//! // Customize
//! let link = factory::driver_link::DriverLinkFactory::new(&db)
//!     .steam_id("76561198000000001")
//!     .discord_id("42")
//!     .build()
//!     .await?;
//! ```

pub mod driver_link;
pub mod helpers;
pub mod leaderboard_settings;
