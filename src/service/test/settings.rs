use super::*;
use crate::{error::AppError, service::settings::LeaderboardSettingsService};
use test_utils::{builder::TestBuilder, factory::leaderboard_settings::LeaderboardSettingsFactory};

const DEFAULT_IMAGE: &str = "https://example.com/default.png";

/// Tests reading settings before a moderator chose a selection.
///
/// Expected: Ok with the configured defaults
#[tokio::test]
async fn falls_back_to_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = LeaderboardSettingsService::new(db)
        .get_current(&selection(), Some(DEFAULT_IMAGE))
        .await?;

    assert_eq!(settings.selection, selection());
    assert_eq!(settings.image_url.as_deref(), Some(DEFAULT_IMAGE));
    assert!(settings.updated_at.is_none());

    Ok(())
}

/// Tests changing the selection.
///
/// Expected: Ok with the new selection returned by later reads
#[tokio::test]
async fn changes_selection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LeaderboardSettingsService::new(db);
    service
        .change_selection(LeaderboardSelection::new("spa", "ferrari_488_gt3"))
        .await?;

    let settings = service.get_current(&selection(), Some(DEFAULT_IMAGE)).await?;

    assert_eq!(
        settings.selection,
        LeaderboardSelection::new("spa", "ferrari_488_gt3")
    );
    assert_eq!(settings.image_url.as_deref(), Some(DEFAULT_IMAGE));
    assert!(settings.updated_at.is_some());

    Ok(())
}

/// Tests that changing the selection keeps a stored image.
///
/// Expected: Ok with the stored image still set
#[tokio::test]
async fn keeps_stored_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    LeaderboardSettingsFactory::new(db)
        .image_url(Some("https://example.com/monza.png".to_string()))
        .build()
        .await?;

    let settings = LeaderboardSettingsService::new(db)
        .change_selection(LeaderboardSelection::new("monza", "tatuusfa1"))
        .await?;

    assert_eq!(
        settings.image_url.as_deref(),
        Some("https://example.com/monza.png")
    );

    Ok(())
}
