use super::*;

/// Tests reading settings before any were stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardSettingsRepository::new(db);

    assert!(repo.get().await?.is_none());

    Ok(())
}

/// Tests reading stored settings.
///
/// Expected: Ok(Some(settings)) with the stored track, car and image
#[tokio::test]
async fn returns_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::leaderboard_settings::LeaderboardSettingsFactory::new(db)
        .track("spa")
        .car("ferrari_488_gt3")
        .image_url(Some("https://example.com/spa.png".to_string()))
        .build()
        .await?;

    let repo = LeaderboardSettingsRepository::new(db);
    let settings = repo.get().await?.unwrap();

    assert_eq!(
        settings.selection,
        LeaderboardSelection::new("spa", "ferrari_488_gt3")
    );
    assert_eq!(
        settings.image_url.as_deref(),
        Some("https://example.com/spa.png")
    );
    assert!(settings.updated_at.is_some());

    Ok(())
}
