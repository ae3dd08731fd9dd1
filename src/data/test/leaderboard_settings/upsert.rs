use super::*;

/// Tests storing the first selection.
///
/// Expected: Ok with a single row created
#[tokio::test]
async fn creates_settings_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardSettingsRepository::new(db);
    let settings = repo
        .upsert(UpdateLeaderboardSettingsParam {
            selection: LeaderboardSelection::new("monza", "tatuusfa1"),
            image_url: None,
        })
        .await?;

    assert_eq!(settings.selection.track, "monza");
    assert_eq!(
        entity::prelude::LeaderboardSettings::find().count(db).await?,
        1
    );

    Ok(())
}

/// Tests that changing the selection replaces the row instead of adding one.
///
/// Expected: Ok with one row holding the new selection
#[tokio::test]
async fn replaces_existing_selection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LeaderboardSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::leaderboard_settings::LeaderboardSettingsFactory::new(db)
        .image_url(Some("https://example.com/old.png".to_string()))
        .build()
        .await?;

    let repo = LeaderboardSettingsRepository::new(db);
    repo.upsert(UpdateLeaderboardSettingsParam {
        selection: LeaderboardSelection::new("imola", "ks_porsche_911_gt3_r"),
        image_url: None,
    })
    .await?;

    assert_eq!(
        entity::prelude::LeaderboardSettings::find().count(db).await?,
        1
    );

    let settings = repo.get().await?.unwrap();
    assert_eq!(
        settings.selection,
        LeaderboardSelection::new("imola", "ks_porsche_911_gt3_r")
    );
    assert!(settings.image_url.is_none());

    Ok(())
}
