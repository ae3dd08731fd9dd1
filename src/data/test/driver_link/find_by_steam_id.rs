use super::*;

/// Tests finding an existing link.
///
/// Expected: Ok(Some(link))
#[tokio::test]
async fn returns_link_for_steam_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::driver_link::DriverLinkFactory::new(db)
        .steam_id("76561198000000010")
        .discord_id("42")
        .build()
        .await?;

    let repo = DriverLinkRepository::new(db);
    let link = repo.find_by_steam_id("76561198000000010").await?;

    assert!(link.is_some());
    assert_eq!(link.unwrap().discord_id, 42);

    Ok(())
}

/// Tests looking up a Steam ID that was never linked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_steam_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::driver_link::create_driver_link(db).await?;

    let repo = DriverLinkRepository::new(db);
    let link = repo.find_by_steam_id("76561198999999999").await?;

    assert!(link.is_none());

    Ok(())
}

/// Tests that a corrupt stored Discord ID surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupt_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::driver_link::DriverLinkFactory::new(db)
        .steam_id("76561198000000011")
        .discord_id("not-a-snowflake")
        .build()
        .await?;

    let repo = DriverLinkRepository::new(db);
    let result = repo.find_by_steam_id("76561198000000011").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
