use super::*;

/// Tests creating a new link.
///
/// Verifies that the repository stores the Steam ID and the Discord ID as text and
/// returns the domain model with the Discord ID parsed back.
///
/// Expected: Ok with link created
#[tokio::test]
async fn creates_new_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverLinkRepository::new(db);
    let link = repo
        .create(CreateDriverLinkParam {
            steam_id: "76561198000000001".to_string(),
            discord_id: 123456789,
        })
        .await?;

    assert_eq!(link.steam_id, "76561198000000001");
    assert_eq!(link.discord_id, 123456789);

    let stored = entity::prelude::DriverLink::find()
        .filter(entity::driver_link::Column::SteamId.eq("76561198000000001"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.discord_id, "123456789");

    Ok(())
}

/// Tests that a Steam ID cannot be linked twice.
///
/// Verifies that the unique index rejects a second link for the same Steam ID and
/// that the original link is left untouched.
///
/// Expected: Err for the second insert, one row remaining
#[tokio::test]
async fn rejects_duplicate_steam_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::driver_link::DriverLinkFactory::new(db)
        .steam_id("76561198000000002")
        .discord_id("111")
        .build()
        .await?;

    let repo = DriverLinkRepository::new(db);
    let result = repo
        .create(CreateDriverLinkParam {
            steam_id: "76561198000000002".to_string(),
            discord_id: 222,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let count = entity::prelude::DriverLink::find()
        .filter(entity::driver_link::Column::SteamId.eq("76561198000000002"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    let link = repo.find_by_steam_id("76561198000000002").await?.unwrap();
    assert_eq!(link.discord_id, 111);

    Ok(())
}
