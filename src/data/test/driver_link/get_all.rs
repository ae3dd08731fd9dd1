use super::*;

/// Tests listing all links in creation order.
///
/// Expected: Ok with links in insertion order
#[tokio::test]
async fn returns_links_in_creation_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::driver_link::create_driver_link(db).await?;
    let second = factory::driver_link::create_driver_link(db).await?;
    let third = factory::driver_link::create_driver_link(db).await?;

    let repo = DriverLinkRepository::new(db);
    let links = repo.get_all().await?;

    let steam_ids: Vec<&str> = links.iter().map(|l| l.steam_id.as_str()).collect();
    assert_eq!(
        steam_ids,
        vec![
            first.steam_id.as_str(),
            second.steam_id.as_str(),
            third.steam_id.as_str()
        ]
    );

    Ok(())
}

/// Tests listing links with an empty table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_nothing_linked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriverLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverLinkRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
