use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverLink::Table)
                    .if_not_exists()
                    .col(pk_auto(DriverLink::Id))
                    .col(string_uniq(DriverLink::SteamId))
                    .col(string(DriverLink::DiscordId))
                    .col(timestamp(DriverLink::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Lookups by Discord account when answering DMs
        manager
            .create_index(
                Index::create()
                    .name("idx_driver_link_discord_id")
                    .table(DriverLink::Table)
                    .col(DriverLink::DiscordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_driver_link_discord_id")
                    .table(DriverLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DriverLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DriverLink {
    Table,
    Id,
    SteamId,
    DiscordId,
    CreatedAt,
}
