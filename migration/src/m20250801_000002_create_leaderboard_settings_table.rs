use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaderboardSettings::Id))
                    .col(string(LeaderboardSettings::Track))
                    .col(string(LeaderboardSettings::Car))
                    .col(string_null(LeaderboardSettings::ImageUrl))
                    .col(timestamp(LeaderboardSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaderboardSettings {
    Table,
    Id,
    Track,
    Car,
    ImageUrl,
    UpdatedAt,
}
