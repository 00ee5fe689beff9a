use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildFetchJob::Table)
                    .if_not_exists()
                    .col(string(GuildFetchJob::Id).primary_key())
                    .col(string(GuildFetchJob::Status))
                    .col(text_null(GuildFetchJob::Guilds))
                    .col(text_null(GuildFetchJob::Error))
                    .col(timestamp_with_time_zone(GuildFetchJob::CreatedAt))
                    .col(timestamp_with_time_zone_null(GuildFetchJob::CompletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildFetchJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildFetchJob {
    Table,
    Id,
    Status,
    Guilds,
    Error,
    CreatedAt,
    CompletedAt,
}
