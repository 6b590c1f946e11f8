use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Favorite: one row per (user, location); also backs insert-if-absent
        manager
            .create_index(
                Index::create()
                    .name("uniq_favorite_user_location")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::LocationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Favorite: ordered listing per user
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user_created")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_location_title")
                    .table(Location::Table)
                    .col(Location::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_favorite_user_location").table(Favorite::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_favorite_user_created").table(Favorite::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_location_title").table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Favorite { Table, UserId, LocationId, CreatedAt }

#[derive(DeriveIden)]
enum Location { Table, Title }
