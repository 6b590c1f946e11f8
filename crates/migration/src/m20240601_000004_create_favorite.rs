//! Create `favorite` table linking users to saved locations.
//!
//! `location_id` carries no foreign key: existence is checked before insert
//! and dangling references are skipped when favorites are read.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(uuid(Favorite::Id).primary_key())
                    .col(uuid(Favorite::UserId).not_null())
                    .col(uuid(Favorite::LocationId).not_null())
                    .col(timestamp_with_time_zone(Favorite::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Favorite::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Favorite { Table, Id, UserId, LocationId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
