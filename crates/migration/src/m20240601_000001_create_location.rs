//! Create `location` table.
//!
//! Vote counters default to zero and only ever grow.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(uuid(Location::Id).primary_key())
                    .col(string_len(Location::Title, 255).not_null())
                    .col(text(Location::Description).not_null())
                    .col(string_len(Location::Src, 1024).not_null())
                    .col(ColumnDef::new(Location::Url).string_len(1024).null())
                    .col(string_len(Location::TypeIcon, 128).not_null())
                    .col(json_binary(Location::Types).not_null())
                    .col(double(Location::Latitude).not_null())
                    .col(double(Location::Longitude).not_null())
                    .col(big_integer(Location::Likes).not_null().default(0))
                    .col(big_integer(Location::Dislikes).not_null().default(0))
                    .col(timestamp_with_time_zone(Location::CreatedAt).not_null())
                    .check(Expr::col(Location::Likes).gte(0))
                    .check(Expr::col(Location::Dislikes).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Location::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Location {
    Table,
    Id,
    Title,
    Description,
    Src,
    Url,
    TypeIcon,
    Types,
    Latitude,
    Longitude,
    Likes,
    Dislikes,
    CreatedAt,
}
