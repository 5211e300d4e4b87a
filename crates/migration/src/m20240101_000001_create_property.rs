//! Create `property` table.
//! Stores real-estate listings; ids are assigned by the store on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(big_integer(Property::Id).auto_increment().primary_key())
                    .col(string_len(Property::Address, 256).not_null())
                    .col(text_null(Property::Description))
                    .col(double(Property::Price).not_null())
                    .col(double(Property::Size).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Property::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Property {
    Table,
    Id,
    Address,
    Description,
    Price,
    Size,
}
