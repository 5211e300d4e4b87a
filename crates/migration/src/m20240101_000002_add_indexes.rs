use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Property: non-unique index on address for the exact-match lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_property_address")
                    .table(Property::Table)
                    .col(Property::Address)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_property_address").table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Property {
    Table,
    Address,
}
