//! Create `animal` table.
//!
//! One table for every kind; rows are told apart by `group`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animal::Table)
                    .if_not_exists()
                    .col(pk_auto(Animal::Id))
                    .col(text(Animal::Name))
                    .col(text(Animal::Description))
                    .col(string_len(Animal::Group, 32))
                    .to_owned(),
            )
            .await?;

        // Every lookup is scoped by kind
        manager
            .create_index(
                Index::create()
                    .name("idx_animal_group")
                    .table(Animal::Table)
                    .col(Animal::Group)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animal {
    Table,
    Id,
    Name,
    Description,
    Group,
}
