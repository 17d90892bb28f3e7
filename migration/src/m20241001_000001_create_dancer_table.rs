use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dancer::Table)
                    .if_not_exists()
                    .col(pk_auto(Dancer::Id))
                    .col(string(Dancer::FirstName))
                    .col(string(Dancer::LastName))
                    .col(integer(Dancer::Age))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dancer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dancer {
    Table,
    Id,
    FirstName,
    LastName,
    Age,
}
