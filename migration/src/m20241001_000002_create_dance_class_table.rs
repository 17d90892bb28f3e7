use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DanceClass::Table)
                    .if_not_exists()
                    .col(pk_auto(DanceClass::Id))
                    .col(string(DanceClass::Name))
                    .col(string(DanceClass::Semester))
                    .col(string(DanceClass::Teacher))
                    .col(string_null(DanceClass::TeachingAssistant))
                    .col(integer(DanceClass::ClassLength))
                    .col(string(DanceClass::ClassType))
                    .col(string(DanceClass::Location))
                    .col(json(DanceClass::DaysOfWeek))
                    .col(json(DanceClass::Dancers))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DanceClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DanceClass {
    Table,
    Id,
    Name,
    Semester,
    Teacher,
    TeachingAssistant,
    ClassLength,
    ClassType,
    Location,
    DaysOfWeek,
    Dancers,
}
