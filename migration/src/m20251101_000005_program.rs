use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(string(Program::Title))
                    .col(string(Program::Category))
                    .col(string_null(Program::Description))
                    .col(integer_null(Program::InstructorId))
                    .col(integer(Program::Capacity))
                    .col(integer(Program::Price))
                    .col(json(Program::Benefits))
                    .col(timestamp(Program::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Program {
    Table,
    Id,
    Title,
    Category,
    Description,
    InstructorId,
    Capacity,
    Price,
    Benefits,
    CreatedAt,
}
