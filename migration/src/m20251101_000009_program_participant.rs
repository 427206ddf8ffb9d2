use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgramParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(ProgramParticipant::Id))
                    .col(integer(ProgramParticipant::ProgramId))
                    .col(integer(ProgramParticipant::UserId))
                    .col(string(ProgramParticipant::Status))
                    .col(timestamp(ProgramParticipant::JoinedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgramParticipant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProgramParticipant {
    Table,
    Id,
    ProgramId,
    UserId,
    Status,
    JoinedAt,
}
