use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiInteraction::Table)
                    .if_not_exists()
                    .col(pk_auto(AiInteraction::Id))
                    .col(integer(AiInteraction::UserId))
                    .col(text(AiInteraction::Prompt))
                    .col(text(AiInteraction::Response))
                    .col(string(AiInteraction::Model))
                    .col(integer(AiInteraction::Tokens))
                    .col(timestamp(AiInteraction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiInteraction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AiInteraction {
    Table,
    Id,
    UserId,
    Prompt,
    Response,
    Model,
    Tokens,
    CreatedAt,
}
