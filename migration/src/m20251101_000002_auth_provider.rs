use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthProvider::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthProvider::Id))
                    .col(integer(AuthProvider::UserId))
                    .col(string(AuthProvider::Provider))
                    .col(string(AuthProvider::ProviderUserId))
                    .col(timestamp(AuthProvider::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthProvider::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthProvider {
    Table,
    Id,
    UserId,
    Provider,
    ProviderUserId,
    CreatedAt,
}
