use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceRental::Table)
                    .if_not_exists()
                    .col(pk_auto(DeviceRental::Id))
                    .col(integer(DeviceRental::DeviceId))
                    .col(integer(DeviceRental::UserId))
                    .col(timestamp(DeviceRental::RentedAt))
                    .col(timestamp(DeviceRental::DueAt))
                    .col(timestamp_null(DeviceRental::ReturnedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceRental::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DeviceRental {
    Table,
    Id,
    DeviceId,
    UserId,
    RentedAt,
    DueAt,
    ReturnedAt,
}
