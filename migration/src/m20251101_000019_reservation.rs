use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::EquipmentId))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::Quantity))
                    .col(timestamp(Reservation::ReservedFor))
                    .col(string(Reservation::Status))
                    .col(timestamp(Reservation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    EquipmentId,
    UserId,
    Quantity,
    ReservedFor,
    Status,
    CreatedAt,
}
