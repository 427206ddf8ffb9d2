use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomReservation::Id))
                    .col(integer(RoomReservation::RoomId))
                    .col(integer(RoomReservation::UserId))
                    .col(integer_null(RoomReservation::SessionId))
                    .col(timestamp(RoomReservation::StartsAt))
                    .col(timestamp(RoomReservation::EndsAt))
                    .col(string(RoomReservation::Status))
                    .col(timestamp(RoomReservation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomReservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoomReservation {
    Table,
    Id,
    RoomId,
    UserId,
    SessionId,
    StartsAt,
    EndsAt,
    Status,
    CreatedAt,
}
