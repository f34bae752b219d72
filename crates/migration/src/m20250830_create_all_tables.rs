use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cars table
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cars::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cars::Make).string().not_null())
                    .col(ColumnDef::new(Cars::Model).string().not_null())
                    .col(ColumnDef::new(Cars::Year).small_integer().not_null())
                    .col(ColumnDef::new(Cars::DailyRate).double().not_null())
                    .col(ColumnDef::new(Cars::Specification).text())
                    .col(
                        ColumnDef::new(Cars::Availability)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Cars::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Cars::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::CarId).uuid().not_null())
                    .col(ColumnDef::new(Reservations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Reservations::PickUpDateTime)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::DropOffDateTime)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::Status).text().not_null())
                    .col(
                        ColumnDef::new(Reservations::TotalPrice)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-car_id")
                            .from(Reservations::Table, Reservations::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Cars {
    Table,
    Id,
    Make,
    Model,
    Year,
    DailyRate,
    Specification,
    Availability,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    CarId,
    UserId,
    PickUpDateTime,
    DropOffDateTime,
    Status,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}
