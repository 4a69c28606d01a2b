// ABOUTME: Initial migration creating the six cinema booking tables
// ABOUTME: Movie, ShowRoom, SeatType, ShowRoomSeat, ShowsDisplay, and Booking with their foreign keys

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tables are created in dependency order so every foreign-key
        // target exists before the table that references it.
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .col(
                        ColumnDef::new(Movie::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Name).string())
                    .col(ColumnDef::new(Movie::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Movie::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShowRoom::Table)
                    .col(
                        ColumnDef::new(ShowRoom::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShowRoom::Name).string())
                    .col(ColumnDef::new(ShowRoom::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(ShowRoom::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // seat_type is restricted with a CHECK constraint rather than a
        // native enum type so the restriction holds on sqlite as well.
        manager
            .create_table(
                Table::create()
                    .table(SeatType::Table)
                    .col(
                        ColumnDef::new(SeatType::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeatType::SeatType)
                            .string()
                            .check(Expr::col(SeatType::SeatType).is_in(["VIP", "Couple", "Super", "Normal"])),
                    )
                    .col(ColumnDef::new(SeatType::PremiumPercentage).integer())
                    .col(ColumnDef::new(SeatType::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(SeatType::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShowRoomSeat::Table)
                    .col(
                        ColumnDef::new(ShowRoomSeat::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShowRoomSeat::SeatNumber).string())
                    .col(ColumnDef::new(ShowRoomSeat::SeatTypeId).integer())
                    .col(ColumnDef::new(ShowRoomSeat::ShowRoomId).integer())
                    .col(ColumnDef::new(ShowRoomSeat::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(ShowRoomSeat::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_room_seat_seat_type_id")
                            .from(ShowRoomSeat::Table, ShowRoomSeat::SeatTypeId)
                            .to(SeatType::Table, SeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_room_seat_show_room_id")
                            .from(ShowRoomSeat::Table, ShowRoomSeat::ShowRoomId)
                            .to(ShowRoom::Table, ShowRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShowsDisplay::Table)
                    .col(
                        ColumnDef::new(ShowsDisplay::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShowsDisplay::Time).timestamp())
                    .col(ColumnDef::new(ShowsDisplay::ShowRoomId).integer())
                    .col(ColumnDef::new(ShowsDisplay::MovieId).integer())
                    .col(ColumnDef::new(ShowsDisplay::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(ShowsDisplay::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_display_show_room_id")
                            .from(ShowsDisplay::Table, ShowsDisplay::ShowRoomId)
                            .to(ShowRoom::Table, ShowRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_display_movie_id")
                            .from(ShowsDisplay::Table, ShowsDisplay::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .col(
                        ColumnDef::new(Booking::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Booking::PaymentMethod).string())
                    .col(ColumnDef::new(Booking::Paid).boolean())
                    .col(ColumnDef::new(Booking::ShowDisplayId).integer())
                    .col(ColumnDef::new(Booking::ShowRoomSeatId).integer())
                    .col(ColumnDef::new(Booking::CreatedAt).timestamp().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Booking::UpdatedAt).timestamp().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_show_display_id")
                            .from(Booking::Table, Booking::ShowDisplayId)
                            .to(ShowsDisplay::Table, ShowsDisplay::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_show_room_seat_id")
                            .from(Booking::Table, Booking::ShowRoomSeatId)
                            .to(ShowRoomSeat::Table, ShowRoomSeat::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse dependency order; if_exists keeps the rollback safe to
        // run against a database that never had the schema applied.
        manager
            .drop_table(Table::drop().table(Booking::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShowsDisplay::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShowRoomSeat::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SeatType::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShowRoom::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Movie::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

// Table and column names keep the exact casing of the deployed schema,
// so existing data and downstream consumers see an identical layout.

#[derive(DeriveIden)]
enum Movie {
    #[sea_orm(iden = "Movie")]
    Table,
    Id,
    Name,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ShowRoom {
    #[sea_orm(iden = "ShowRoom")]
    Table,
    Id,
    Name,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SeatType {
    #[sea_orm(iden = "SeatType")]
    Table,
    Id,
    SeatType,
    PremiumPercentage,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ShowRoomSeat {
    #[sea_orm(iden = "ShowRoomSeat")]
    Table,
    Id,
    SeatNumber,
    SeatTypeId,
    ShowRoomId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ShowsDisplay {
    #[sea_orm(iden = "ShowsDisplay")]
    Table,
    Id,
    Time,
    ShowRoomId,
    MovieId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Booking {
    #[sea_orm(iden = "Booking")]
    Table,
    Id,
    PaymentMethod,
    Paid,
    ShowDisplayId,
    ShowRoomSeatId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
