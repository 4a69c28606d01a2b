// ABOUTME: Booking entity definition for SeaORM
// ABOUTME: A reservation linking one seat to one scheduled display, with payment state

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub payment_method: Option<String>,
    pub paid: Option<bool>,
    pub show_display_id: Option<i32>,
    pub show_room_seat_id: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Option<DateTime>,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shows_display::Entity",
        from = "Column::ShowDisplayId",
        to = "super::shows_display::Column::Id"
    )]
    ShowsDisplay,
    #[sea_orm(
        belongs_to = "super::show_room_seat::Entity",
        from = "Column::ShowRoomSeatId",
        to = "super::show_room_seat::Column::Id"
    )]
    ShowRoomSeat,
}

impl Related<super::shows_display::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowsDisplay.def()
    }
}

impl Related<super::show_room_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoomSeat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
