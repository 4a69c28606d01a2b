// ABOUTME: ShowRoomSeat entity definition for SeaORM
// ABOUTME: A single physical seat, fixed to one showroom and assigned one seat category

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ShowRoomSeat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat_number: Option<String>,
    pub seat_type_id: Option<i32>,
    pub show_room_id: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Option<DateTime>,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::seat_type::Column::Id"
    )]
    SeatType,
    #[sea_orm(
        belongs_to = "super::show_room::Entity",
        from = "Column::ShowRoomId",
        to = "super::show_room::Column::Id"
    )]
    ShowRoom,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl Related<super::show_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowRoom.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
