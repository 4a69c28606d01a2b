// ABOUTME: SeatType entity definition for SeaORM with the seat category enum
// ABOUTME: A seat category (VIP/Couple/Super/Normal) carrying a price-premium percentage

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "SeatType")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat_type: Option<SeatKind>,
    pub premium_percentage: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Option<DateTime>,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: Option<DateTime>,
}

/// The four seat categories the schema accepts. Stored as text; the
/// migration backs this with a CHECK constraint on the column.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SeatKind {
    #[sea_orm(string_value = "VIP")]
    Vip,
    #[sea_orm(string_value = "Couple")]
    Couple,
    #[sea_orm(string_value = "Super")]
    Super,
    #[sea_orm(string_value = "Normal")]
    Normal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show_room_seat::Entity")]
    Seats,
}

impl Related<super::show_room_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
