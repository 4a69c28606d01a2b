// ABOUTME: Movie entity definition for SeaORM
// ABOUTME: A film that can be scheduled for screenings in showrooms

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Option<DateTime>,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shows_display::Entity")]
    ShowsDisplays,
}

impl Related<super::shows_display::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowsDisplays.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
