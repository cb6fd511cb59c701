use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

// Actor <-> Movie goes through the movie_actors join table
impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_actors::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_actors::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
