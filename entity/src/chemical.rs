use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chemical")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Liters per hectare
    #[sea_orm(column_type = "Double")]
    pub application_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::load::Entity")]
    Load,
}

impl Related<super::load::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Load.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
