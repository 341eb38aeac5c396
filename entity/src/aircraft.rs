use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub model: String,
    /// Hopper capacity in liters, the only stored unit
    #[sea_orm(column_type = "Double")]
    pub hopper_capacity_lt: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission_aircraft::Entity")]
    MissionAircraft,
}

impl Related<super::mission_aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionAircraft.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission_aircraft::Relation::Mission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission_aircraft::Relation::Aircraft.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
