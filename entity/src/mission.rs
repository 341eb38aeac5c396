use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,
    pub customer_id: i32,
    pub base_id: i32,
    pub title: Option<String>,
    #[sea_orm(column_name = "type")]
    pub mission_type: Option<String>,
    /// Hectares
    #[sea_orm(column_type = "Double")]
    pub field_size_total: f64,
    /// Hectares
    #[sea_orm(column_type = "Double")]
    pub field_size_sprayable: f64,
    pub location: Option<String>,
    pub status: String,
    pub scheduled_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pilot::Entity",
        from = "Column::PilotId",
        to = "super::pilot::Column::Id"
    )]
    Pilot,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::base::Entity",
        from = "Column::BaseId",
        to = "super::base::Column::Id"
    )]
    Base,
    #[sea_orm(has_many = "super::load::Entity")]
    Load,
    #[sea_orm(has_many = "super::mission_aircraft::Entity")]
    MissionAircraft,
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::base::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Base.def()
    }
}

impl Related<super::load::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Load.def()
    }
}

impl Related<super::mission_aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionAircraft.def()
    }
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission_aircraft::Relation::Aircraft.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission_aircraft::Relation::Mission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
