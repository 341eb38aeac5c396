use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "load")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub loader_id: i32,
    pub chemical_id: i32,
    pub mission_id: i32,
    pub load_number: i32,
    /// Liters
    #[sea_orm(column_type = "Double")]
    pub chemical_amount: f64,
    /// Liters
    #[sea_orm(column_type = "Double")]
    pub water_amount: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::loader::Entity",
        from = "Column::LoaderId",
        to = "super::loader::Column::Id"
    )]
    Loader,
    #[sea_orm(
        belongs_to = "super::chemical::Entity",
        from = "Column::ChemicalId",
        to = "super::chemical::Column::Id"
    )]
    Chemical,
    #[sea_orm(
        belongs_to = "super::mission::Entity",
        from = "Column::MissionId",
        to = "super::mission::Column::Id"
    )]
    Mission,
}

impl Related<super::loader::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loader.def()
    }
}

impl Related<super::chemical::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chemical.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
