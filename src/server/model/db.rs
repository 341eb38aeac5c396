pub type PilotModel = entity::pilot::Model;
pub type LoaderModel = entity::loader::Model;
pub type CustomerModel = entity::customer::Model;
pub type ChemicalModel = entity::chemical::Model;
pub type BaseModel = entity::base::Model;
pub type AircraftModel = entity::aircraft::Model;
pub type MissionModel = entity::mission::Model;
pub type LoadModel = entity::load::Model;
