pub use super::aircraft::Entity as Aircraft;
pub use super::base::Entity as Base;
pub use super::chemical::Entity as Chemical;
pub use super::customer::Entity as Customer;
pub use super::load::Entity as Load;
pub use super::loader::Entity as Loader;
pub use super::mission::Entity as Mission;
pub use super::mission_aircraft::Entity as MissionAircraft;
pub use super::pilot::Entity as Pilot;
