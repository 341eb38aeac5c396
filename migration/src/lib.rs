pub use sea_orm_migration::prelude::*;

mod m20250724_000001_pilot;
mod m20250724_000002_loader;
mod m20250724_000003_customer;
mod m20250724_000004_chemical;
mod m20250724_000005_base;
mod m20250724_000006_aircraft;
mod m20250724_000007_mission;
mod m20250724_000008_mission_aircraft;
mod m20250724_000009_load;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250724_000001_pilot::Migration),
            Box::new(m20250724_000002_loader::Migration),
            Box::new(m20250724_000003_customer::Migration),
            Box::new(m20250724_000004_chemical::Migration),
            Box::new(m20250724_000005_base::Migration),
            Box::new(m20250724_000006_aircraft::Migration),
            Box::new(m20250724_000007_mission::Migration),
            Box::new(m20250724_000008_mission_aircraft::Migration),
            Box::new(m20250724_000009_load::Migration),
        ]
    }
}
