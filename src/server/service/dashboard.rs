//! System-wide dashboard snapshot.

use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use crate::{
    model::{dashboard::DashboardStatsDto, load::LoadStatus, mission::MissionStatus},
    server::{
        data::{
            aircraft::AircraftRepository, chemical::ChemicalRepository,
            customer::CustomerRepository, load::LoadRepository, loader::LoaderRepository,
            mission::MissionRepository, pilot::PilotRepository,
        },
        error::Error,
        service::aggregator::{LoadAggregator, MissionAggregator},
    },
};

/// Recomputes every count and aggregate from current state on each call.
pub struct DashboardStatsBuilder<'a, C: ConnectionTrait + Sync> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + Sync> DashboardStatsBuilder<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Snapshot stamped with today's UTC date
    pub async fn build(&self) -> Result<DashboardStatsDto, Error> {
        self.build_for(Utc::now().date_naive()).await
    }

    pub async fn build_for(&self, today: NaiveDate) -> Result<DashboardStatsDto, Error> {
        let missions = MissionAggregator::new(MissionRepository::new(self.db));
        let loads = LoadAggregator::new(LoadRepository::new(self.db));

        let total_pilots = PilotRepository::new(self.db).count().await?;
        let total_aircraft = AircraftRepository::new(self.db).count().await?;

        Ok(DashboardStatsDto {
            total_missions: missions.count_all().await?,
            active_missions: missions.count_by_status(MissionStatus::Scheduled).await?,
            completed_missions: missions.count_by_status(MissionStatus::Completed).await?,
            cancelled_missions: missions.count_by_status(MissionStatus::Cancelled).await?,
            total_loads: loads.count_all().await?,
            pending_loads: loads.count_by_status(LoadStatus::Preparing).await?,
            total_pilots,
            // No activity or availability predicate exists, so these mirror the totals
            active_pilots: total_pilots,
            total_loaders: LoaderRepository::new(self.db).count().await?,
            total_customers: CustomerRepository::new(self.db).count().await?,
            total_aircraft,
            available_aircraft: total_aircraft,
            total_chemicals: ChemicalRepository::new(self.db).count().await?,
            total_area_sprayed: missions.total_area_sprayed().await?,
            total_chemical_used: loads.total_chemical_used().await?,
            total_water_used: loads.total_water_used().await?,
            average_application_rate: missions.average_application_rate().await?,
            last_updated: today,
        })
    }
}
