//! Flattened per-mission reporting records.

use crate::{
    model::mission::MissionSummaryDto,
    server::{
        data::store::{LoadStore, MissionCriteria, MissionRecord, MissionStore},
        error::Error,
        service::aggregator::LoadAggregator,
    },
};

/// Chemical liters per sprayable hectare, `0.0` when the area is not positive
pub fn application_rate(total_chemical_amount: f64, field_size_sprayable: f64) -> f64 {
    if field_size_sprayable > 0.0 {
        total_chemical_amount / field_size_sprayable
    } else {
        0.0
    }
}

/// Joins each mission with its pilot, customer, primary aircraft and load totals.
pub struct MissionSummaryBuilder<M: MissionStore, L: LoadStore> {
    missions: M,
    loads: LoadAggregator<L>,
}

impl<M: MissionStore, L: LoadStore> MissionSummaryBuilder<M, L> {
    pub fn new(missions: M, loads: L) -> Self {
        Self {
            missions,
            loads: LoadAggregator::new(loads),
        }
    }

    /// Summaries for the missions matching `criteria`, in store order
    /// (newest `scheduled_at` first).
    pub async fn build(&self, criteria: &MissionCriteria) -> Result<Vec<MissionSummaryDto>, Error> {
        let records = self.missions.find_page(criteria).await?;

        let mut summaries = Vec::with_capacity(records.len());
        for record in records {
            summaries.push(self.summarize(record).await?);
        }

        Ok(summaries)
    }

    async fn summarize(&self, record: MissionRecord) -> Result<MissionSummaryDto, Error> {
        let mission = record.mission;

        let total_loads = self.loads.count_for_mission(mission.id).await?;
        let total_chemical_amount = self.loads.total_chemical_for_mission(mission.id).await?;
        let total_water_amount = self.loads.total_water_for_mission(mission.id).await?;

        Ok(MissionSummaryDto {
            id: mission.id,
            title: mission.title,
            mission_type: mission.mission_type,
            field_size_total: mission.field_size_total,
            field_size_sprayable: mission.field_size_sprayable,
            scheduled_at: mission.scheduled_at,
            status: mission.status,
            pilot_name: record.pilot_name,
            customer_name: record.customer_name,
            aircraft_registration: record.primary_aircraft,
            total_loads,
            total_chemical_amount,
            total_water_amount,
            application_rate: application_rate(total_chemical_amount, mission.field_size_sprayable),
        })
    }
}
