//! Consumption and area aggregates.
//!
//! Both aggregators delegate filtering and summing to their store so no row set is
//! loaded into memory. Empty inputs yield `0.0`, never an error.

use crate::{
    model::{load::LoadStatus, mission::MissionStatus},
    server::{
        data::store::{LoadStore, MissionStore},
        error::Error,
    },
};

/// Chemical and water consumption over counted (completed or spraying) loads.
pub struct LoadAggregator<S: LoadStore> {
    store: S,
}

impl<S: LoadStore> LoadAggregator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Liters of chemical across all counted loads
    pub async fn total_chemical_used(&self) -> Result<f64, Error> {
        Ok(self.store.sum_counted_chemical(None).await?)
    }

    /// Liters of water across all counted loads
    pub async fn total_water_used(&self) -> Result<f64, Error> {
        Ok(self.store.sum_counted_water(None).await?)
    }

    pub async fn total_chemical_for_mission(&self, mission_id: i32) -> Result<f64, Error> {
        Ok(self.store.sum_counted_chemical(Some(mission_id)).await?)
    }

    pub async fn total_water_for_mission(&self, mission_id: i32) -> Result<f64, Error> {
        Ok(self.store.sum_counted_water(Some(mission_id)).await?)
    }

    pub async fn count_by_status(&self, status: LoadStatus) -> Result<u64, Error> {
        Ok(self.store.count_where(Some(status), None).await?)
    }

    pub async fn count_all(&self) -> Result<u64, Error> {
        Ok(self.store.count_where(None, None).await?)
    }

    /// Every load of the mission regardless of status
    pub async fn count_for_mission(&self, mission_id: i32) -> Result<u64, Error> {
        Ok(self.store.count_where(None, Some(mission_id)).await?)
    }
}

/// Area statistics over completed missions.
pub struct MissionAggregator<S: MissionStore> {
    store: S,
}

impl<S: MissionStore> MissionAggregator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hectares across completed missions
    pub async fn total_area_sprayed(&self) -> Result<f64, Error> {
        Ok(self.store.sum_completed_sprayable_area().await?)
    }

    /// Mean sprayable field size of completed missions with a positive area.
    ///
    /// Despite the name this is a field-size average in hectares; it does not
    /// involve chemical volumes or `Chemical::application_rate`.
    pub async fn average_application_rate(&self) -> Result<f64, Error> {
        Ok(self.store.average_completed_sprayable_area().await?)
    }

    pub async fn count_by_status(&self, status: MissionStatus) -> Result<u64, Error> {
        Ok(self.store.count_where(Some(status)).await?)
    }

    pub async fn count_all(&self) -> Result<u64, Error> {
        Ok(self.store.count_where(None).await?)
    }
}
