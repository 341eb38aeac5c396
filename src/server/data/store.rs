use async_trait::async_trait;
use sea_orm::DbErr;

use crate::{
    model::{load::LoadStatus, mission::MissionStatus},
    server::{error::validation::ValidationError, model::db::MissionModel},
};

/// Read-only aggregate queries over loads.
///
/// Sums include only loads in [`LoadStatus::COUNTED`] and return `0.0` when no
/// row matches.
#[async_trait]
pub trait LoadStore: Send + Sync {
    /// Liters of chemical across counted loads, optionally for one mission
    async fn sum_counted_chemical(&self, mission_id: Option<i32>) -> Result<f64, DbErr>;

    /// Liters of water across counted loads, optionally for one mission
    async fn sum_counted_water(&self, mission_id: Option<i32>) -> Result<f64, DbErr>;

    /// Number of loads matching every given filter
    async fn count_where(
        &self,
        status: Option<LoadStatus>,
        mission_id: Option<i32>,
    ) -> Result<u64, DbErr>;
}

/// Read-only aggregate and page queries over missions.
#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Hectares across completed missions, `0.0` when none
    async fn sum_completed_sprayable_area(&self) -> Result<f64, DbErr>;

    /// Mean sprayable hectares across completed missions with a positive area, `0.0` when none
    async fn average_completed_sprayable_area(&self) -> Result<f64, DbErr>;

    async fn count_where(&self, status: Option<MissionStatus>) -> Result<u64, DbErr>;

    /// Missions matching `criteria`, newest `scheduled_at` first with unscheduled
    /// missions last and ties broken by ID
    async fn find_page(&self, criteria: &MissionCriteria) -> Result<Vec<MissionRecord>, DbErr>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_PAGE: u64 = 1_000_000;
    pub const MAX_LIMIT: u64 = 100;

    /// Values below 1 are raised to 1.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] if `page` exceeds [`Self::MAX_PAGE`] or
    /// `limit` exceeds [`Self::MAX_LIMIT`].
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, ValidationError> {
        let page = page.unwrap_or(Self::DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT).max(1);

        if page > Self::MAX_PAGE {
            return Err(ValidationError::OutOfRange {
                field: "page",
                min: 1.0,
                max: Self::MAX_PAGE as f64,
            });
        }
        if limit > Self::MAX_LIMIT {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1.0,
                max: Self::MAX_LIMIT as f64,
            });
        }

        Ok(Self { page, limit })
    }

    /// Rows skipped before this page, saturating for hand-built values
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Filters for [`MissionStore::find_page`]; `None` fields do not filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissionCriteria {
    pub status: Option<MissionStatus>,
    pub pilot_id: Option<i32>,
    pub customer_id: Option<i32>,
    /// Every matching mission is returned when unset
    pub pagination: Option<Pagination>,
}

/// A mission row joined with the related names the summary view flattens.
#[derive(Clone, Debug, PartialEq)]
pub struct MissionRecord {
    pub mission: MissionModel,
    pub pilot_name: String,
    pub customer_name: String,
    /// Registration of the earliest assigned aircraft
    pub primary_aircraft: Option<String>,
}
