//! Tests for the get_dashboard_stats endpoint.

use agrispray::{model::dashboard::DashboardStatsDto, server::controller::dashboard::get_dashboard_stats};
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::*;

/// Tests the snapshot over an empty dataset.
///
/// Expected: Ok with 200 OK response, all counts 0 and all aggregates 0.0
#[tokio::test]
async fn empty_dataset_returns_zeroes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = get_dashboard_stats(State(test.app_state()), manager()).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stats: DashboardStatsDto = read_json(resp).await;
    assert_eq!(stats.total_missions, 0);
    assert_eq!(stats.total_loads, 0);
    assert_eq!(stats.total_area_sprayed, 0.0);
    assert_eq!(stats.total_chemical_used, 0.0);
    assert_eq!(stats.average_application_rate, 0.0);
    assert_eq!(stats.last_updated, chrono::Utc::now().date_naive());

    Ok(())
}

/// Tests that only counted loads and completed missions feed the aggregates.
///
/// Expected: Ok with 200 OK response and status-filtered totals
#[tokio::test]
async fn aggregates_respect_status_filters() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let pilot_model = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;

    let completed = test
        .ops()
        .insert_mock_mission(pilot_model.id, customer.id, "completed", 100.0, None)
        .await?;
    test.ops()
        .insert_mock_mission(pilot_model.id, customer.id, "scheduled", 40.0, None)
        .await?;

    test.ops()
        .insert_mock_load(completed.id, "completed", 20.0, 400.0)
        .await?;
    test.ops()
        .insert_mock_load(completed.id, "spraying", 30.0, 600.0)
        .await?;
    test.ops()
        .insert_mock_load(completed.id, "preparing", 99.0, 999.0)
        .await?;

    let resp = get_dashboard_stats(State(test.app_state()), manager())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stats: DashboardStatsDto = read_json(resp).await;
    assert_eq!(stats.total_missions, 2);
    assert_eq!(stats.active_missions, 1);
    assert_eq!(stats.completed_missions, 1);
    assert_eq!(stats.total_loads, 3);
    assert_eq!(stats.pending_loads, 1);
    assert_eq!(stats.total_pilots, 1);
    assert_eq!(stats.active_pilots, 1);
    assert_eq!(stats.total_area_sprayed, 100.0);
    assert_eq!(stats.total_chemical_used, 50.0);
    assert_eq!(stats.total_water_used, 1000.0);
    assert_eq!(stats.average_application_rate, 100.0);

    Ok(())
}

/// Tests that a pilot cannot view the dashboard.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn forbidden_for_pilot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = get_dashboard_stats(State(test.app_state()), pilot(1)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
