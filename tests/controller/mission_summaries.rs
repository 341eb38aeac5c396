//! Tests for the get_mission_summaries endpoint.

use agrispray::{
    model::mission::{MissionStatus, MissionSummaryDto, MissionQuery},
    server::controller::mission::get_mission_summaries,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveDateTime};

use super::*;

fn day(day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 8, day).and_then(|date| date.and_hms_opt(9, 0, 0))
}

/// Tests the second page of 15 scheduled missions.
///
/// Expected: Ok with 200 OK response containing records 11 to 15, newest first
#[tokio::test]
async fn second_page_returns_remaining_records() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let pilot_model = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;

    for d in 1..=15 {
        test.ops()
            .insert_mock_mission(pilot_model.id, customer.id, "scheduled", 10.0, day(d))
            .await?;
    }

    let query = MissionQuery {
        page: Some(2),
        limit: Some(10),
        ..Default::default()
    };
    let result =
        get_mission_summaries(State(test.app_state()), manager(), Query(query)).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let summaries: Vec<MissionSummaryDto> = read_json(resp).await;
    let scheduled: Vec<_> = summaries.iter().map(|s| s.scheduled_at).collect();
    assert_eq!(scheduled, vec![day(5), day(4), day(3), day(2), day(1)]);

    Ok(())
}

/// Tests combined status and pilot filters with per-mission load totals.
///
/// Expected: Ok with 200 OK response containing only the matching mission
#[tokio::test]
async fn status_and_pilot_filters_combine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let john = test.ops().insert_mock_pilot("John Roe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    let aircraft = test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;

    let matching = test
        .ops()
        .insert_mock_mission(jane.id, customer.id, "completed", 145.0, day(3))
        .await?;
    let other_status = test
        .ops()
        .insert_mock_mission(jane.id, customer.id, "scheduled", 50.0, day(4))
        .await?;
    test.ops()
        .insert_mock_mission(john.id, customer.id, "completed", 80.0, day(5))
        .await?;
    test.ops()
        .assign_mock_aircraft(matching.id, aircraft.id)
        .await?;

    test.ops()
        .insert_mock_load(matching.id, "completed", 20.0, 400.0)
        .await?;
    test.ops()
        .insert_mock_load(matching.id, "spraying", 30.0, 600.0)
        .await?;
    test.ops()
        .insert_mock_load(other_status.id, "completed", 70.0, 700.0)
        .await?;

    let query = MissionQuery {
        status: Some(MissionStatus::Completed),
        pilot: Some(jane.id),
        ..Default::default()
    };
    let resp = get_mission_summaries(State(test.app_state()), pilot(jane.id), Query(query))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let summaries: Vec<MissionSummaryDto> = read_json(resp).await;
    assert_eq!(summaries.len(), 1);

    let summary = &summaries[0];
    assert_eq!(summary.id, matching.id);
    assert_eq!(summary.pilot_name, "Jane Doe");
    assert_eq!(summary.customer_name, "Acme Farms");
    assert_eq!(summary.aircraft_registration.as_deref(), Some("N802AB"));
    assert_eq!(summary.total_loads, 2);
    assert_eq!(summary.total_chemical_amount, 50.0);
    assert_eq!(summary.total_water_amount, 1000.0);
    assert!((summary.application_rate - 50.0 / 145.0).abs() < 1e-9);

    Ok(())
}

/// Tests that a loader cannot view mission summaries.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn forbidden_for_loader() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = get_mission_summaries(
        State(test.app_state()),
        loader(),
        Query(MissionQuery::default()),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}
