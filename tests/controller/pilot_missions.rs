//! Tests for the get_pilot_missions endpoint.

use agrispray::{model::mission::MissionSummaryDto, server::controller::mission::get_pilot_missions};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::*;

/// Tests that a pilot can view their own missions without pagination.
///
/// Expected: Ok with 200 OK response containing all 12 of their missions
#[tokio::test]
async fn pilot_views_own_missions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let john = test.ops().insert_mock_pilot("John Roe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;

    for _ in 0..12 {
        test.ops()
            .insert_mock_mission(jane.id, customer.id, "planned", 10.0, None)
            .await?;
    }
    test.ops()
        .insert_mock_mission(john.id, customer.id, "planned", 10.0, None)
        .await?;

    let result = get_pilot_missions(State(test.app_state()), pilot(jane.id), Path(jane.id)).await;

    assert!(result.is_ok());
    let summaries: Vec<MissionSummaryDto> = read_json(result.into_response()).await;
    assert_eq!(summaries.len(), 12);
    assert!(summaries.iter().all(|s| s.pilot_name == "Jane Doe"));

    Ok(())
}

/// Tests that a pilot cannot view another pilot's missions.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn forbidden_for_other_pilot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let john = test.ops().insert_mock_pilot("John Roe").await?;

    let result = get_pilot_missions(State(test.app_state()), pilot(john.id), Path(jane.id)).await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that a manager can view any pilot's missions.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn manager_views_any_pilot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    test.ops()
        .insert_mock_mission(jane.id, customer.id, "completed", 10.0, None)
        .await?;

    let resp = get_pilot_missions(State(test.app_state()), manager(), Path(jane.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let summaries: Vec<MissionSummaryDto> = read_json(resp).await;
    assert_eq!(summaries.len(), 1);

    Ok(())
}
