//! Tests for the single-record pilot and loader endpoints.

use agrispray::{
    model::personnel::{LoaderDto, PilotDto, UpdateLoaderDto, UpdatePilotDto},
    server::controller::personnel::{
        delete_loader, delete_pilot, get_pilot, update_loader, update_pilot,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

/// Tests a manager renaming a pilot and reading it back.
///
/// Expected: 200 OK with the new name on both calls
#[tokio::test]
async fn manager_updates_pilot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let state = test.app_state();

    let resp = update_pilot(
        State(state.clone()),
        manager(),
        Path(jane.id),
        Json(UpdatePilotDto {
            name: Some("Jane Smith".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_pilot(State(state), pilot(jane.id), Path(jane.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: PilotDto = read_json(resp).await;
    assert_eq!(fetched.name, "Jane Smith");
    assert_eq!(fetched.email, jane.email);
    assert!(fetched.updated_at.is_some());

    Ok(())
}

/// Tests that a pilot may not edit pilot records, even their own.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn pilot_cannot_update_pilot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;

    let result = update_pilot(
        State(test.app_state()),
        pilot(jane.id),
        Path(jane.id),
        Json(UpdatePilotDto::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests deleting a pilot with and without missions.
///
/// Expected: 422 while the pilot flies a mission, 204 for an idle pilot, then 404
#[tokio::test]
async fn delete_pilot_respects_missions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let busy = test.ops().insert_mock_pilot("Jane Doe").await?;
    let idle = test.ops().insert_mock_pilot("John Roe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    test.ops()
        .insert_mock_mission(busy.id, customer.id, "scheduled", 40.0, None)
        .await?;
    let state = test.app_state();

    let resp = delete_pilot(State(state.clone()), manager(), Path(busy.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = delete_pilot(State(state.clone()), manager(), Path(idle.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_pilot(State(state), manager(), Path(idle.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests loader edits by field staff and deletes by a loader.
///
/// Expected: 200 OK for a pilot update, 403 Forbidden for a loader delete
#[tokio::test]
async fn loader_records_are_field_staff_only() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let sam = test.ops().insert_mock_loader("Sam Loader").await?;
    let state = test.app_state();

    let resp = update_loader(
        State(state.clone()),
        pilot(2),
        Path(sam.id),
        Json(UpdateLoaderDto {
            email: Some("sam@example.com".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: LoaderDto = read_json(resp).await;
    assert_eq!(updated.email.as_deref(), Some("sam@example.com"));

    let resp = delete_loader(State(state), loader(), Path(sam.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
