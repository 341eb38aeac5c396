//! Tests for the mission CRUD endpoints.

use agrispray::{
    model::mission::{
        CreateMissionDto, MissionDto, MissionQuery, MissionStatus, MissionType, UpdateMissionDto,
    },
    server::controller::mission::{
        create_mission, delete_mission, get_mission, get_missions, update_mission,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;

use super::*;

async fn create_dto(test: &mut TestContext) -> Result<CreateMissionDto, TestError> {
    let pilot_model = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    let base = test.ops().insert_mock_base("Main Base").await?;
    let aircraft = test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;

    Ok(CreateMissionDto {
        pilot_id: pilot_model.id,
        customer_id: customer.id,
        base_id: base.id,
        aircraft_ids: vec![aircraft.id],
        title: Some("North field herbicide".to_string()),
        mission_type: Some(MissionType::Herbicide),
        field_size_total: 150.0,
        field_size_sprayable: 145.0,
        location: Some("North Field".to_string()),
        status: None,
        scheduled_at: None,
    })
}

/// Tests creating a mission and reading it back.
///
/// Expected: 201 Created, then Ok with 200 OK response and acre display strings
#[tokio::test]
async fn create_then_get_mission() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;
    let state = test.app_state();

    let resp = create_mission(State(state.clone()), pilot(1), Json(dto))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: MissionDto = read_json(resp).await;
    assert_eq!(created.status, "planned");

    let resp = get_mission(State(state), loader(), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let mission: MissionDto = read_json(resp).await;
    assert_eq!(mission.field_size_sprayable, 145.0);
    assert_eq!(mission.field_size_sprayable_display, "358.3 ac (145.0 ha)");

    Ok(())
}

/// Tests that sprayable area above the total is rejected.
///
/// Expected: 422 Unprocessable Entity response
#[tokio::test]
async fn rejects_sprayable_above_total() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let mut dto = create_dto(&mut test).await?;
    dto.field_size_sprayable = 160.0;

    let result = create_mission(State(test.app_state()), manager(), Json(dto)).await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests that a mission referencing an unknown pilot is rejected.
///
/// Expected: 404 Not Found response
#[tokio::test]
async fn unknown_pilot_returns_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let mut dto = create_dto(&mut test).await?;
    dto.pilot_id = 999;

    let result = create_mission(State(test.app_state()), manager(), Json(dto)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a loader cannot create missions.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn forbidden_for_loader() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;

    let result = create_mission(State(test.app_state()), loader(), Json(dto)).await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests a status-only update.
///
/// Expected: Ok with 200 OK response and `updatedAt` set
#[tokio::test]
async fn update_mission_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;
    let state = test.app_state();

    let created: MissionDto = read_json(
        create_mission(State(state.clone()), manager(), Json(dto))
            .await
            .into_response(),
    )
    .await;

    let resp = update_mission(
        State(state),
        manager(),
        Path(created.id),
        Json(UpdateMissionDto {
            status: Some(MissionStatus::InProgress),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let mission: MissionDto = read_json(resp).await;
    assert_eq!(mission.status, "in_progress");
    assert!(mission.updated_at.is_some());
    assert_eq!(mission.aircraft_ids, created.aircraft_ids);

    Ok(())
}

/// Tests updating a mission that does not exist.
///
/// Expected: 404 Not Found response
#[tokio::test]
async fn update_unknown_mission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = update_mission(
        State(test.app_state()),
        manager(),
        Path(42),
        Json(UpdateMissionDto::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing missions filtered by pilot.
///
/// Expected: 200 OK with only the matching pilot's missions and their aircraft
#[tokio::test]
async fn list_missions_by_pilot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;
    let other = test.ops().insert_mock_pilot("John Roe").await?;
    test.ops()
        .insert_mock_mission(other.id, dto.customer_id, "planned", 20.0, None)
        .await?;
    let state = test.app_state();

    let created: MissionDto = read_json(
        create_mission(State(state.clone()), manager(), Json(dto.clone()))
            .await
            .into_response(),
    )
    .await;

    let resp = get_missions(
        State(state),
        loader(),
        Query(MissionQuery {
            pilot: Some(dto.pilot_id),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let missions: Vec<MissionDto> = read_json(resp).await;
    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0].id, created.id);
    assert_eq!(missions[0].aircraft_ids, dto.aircraft_ids);

    Ok(())
}

/// Tests deleting a mission with loads, then without.
///
/// Expected: 422 while a load remains, 204 No Content once empty, then 404
#[tokio::test]
async fn delete_mission_after_loads() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;
    let state = test.app_state();

    let created: MissionDto = read_json(
        create_mission(State(state.clone()), manager(), Json(dto))
            .await
            .into_response(),
    )
    .await;
    let load = test
        .ops()
        .insert_mock_load(created.id, "preparing", 10.0, 100.0)
        .await?;

    let resp = delete_mission(State(state.clone()), pilot(1), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    entity::prelude::Load::delete_by_id(load.id).exec(&test.db).await?;

    let resp = delete_mission(State(state.clone()), pilot(1), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_mission(State(state), manager(), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a loader cannot delete missions.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn loader_cannot_delete_mission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = delete_mission(State(test.app_state()), loader(), Path(1)).await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

