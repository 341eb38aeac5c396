//! Tests for the load endpoints.

use agrispray::{
    model::load::{CreateLoadDto, LoadDto, LoadQuery, LoadStatus, UpdateLoadDto},
    server::controller::load::{create_load, delete_load, get_load, get_loads, update_load},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

async fn create_dto(test: &mut TestContext) -> Result<CreateLoadDto, TestError> {
    let pilot_model = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    let mission = test
        .ops()
        .insert_mock_mission(pilot_model.id, customer.id, "in_progress", 100.0, None)
        .await?;
    let loader_model = test.ops().insert_mock_loader("Sam Loader").await?;
    let chemical = test.ops().insert_mock_chemical("Glyphosate").await?;

    Ok(CreateLoadDto {
        loader_id: loader_model.id,
        chemical_id: chemical.id,
        mission_id: mission.id,
        load_number: 1,
        chemical_amount: None,
        chemical_amount_gal: Some(10.0),
        water_amount: Some(400.0),
        water_amount_gal: None,
        status: None,
    })
}

/// Tests that a loader can create a load given in gallons.
///
/// Expected: 201 Created with liters stored and gallon display fields derived
#[tokio::test]
async fn loader_creates_load_in_gallons() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;

    let resp = create_load(State(test.app_state()), loader(), Json(dto))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let load: LoadDto = read_json(resp).await;
    assert_eq!(load.status, "preparing");
    assert_eq!(load.chemical_amount, 37.85);
    assert_eq!(load.chemical_amount_gal, 10.0);
    assert_eq!(load.water_amount_display, "105.7 gal (400.0 L)");

    Ok(())
}

/// Tests that a load without any chemical amount is rejected.
///
/// Expected: 422 Unprocessable Entity response
#[tokio::test]
async fn rejects_missing_chemical_amount() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let mut dto = create_dto(&mut test).await?;
    dto.chemical_amount_gal = None;

    let result = create_load(State(test.app_state()), manager(), Json(dto)).await;

    assert_eq!(
        result.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    Ok(())
}

/// Tests updating, reading and deleting a load.
///
/// Expected: 200 OK on update and read, 204 No Content on delete, then 404 Not Found
#[tokio::test]
async fn update_get_and_delete_load() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let dto = create_dto(&mut test).await?;
    let state = test.app_state();

    let created: LoadDto = read_json(
        create_load(State(state.clone()), pilot(1), Json(dto))
            .await
            .into_response(),
    )
    .await;

    let resp = update_load(
        State(state.clone()),
        loader(),
        Path(created.id),
        Json(UpdateLoadDto {
            status: Some(LoadStatus::Spraying),
            water_amount_gal: Some(100.0),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: LoadDto = read_json(resp).await;
    assert_eq!(updated.status, "spraying");
    assert_eq!(updated.water_amount, 378.54);

    let resp = get_load(State(state.clone()), manager(), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = delete_load(State(state.clone()), manager(), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_load(State(state), manager(), Path(created.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting a load that does not exist.
///
/// Expected: 404 Not Found response
#[tokio::test]
async fn delete_unknown_load() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = delete_load(State(test.app_state()), manager(), Path(7)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing loads for one mission with paging.
///
/// Expected: 200 OK with the requested page, 422 for an oversized limit
#[tokio::test]
async fn list_loads_for_mission() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    let mission = test
        .ops()
        .insert_mock_mission(jane.id, customer.id, "in_progress", 100.0, None)
        .await?;
    let other = test
        .ops()
        .insert_mock_mission(jane.id, customer.id, "planned", 50.0, None)
        .await?;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let load = test
            .ops()
            .insert_mock_load(mission.id, "loaded", 10.0, 100.0)
            .await?;
        ids.push(load.id);
    }
    test.ops()
        .insert_mock_load(other.id, "loaded", 10.0, 100.0)
        .await?;
    let state = test.app_state();

    let resp = get_loads(
        State(state.clone()),
        pilot(jane.id),
        Query(LoadQuery {
            mission: Some(mission.id),
            page: Some(1),
            limit: Some(2),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let loads: Vec<LoadDto> = read_json(resp).await;
    let listed: Vec<i32> = loads.iter().map(|load| load.id).collect();
    assert_eq!(listed, ids[..2].to_vec());

    let resp = get_loads(
        State(state),
        manager(),
        Query(LoadQuery {
            limit: Some(500),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

