//! Tests for the reference record endpoints and loader registration.

use agrispray::{
    model::{
        catalog::{
            AircraftDto, ChemicalDto, CreateAircraftDto, CreateCustomerDto, CustomerDto,
            UpdateAircraftDto, UpdateChemicalDto,
        },
        personnel::{CreateLoaderDto, LoaderDto},
    },
    server::controller::{
        catalog::{
            create_aircraft, create_customer, delete_aircraft, delete_customer, get_aircraft,
            get_aircraft_by_id, get_base, get_chemical, get_customers, update_aircraft,
            update_chemical,
        },
        personnel::create_loader,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

fn aircraft_dto(registration_number: &str) -> CreateAircraftDto {
    CreateAircraftDto {
        registration_number: registration_number.to_string(),
        model: "Air Tractor AT-802".to_string(),
        hopper_capacity_gal: Some(800.0),
        hopper_capacity_lt: None,
    }
}

/// Tests registering an aircraft and listing it.
///
/// Expected: 201 Created then 200 OK with the derived gallon capacity
#[tokio::test]
async fn register_and_list_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;
    let state = test.app_state();

    let resp = create_aircraft(State(state.clone()), manager(), Json(aircraft_dto("N802AB")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get_aircraft(State(state), pilot(1)).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let aircraft: Vec<AircraftDto> = read_json(resp).await;
    assert_eq!(aircraft.len(), 1);
    assert_eq!(aircraft[0].hopper_capacity_lt, 3028.33);
    assert_eq!(aircraft[0].hopper_capacity_gal, 800.0);

    Ok(())
}

/// Tests registering the same registration number twice.
///
/// Expected: 422 Unprocessable Entity response
#[tokio::test]
async fn duplicate_registration_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;

    let result = create_aircraft(
        State(test.app_state()),
        manager(),
        Json(aircraft_dto("N802AB")),
    )
    .await;

    assert_eq!(
        result.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    Ok(())
}

/// Tests that only managers may register aircraft.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn pilot_cannot_register_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let result = create_aircraft(
        State(test.app_state()),
        pilot(1),
        Json(aircraft_dto("N802AB")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that customers are manager-written but readable by anyone signed in.
///
/// Expected: 403 Forbidden for a pilot, 201 Created for a manager, 200 OK for a loader
#[tokio::test]
async fn customer_write_requires_manager() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;
    let state = test.app_state();
    let dto = CreateCustomerDto {
        name: "Acme Farms".to_string(),
        phone_number: "5551234567".to_string(),
        email: Some("office@acme.example".to_string()),
    };

    let resp = create_customer(State(state.clone()), pilot(1), Json(dto.clone()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = create_customer(State(state.clone()), manager(), Json(dto))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let customers: Vec<CustomerDto> =
        read_json(get_customers(State(state), loader()).await.into_response()).await;
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Acme Farms");

    Ok(())
}

/// Tests that a pilot may register a loader.
///
/// Expected: 201 Created response
#[tokio::test]
async fn pilot_creates_loader() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;

    let resp = create_loader(
        State(test.app_state()),
        pilot(1),
        Json(CreateLoaderDto {
            name: "Sam Loader".to_string(),
            phone_number: "5551234567".to_string(),
            email: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let loader_dto: LoaderDto = read_json(resp).await;
    assert_eq!(loader_dto.name, "Sam Loader");
    assert!(loader_dto.updated_at.is_none());

    Ok(())
}

/// Tests updating an aircraft's capacity in gallons, then deleting it.
///
/// Expected: 200 OK with converted liters, 204 No Content, then 404 Not Found
#[tokio::test]
async fn manager_updates_and_deletes_aircraft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let aircraft = test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;
    let state = test.app_state();

    let resp = update_aircraft(
        State(state.clone()),
        manager(),
        Path(aircraft.id),
        Json(UpdateAircraftDto {
            hopper_capacity_gal: Some(500.0),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: AircraftDto = read_json(resp).await;
    assert_eq!(updated.hopper_capacity_lt, 1892.71);
    assert_eq!(updated.registration_number, "N802AB");

    let resp = delete_aircraft(State(state.clone()), manager(), Path(aircraft.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_aircraft_by_id(State(state), pilot(1), Path(aircraft.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a pilot may not delete aircraft.
///
/// Expected: 403 Forbidden response
#[tokio::test]
async fn pilot_cannot_delete_aircraft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let aircraft = test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;

    let result = delete_aircraft(State(test.app_state()), pilot(1), Path(aircraft.id)).await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests a chemical rate update inside and outside the allowed range.
///
/// Expected: 422 for a zero rate, 200 OK for a valid rate
#[tokio::test]
async fn chemical_rate_update_validated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let chemical = test.ops().insert_mock_chemical("Glyphosate").await?;
    let state = test.app_state();

    let resp = update_chemical(
        State(state.clone()),
        manager(),
        Path(chemical.id),
        Json(UpdateChemicalDto {
            application_rate: Some(0.0),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = update_chemical(
        State(state.clone()),
        manager(),
        Path(chemical.id),
        Json(UpdateChemicalDto {
            application_rate: Some(3.5),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: ChemicalDto = read_json(
        get_chemical(State(state), loader(), Path(chemical.id))
            .await
            .into_response(),
    )
    .await;
    assert_eq!(fetched.application_rate, 3.5);
    assert_eq!(fetched.name, "Glyphosate");

    Ok(())
}

/// Tests deleting a customer that missions still point at, and reading an unknown base.
///
/// Expected: 422 Unprocessable Entity, then 404 Not Found
#[tokio::test]
async fn referenced_customer_kept_and_unknown_base_missing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let jane = test.ops().insert_mock_pilot("Jane Doe").await?;
    let customer = test.ops().insert_mock_customer("Acme Farms").await?;
    test.ops()
        .insert_mock_mission(jane.id, customer.id, "planned", 40.0, None)
        .await?;
    let state = test.app_state();

    let resp = delete_customer(State(state.clone()), manager(), Path(customer.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = get_base(State(state), manager(), Path(999)).await.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

