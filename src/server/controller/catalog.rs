use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            AircraftDto, BaseDto, ChemicalDto, CreateAircraftDto, CreateBaseDto,
            CreateChemicalDto, CreateCustomerDto, CustomerDto, UpdateAircraftDto, UpdateBaseDto,
            UpdateChemicalDto, UpdateCustomerDto,
        },
    },
    server::{
        controller::MANAGER,
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::{aircraft::AircraftService, directory::DirectoryService},
    },
};

pub static CATALOG_TAG: &str = "catalog";

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CATALOG_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing customers", body = Vec<CustomerDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let customers = DirectoryService::new(&state.db).get_customers().await?;

    Ok((StatusCode::OK, Json(customers)))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CATALOG_TAG,
    request_body = CreateCustomerDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "create customers")?;

    let customer = DirectoryService::new(&state.db).create_customer(payload).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/chemicals",
    tag = CATALOG_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing chemicals", body = Vec<ChemicalDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chemicals(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let chemicals = DirectoryService::new(&state.db).get_chemicals().await?;

    Ok((StatusCode::OK, Json(chemicals)))
}

#[utoipa::path(
    post,
    path = "/api/chemicals",
    tag = CATALOG_TAG,
    request_body = CreateChemicalDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Chemical created", body = ChemicalDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chemical(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateChemicalDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "create chemicals")?;

    let chemical = DirectoryService::new(&state.db).create_chemical(payload).await?;

    Ok((StatusCode::CREATED, Json(chemical)))
}

#[utoipa::path(
    get,
    path = "/api/bases",
    tag = CATALOG_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing bases", body = Vec<BaseDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bases(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let bases = DirectoryService::new(&state.db).get_bases().await?;

    Ok((StatusCode::OK, Json(bases)))
}

#[utoipa::path(
    post,
    path = "/api/bases",
    tag = CATALOG_TAG,
    request_body = CreateBaseDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Base created", body = BaseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_base(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBaseDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "create bases")?;

    let base = DirectoryService::new(&state.db).create_base(payload).await?;

    Ok((StatusCode::CREATED, Json(base)))
}

#[utoipa::path(
    get,
    path = "/api/aircraft",
    tag = CATALOG_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing aircraft", body = Vec<AircraftDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let aircraft = AircraftService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(aircraft)))
}

/// Register an aircraft
///
/// At least one of `hopperCapacityGal` and `hopperCapacityLt` is required.
#[utoipa::path(
    post,
    path = "/api/aircraft",
    tag = CATALOG_TAG,
    request_body = CreateAircraftDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Aircraft registered", body = AircraftDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aircraft(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateAircraftDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "register aircraft")?;

    let aircraft = AircraftService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(aircraft)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the customer", body = CustomerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let customer = DirectoryService::new(&state.db).get_customer(id).await?;

    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    patch,
    path = "/api/customers/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "update customers")?;

    let customer = DirectoryService::new(&state.db).update_customer(id, payload).await?;

    Ok((StatusCode::OK, Json(customer)))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 422, description = "Customer still has missions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "delete customers")?;

    DirectoryService::new(&state.db).delete_customer(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/chemicals/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Chemical ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the chemical", body = ChemicalDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Chemical not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chemical(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let chemical = DirectoryService::new(&state.db).get_chemical(id).await?;

    Ok((StatusCode::OK, Json(chemical)))
}

#[utoipa::path(
    patch,
    path = "/api/chemicals/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Chemical ID")
    ),
    request_body = UpdateChemicalDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Chemical updated", body = ChemicalDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Chemical not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_chemical(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateChemicalDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "update chemicals")?;

    let chemical = DirectoryService::new(&state.db).update_chemical(id, payload).await?;

    Ok((StatusCode::OK, Json(chemical)))
}

#[utoipa::path(
    delete,
    path = "/api/chemicals/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Chemical ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Chemical deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Chemical not found", body = ErrorDto),
        (status = 422, description = "Chemical is still used by loads", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chemical(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "delete chemicals")?;

    DirectoryService::new(&state.db).delete_chemical(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/bases/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Base ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the base", body = BaseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Base not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_base(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let base = DirectoryService::new(&state.db).get_base(id).await?;

    Ok((StatusCode::OK, Json(base)))
}

#[utoipa::path(
    patch,
    path = "/api/bases/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Base ID")
    ),
    request_body = UpdateBaseDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Base updated", body = BaseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Base not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_base(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBaseDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "update bases")?;

    let base = DirectoryService::new(&state.db).update_base(id, payload).await?;

    Ok((StatusCode::OK, Json(base)))
}

#[utoipa::path(
    delete,
    path = "/api/bases/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Base ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Base deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Base not found", body = ErrorDto),
        (status = 422, description = "Base still has missions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_base(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "delete bases")?;

    DirectoryService::new(&state.db).delete_base(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get one aircraft
#[utoipa::path(
    get,
    path = "/api/aircraft/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the aircraft", body = AircraftDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let aircraft = AircraftService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(aircraft)))
}

#[utoipa::path(
    patch,
    path = "/api/aircraft/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    request_body = UpdateAircraftDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Aircraft updated", body = AircraftDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_aircraft(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAircraftDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "update aircraft")?;

    let aircraft = AircraftService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(aircraft)))
}

/// Delete an aircraft
///
/// The aircraft's mission assignments are removed with it.
#[utoipa::path(
    delete,
    path = "/api/aircraft/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Aircraft ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Aircraft deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_aircraft(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "delete aircraft")?;

    AircraftService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
