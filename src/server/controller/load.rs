use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        load::{CreateLoadDto, LoadDto, LoadQuery, UpdateLoadDto},
    },
    server::{
        controller::LOAD_CREW,
        data::{load::LoadCriteria, store::Pagination},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::load::LoadService,
    },
};

pub static LOAD_TAG: &str = "load";

/// List loads, oldest first
#[utoipa::path(
    get,
    path = "/api/loads",
    tag = LOAD_TAG,
    params(LoadQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing loads", body = Vec<LoadDto>),
        (status = 400, description = "Invalid query parameter", body = String),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Page or limit out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loads(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<LoadQuery>,
) -> Result<impl IntoResponse, Error> {
    let criteria = LoadCriteria {
        mission_id: query.mission,
        status: query.status,
        pagination: Some(Pagination::new(query.page, query.limit)?),
    };

    let loads = LoadService::new(&state.db).get_all(&criteria).await?;

    Ok((StatusCode::OK, Json(loads)))
}

/// Create a load
///
/// Gallon amounts are converted to liters before storage.
#[utoipa::path(
    post,
    path = "/api/loads",
    tag = LOAD_TAG,
    request_body = CreateLoadDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Load created", body = LoadDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not write loads", body = ErrorDto),
        (status = 404, description = "Referenced loader, chemical or mission not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_load(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateLoadDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(LOAD_CREW, "create loads")?;

    let load = LoadService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(load)))
}

#[utoipa::path(
    get,
    path = "/api/loads/{id}",
    tag = LOAD_TAG,
    params(
        ("id" = i32, Path, description = "Load ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the load", body = LoadDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_load(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let load = LoadService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(load)))
}

/// Partially update a load's number, amounts or status
#[utoipa::path(
    patch,
    path = "/api/loads/{id}",
    tag = LOAD_TAG,
    params(
        ("id" = i32, Path, description = "Load ID")
    ),
    request_body = UpdateLoadDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Load updated", body = LoadDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not write loads", body = ErrorDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_load(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLoadDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(LOAD_CREW, "update loads")?;

    let load = LoadService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(load)))
}

#[utoipa::path(
    delete,
    path = "/api/loads/{id}",
    tag = LOAD_TAG,
    params(
        ("id" = i32, Path, description = "Load ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Load deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not write loads", body = ErrorDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_load(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(LOAD_CREW, "delete loads")?;

    LoadService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
