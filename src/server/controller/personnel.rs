use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        personnel::{
            CreateLoaderDto, CreatePilotDto, LoaderDto, PilotDto, UpdateLoaderDto, UpdatePilotDto,
        },
    },
    server::{
        controller::{FIELD_STAFF, MANAGER},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::directory::DirectoryService,
    },
};

pub static PERSONNEL_TAG: &str = "personnel";

#[utoipa::path(
    get,
    path = "/api/pilots",
    tag = PERSONNEL_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing pilots", body = Vec<PilotDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilots(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let pilots = DirectoryService::new(&state.db).get_pilots().await?;

    Ok((StatusCode::OK, Json(pilots)))
}

#[utoipa::path(
    post,
    path = "/api/pilots",
    tag = PERSONNEL_TAG,
    request_body = CreatePilotDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Pilot created", body = PilotDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePilotDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "create pilots")?;

    let pilot = DirectoryService::new(&state.db).create_pilot(payload).await?;

    Ok((StatusCode::CREATED, Json(pilot)))
}

#[utoipa::path(
    get,
    path = "/api/loaders",
    tag = PERSONNEL_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing loaders", body = Vec<LoaderDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loaders(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let loaders = DirectoryService::new(&state.db).get_loaders().await?;

    Ok((StatusCode::OK, Json(loaders)))
}

#[utoipa::path(
    post,
    path = "/api/loaders",
    tag = PERSONNEL_TAG,
    request_body = CreateLoaderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Loader created", body = LoaderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_loader(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateLoaderDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "create loaders")?;

    let loader = DirectoryService::new(&state.db).create_loader(payload).await?;

    Ok((StatusCode::CREATED, Json(loader)))
}

#[utoipa::path(
    get,
    path = "/api/pilots/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the pilot", body = PilotDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pilot = DirectoryService::new(&state.db).get_pilot(id).await?;

    Ok((StatusCode::OK, Json(pilot)))
}

#[utoipa::path(
    patch,
    path = "/api/pilots/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    request_body = UpdatePilotDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pilot updated", body = PilotDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pilot(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePilotDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "update pilots")?;

    let pilot = DirectoryService::new(&state.db).update_pilot(id, payload).await?;

    Ok((StatusCode::OK, Json(pilot)))
}

#[utoipa::path(
    delete,
    path = "/api/pilots/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Pilot deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 422, description = "Pilot still flies missions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pilot(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "delete pilots")?;

    DirectoryService::new(&state.db).delete_pilot(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/loaders/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Loader ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the loader", body = LoaderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Loader not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loader(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let loader = DirectoryService::new(&state.db).get_loader(id).await?;

    Ok((StatusCode::OK, Json(loader)))
}

#[utoipa::path(
    patch,
    path = "/api/loaders/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Loader ID")
    ),
    request_body = UpdateLoaderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Loader updated", body = LoaderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 404, description = "Loader not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_loader(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLoaderDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "update loaders")?;

    let loader = DirectoryService::new(&state.db).update_loader(id, payload).await?;

    Ok((StatusCode::OK, Json(loader)))
}

#[utoipa::path(
    delete,
    path = "/api/loaders/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Loader ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Loader deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 404, description = "Loader not found", body = ErrorDto),
        (status = 422, description = "Loader still has loads", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_loader(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "delete loaders")?;

    DirectoryService::new(&state.db).delete_loader(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
