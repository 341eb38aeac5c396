use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mission::{
            CreateMissionDto, MissionDto, MissionSummaryDto, MissionQuery, UpdateMissionDto,
        },
    },
    server::{
        controller::{FIELD_STAFF, MANAGER},
        data::{
            load::LoadRepository,
            mission::MissionRepository,
            store::{MissionCriteria, Pagination},
        },
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::{mission::MissionService, summary::MissionSummaryBuilder},
    },
};

pub static MISSION_TAG: &str = "mission";

/// List mission summaries
///
/// Summaries are ordered by `scheduledAt` descending with unscheduled missions last.
#[utoipa::path(
    get,
    path = "/api/mission-summaries",
    tag = MISSION_TAG,
    params(MissionQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing mission summaries", body = Vec<MissionSummaryDto>),
        (status = 400, description = "Invalid query parameter", body = String),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 422, description = "Page or limit out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_summaries(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<MissionQuery>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "view mission summaries")?;

    let criteria = MissionCriteria {
        status: query.status,
        pilot_id: query.pilot,
        customer_id: query.customer,
        pagination: Some(Pagination::new(query.page, query.limit)?),
    };

    let summaries = MissionSummaryBuilder::new(
        MissionRepository::new(&state.db),
        LoadRepository::new(&state.db),
    )
    .build(&criteria)
    .await?;

    Ok((StatusCode::OK, Json(summaries)))
}

/// List every mission summary for one pilot
///
/// Managers may view any pilot; a pilot may only view their own missions.
#[utoipa::path(
    get,
    path = "/api/pilot/{id}/missions",
    tag = MISSION_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing the pilot's missions", body = Vec<MissionSummaryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager or the pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_missions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(pilot_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let is_self = user.has_role(Role::Pilot) && user.user_id == pilot_id;
    if !is_self {
        user.require_any(MANAGER, "view pilot missions")?;
    }

    let criteria = MissionCriteria {
        pilot_id: Some(pilot_id),
        ..Default::default()
    };

    let summaries = MissionSummaryBuilder::new(
        MissionRepository::new(&state.db),
        LoadRepository::new(&state.db),
    )
    .build(&criteria)
    .await?;

    Ok((StatusCode::OK, Json(summaries)))
}

/// List missions
///
/// Takes the same filters and page as the mission summaries, in the same order.
#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    params(MissionQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing missions", body = Vec<MissionDto>),
        (status = 400, description = "Invalid query parameter", body = String),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Page or limit out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<MissionQuery>,
) -> Result<impl IntoResponse, Error> {
    let criteria = MissionCriteria {
        status: query.status,
        pilot_id: query.pilot,
        customer_id: query.customer,
        pagination: Some(Pagination::new(query.page, query.limit)?),
    };

    let missions = MissionService::new(&state.db).get_all(&criteria).await?;

    Ok((StatusCode::OK, Json(missions)))
}

/// Create a mission
#[utoipa::path(
    post,
    path = "/api/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Mission created", body = MissionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 404, description = "Referenced pilot, customer, base or aircraft not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateMissionDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "create missions")?;

    let mission = MissionService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(mission)))
}

/// Get a mission with its aircraft and display fields
#[utoipa::path(
    get,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when retrieving the mission", body = MissionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mission = MissionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(mission)))
}

/// Partially update a mission
///
/// A present `aircraftIds` replaces every aircraft assignment.
#[utoipa::path(
    patch,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    request_body = UpdateMissionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Mission updated", body = MissionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 404, description = "Mission or a referenced record not found", body = ErrorDto),
        (status = 422, description = "Request body failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mission(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMissionDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "update missions")?;

    let mission = MissionService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(mission)))
}

/// Delete a mission
///
/// Missions that still have loads are kept; delete their loads first.
#[utoipa::path(
    delete,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Mission deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither a manager nor a pilot", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 422, description = "Mission still has loads", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mission(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(FIELD_STAFF, "delete missions")?;

    MissionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
