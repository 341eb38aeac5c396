use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        controller::MANAGER,
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::dashboard::DashboardStatsBuilder,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the system-wide dashboard snapshot
///
/// Every count and aggregate is recomputed from current state on each request.
#[utoipa::path(
    get,
    path = "/api/dashboard-stats",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when building the dashboard snapshot", body = DashboardStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MANAGER, "view dashboard stats")?;

    let stats = DashboardStatsBuilder::new(&state.db).build().await?;

    Ok((StatusCode::OK, Json(stats)))
}
