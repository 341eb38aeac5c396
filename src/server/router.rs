//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `bearer_auth` scheme referenced by every handler.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Every endpoint requires `Authorization: Bearer <JWT>`; role gates are applied by the
/// handlers themselves.
///
/// # Registered Endpoints
/// - `GET /api/dashboard-stats` - System-wide counts and aggregates
/// - `GET /api/mission-summaries` - Filtered, paginated mission summaries
/// - `GET /api/pilot/{id}/missions` - Every mission summary for one pilot
/// - `GET|POST /api/pilots`, `/api/loaders` - Personnel, `GET|PATCH|DELETE` on `/{id}`
/// - `GET|POST /api/customers`, `/api/chemicals`, `/api/bases`, `/api/aircraft` - Reference
///   records, `GET|PATCH|DELETE` on `/{id}`
/// - `GET|POST /api/missions`, `GET|PATCH|DELETE /api/missions/{id}` - Missions
/// - `GET|POST /api/loads`, `GET|PATCH|DELETE /api/loads/{id}` - Loads
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from((db, config.jwt_secret));
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&BearerAuth),
        info(title = "Agrispray", description = "Agrispray API"),
        tags(
            (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard snapshot"),
            (name = controller::mission::MISSION_TAG, description = "Missions and mission summaries"),
            (name = controller::load::LOAD_TAG, description = "Chemical and water loads"),
            (name = controller::personnel::PERSONNEL_TAG, description = "Pilots and loaders"),
            (name = controller::catalog::CATALOG_TAG, description = "Customers, chemicals, bases and aircraft"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::dashboard::get_dashboard_stats))
        .routes(routes!(controller::mission::get_mission_summaries))
        .routes(routes!(controller::mission::get_pilot_missions))
        .routes(routes!(
            controller::mission::get_missions,
            controller::mission::create_mission
        ))
        .routes(routes!(
            controller::mission::get_mission,
            controller::mission::update_mission,
            controller::mission::delete_mission
        ))
        .routes(routes!(
            controller::load::get_loads,
            controller::load::create_load
        ))
        .routes(routes!(
            controller::load::get_load,
            controller::load::update_load,
            controller::load::delete_load
        ))
        .routes(routes!(
            controller::personnel::get_pilots,
            controller::personnel::create_pilot
        ))
        .routes(routes!(
            controller::personnel::get_pilot,
            controller::personnel::update_pilot,
            controller::personnel::delete_pilot
        ))
        .routes(routes!(
            controller::personnel::get_loaders,
            controller::personnel::create_loader
        ))
        .routes(routes!(
            controller::personnel::get_loader,
            controller::personnel::update_loader,
            controller::personnel::delete_loader
        ))
        .routes(routes!(
            controller::catalog::get_customers,
            controller::catalog::create_customer
        ))
        .routes(routes!(
            controller::catalog::get_customer,
            controller::catalog::update_customer,
            controller::catalog::delete_customer
        ))
        .routes(routes!(
            controller::catalog::get_chemicals,
            controller::catalog::create_chemical
        ))
        .routes(routes!(
            controller::catalog::get_chemical,
            controller::catalog::update_chemical,
            controller::catalog::delete_chemical
        ))
        .routes(routes!(
            controller::catalog::get_bases,
            controller::catalog::create_base
        ))
        .routes(routes!(
            controller::catalog::get_base,
            controller::catalog::update_base,
            controller::catalog::delete_base
        ))
        .routes(routes!(
            controller::catalog::get_aircraft,
            controller::catalog::create_aircraft
        ))
        .routes(routes!(
            controller::catalog::get_aircraft_by_id,
            controller::catalog::update_aircraft,
            controller::catalog::delete_aircraft
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

