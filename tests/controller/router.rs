//! Tests sending requests through the full router.
//!
//! Covers bearer token extraction, which the direct handler tests bypass.

use agrispray::server::router::routes;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use super::*;

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    request.body(Body::empty()).unwrap()
}

/// Tests a request without an Authorization header.
///
/// Expected: 401 Unauthorized response
#[tokio::test]
async fn missing_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;
    let app = routes().with_state(test.app_state());

    let resp = app.oneshot(get("/api/dashboard-stats", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests tokens that are expired or signed with another secret.
///
/// Expected: 401 Unauthorized response for both
#[tokio::test]
async fn invalid_tokens_are_unauthorized() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let expired = test.auth().mint_expired_token(1, &["ROLE_MANAGER"])?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .clone()
        .oneshot(get("/api/dashboard-stats", Some(&expired)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(get("/api/dashboard-stats", Some("not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests role gates on the dashboard.
///
/// Expected: 403 Forbidden for a pilot token, 200 OK for a manager token
#[tokio::test]
async fn dashboard_requires_manager_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let pilot_token = test.auth().mint_token(2, &["ROLE_USER", "ROLE_PILOT"])?;
    let manager_token = test.auth().mint_token(1, &["ROLE_USER", "ROLE_MANAGER"])?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .clone()
        .oneshot(get("/api/dashboard-stats", Some(&pilot_token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .oneshot(get("/api/dashboard-stats", Some(&manager_token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests the mission summary query string through the router.
///
/// Expected: 200 OK for valid filters, 400 Bad Request for an unknown status
#[tokio::test]
async fn mission_summary_query_parsing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let token = test.auth().mint_token(1, &["ROLE_MANAGER"])?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .clone()
        .oneshot(get(
            "/api/mission-summaries?status=in_progress&pilot=3&page=2&limit=5",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/api/mission-summaries?status=flying", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests page and limit values too large to paginate with.
///
/// Expected: 422 Unprocessable Entity for both, no panic on offset arithmetic
#[tokio::test]
async fn oversized_pagination_is_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_operations_tables().build().await?;
    let token = test.auth().mint_token(1, &["ROLE_MANAGER"])?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .clone()
        .oneshot(get(
            "/api/mission-summaries?page=18446744073709551615&limit=2",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .clone()
        .oneshot(get(
            "/api/mission-summaries?page=1&limit=18446744073709551615",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .oneshot(get("/api/mission-summaries?page=3&limit=100", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK response
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_operations_tables().build().await?;
    let app = routes().with_state(test.app_state());

    let resp = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
