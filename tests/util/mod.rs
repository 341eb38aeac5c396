//! Shared helpers for integration tests.

use agrispray::server::model::{
    app::AppState,
    auth::{AuthUser, Role},
};
use agrispray_test_utils::TestContext;
use axum::response::Response;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }
}

pub fn manager() -> AuthUser {
    AuthUser::new(1, vec![Role::User, Role::Manager])
}

pub fn pilot(user_id: i32) -> AuthUser {
    AuthUser::new(user_id, vec![Role::User, Role::Pilot])
}

pub fn loader() -> AuthUser {
    AuthUser::new(50, vec![Role::User, Role::Loader])
}

/// Read a JSON response body
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}
