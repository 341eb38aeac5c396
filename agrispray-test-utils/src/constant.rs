//! Test configuration constants.

/// Signing secret shared by minted test tokens and the test application state.
///
/// Placeholder value for testing only.
pub static TEST_JWT_SECRET: &str = "agrispray_test_jwt_secret";
