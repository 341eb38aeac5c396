//! Factory functions for bearer token claims.

use chrono::Utc;
use serde::Serialize;

/// Claim set accepted by the agrispray bearer token extractor.
#[derive(Serialize, Debug, Clone)]
pub struct MockClaims {
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Create claims for `user_id` that expire 15 minutes from now.
pub fn mock_claims(user_id: i32, roles: &[&str]) -> MockClaims {
    MockClaims {
        sub: user_id.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        exp: Utc::now().timestamp() + 900,
    }
}
