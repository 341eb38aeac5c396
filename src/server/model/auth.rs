//! Bearer token authentication.
//!
//! Tokens are issued by an external identity provider and signed with HS256.
//! [`AuthUser`] is an axum extractor that verifies the token and exposes the user
//! ID and role set to handlers, which then apply their own role gates.

use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Loader,
    Pilot,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Loader => "ROLE_LOADER",
            Self::Pilot => "ROLE_PILOT",
            Self::Manager => "ROLE_MANAGER",
        }
    }

    /// Unknown role names are ignored rather than rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ROLE_USER" => Some(Self::User),
            "ROLE_LOADER" => Some(Self::Loader),
            "ROLE_PILOT" => Some(Self::Pilot),
            "ROLE_MANAGER" => Some(Self::Manager),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID encoded as a string
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Verified identity of the caller.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub roles: Vec<Role>,
}

impl AuthUser {
    pub fn new(user_id: i32, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    /// Decode and verify an HS256 token, checking its expiry.
    pub fn from_token(token: &str, key: &DecodingKey) -> Result<Self, AuthError> {
        let data = decode::<Claims>(token, key, &Validation::new(Algorithm::HS256))?;

        let user_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidSubject(data.claims.sub.clone()))?;
        let roles = data
            .claims
            .roles
            .iter()
            .filter_map(|name| Role::parse(name))
            .collect();

        Ok(Self { user_id, roles })
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Succeeds if the user holds any of `roles`.
    ///
    /// # Arguments
    /// - `roles` - Roles permitted to perform `action`
    /// - `action` - Short description used in logs, e.g. `"view dashboard stats"`
    pub fn require_any(&self, roles: &[Role], action: &'static str) -> Result<(), AuthError> {
        if roles.iter().any(|role| self.has_role(*role)) {
            return Ok(());
        }

        Err(AuthError::AccessDenied {
            user_id: self.user_id,
            action,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        Ok(Self::from_token(token.trim(), &state.jwt_key)?)
    }
}
