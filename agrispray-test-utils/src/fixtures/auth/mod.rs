pub mod factory;

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Mint an HS256 bearer token signed with the context's secret.
    ///
    /// # Arguments
    /// - `user_id` - Value written to the `sub` claim
    /// - `roles` - Role names such as `ROLE_MANAGER`
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token, without the `Bearer ` prefix
    /// - `Err(TestError::JwtError)` - Encoding failed
    pub fn mint_token(&self, user_id: i32, roles: &[&str]) -> Result<String, TestError> {
        let claims = factory::mock_claims(user_id, roles);

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.setup.jwt_secret.as_bytes()),
        )?)
    }

    /// Mint a token whose `exp` claim is already in the past.
    pub fn mint_expired_token(&self, user_id: i32, roles: &[&str]) -> Result<String, TestError> {
        let mut claims = factory::mock_claims(user_id, roles);
        claims.exp = chrono::Utc::now().timestamp() - 3600;

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.setup.jwt_secret.as_bytes()),
        )?)
    }
}
