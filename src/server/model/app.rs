use jsonwebtoken::DecodingKey;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Verifies HS256 bearer tokens
    pub jwt_key: DecodingKey,
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            jwt_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}
