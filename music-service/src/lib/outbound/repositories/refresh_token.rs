use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::authentication::models::RefreshToken;
use crate::domain::authentication::ports::RefreshTokenRepository;

/// Issued refresh tokens, keyed by their own value.
pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn save(&self, token: &RefreshToken) -> Result<(), AuthenticationError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AuthenticationError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn exists(&self, token: &RefreshToken) -> Result<bool, AuthenticationError> {
        let row = sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthenticationError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn delete(&self, token: &RefreshToken) -> Result<(), AuthenticationError> {
        let result = sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AuthenticationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthenticationError::UnknownRefreshToken);
        }

        Ok(())
    }
}
