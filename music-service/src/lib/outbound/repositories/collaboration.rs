use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::collaboration::errors::CollaborationError;
use crate::domain::collaboration::models::Collaboration;
use crate::domain::collaboration::ports::CollaborationRepository;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::user::models::UserId;

pub struct PostgresCollaborationRepository {
    pool: PgPool,
}

impl PostgresCollaborationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollaborationRepository for PostgresCollaborationRepository {
    async fn create(
        &self,
        collaboration: Collaboration,
    ) -> Result<Collaboration, CollaborationError> {
        sqlx::query("INSERT INTO collaborations (id, playlist_id, user_id) VALUES ($1, $2, $3)")
            .bind(collaboration.id.as_str())
            .bind(collaboration.playlist_id.as_str())
            .bind(collaboration.user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation()
                        && db_err.constraint() == Some("collaborations_playlist_id_user_id_key")
                    {
                        return CollaborationError::AlreadyExists;
                    }
                    if db_err.is_foreign_key_violation() {
                        match db_err.constraint() {
                            Some("collaborations_user_id_fkey") => {
                                return CollaborationError::UserNotFound(
                                    collaboration.user_id.clone(),
                                );
                            }
                            Some("collaborations_playlist_id_fkey") => {
                                return CollaborationError::Playlist(PlaylistError::NotFound(
                                    collaboration.playlist_id.clone(),
                                ));
                            }
                            _ => {}
                        }
                    }
                }
                CollaborationError::DatabaseError(e.to_string())
            })?;

        Ok(collaboration)
    }

    async fn exists(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<bool, CollaborationError> {
        let row =
            sqlx::query("SELECT id FROM collaborations WHERE playlist_id = $1 AND user_id = $2")
                .bind(playlist_id.as_str())
                .bind(user_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| CollaborationError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn delete(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<(), CollaborationError> {
        let result =
            sqlx::query("DELETE FROM collaborations WHERE playlist_id = $1 AND user_id = $2")
                .bind(playlist_id.as_str())
                .bind(user_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| CollaborationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CollaborationError::NotFound);
        }

        Ok(())
    }
}
