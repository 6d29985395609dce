use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::common::generate_id;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::PlaylistSummary;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;
use crate::domain::user::models::UserId;

pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError> {
        sqlx::query("INSERT INTO playlists (id, name, owner) VALUES ($1, $2, $3)")
            .bind(playlist.id.as_str())
            .bind(&playlist.name)
            .bind(playlist.owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(playlist)
    }

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError> {
        let row = sqlx::query("SELECT id, name, owner FROM playlists WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Playlist {
            id: PlaylistId(r.get("id")),
            name: r.get("name"),
            owner: UserId(r.get("owner")),
        }))
    }

    async fn find_summary(
        &self,
        id: &PlaylistId,
    ) -> Result<Option<PlaylistSummary>, PlaylistError> {
        let row = sqlx::query(
            r#"
            SELECT p.id, p.name, u.username
            FROM playlists p
            JOIN users u ON u.id = p.owner
            WHERE p.id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| PlaylistSummary {
            id: PlaylistId(r.get("id")),
            name: r.get("name"),
            username: r.get("username"),
        }))
    }

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<PlaylistSummary>, PlaylistError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT p.id, p.name, u.username
            FROM playlists p
            JOIN users u ON u.id = p.owner
            LEFT JOIN collaborations c ON c.playlist_id = p.id
            WHERE p.owner = $1 OR c.user_id = $1
            ORDER BY p.name
            "#,
        )
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| PlaylistSummary {
                id: PlaylistId(r.get("id")),
                name: r.get("name"),
                username: r.get("username"),
            })
            .collect())
    }

    async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PlaylistError::NotFound(id.clone()));
        }

        Ok(())
    }

    async fn add_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError> {
        sqlx::query("INSERT INTO playlist_songs (id, playlist_id, song_id) VALUES ($1, $2, $3)")
            .bind(generate_id("playlist-song"))
            .bind(id.as_str())
            .bind(song_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation()
                        && db_err.constraint() == Some("playlist_songs_playlist_id_song_id_key")
                    {
                        return PlaylistError::SongAlreadyInPlaylist(song_id.clone());
                    }
                    if db_err.is_foreign_key_violation() {
                        match db_err.constraint() {
                            Some("playlist_songs_song_id_fkey") => {
                                return PlaylistError::SongNotFound(song_id.clone());
                            }
                            // Playlist deleted between the access check and the insert
                            Some("playlist_songs_playlist_id_fkey") => {
                                return PlaylistError::NotFound(id.clone());
                            }
                            _ => {}
                        }
                    }
                }
                PlaylistError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn find_songs(&self, id: &PlaylistId) -> Result<Vec<SongSummary>, PlaylistError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.title, s.performer
            FROM playlist_songs ps
            JOIN songs s ON s.id = ps.song_id
            WHERE ps.playlist_id = $1
            ORDER BY s.title
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| SongSummary {
                id: SongId(r.get("id")),
                title: r.get("title"),
                performer: r.get("performer"),
            })
            .collect())
    }

    async fn remove_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError> {
        let result =
            sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = $1 AND song_id = $2")
                .bind(id.as_str())
                .bind(song_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PlaylistError::SongNotInPlaylist(song_id.clone()));
        }

        Ok(())
    }
}
