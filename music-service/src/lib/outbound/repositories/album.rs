use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumId;
use crate::domain::album::ports::AlbumRepository;
use crate::domain::common::ReleaseYear;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;

pub struct PostgresAlbumRepository {
    pool: PgPool,
}

impl PostgresAlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_album(row: PgRow) -> Result<Album, AlbumError> {
        Ok(Album {
            id: AlbumId(row.get("id")),
            name: row.get("name"),
            year: ReleaseYear::new(row.get("year"))?,
        })
    }
}

#[async_trait]
impl AlbumRepository for PostgresAlbumRepository {
    async fn create(&self, album: Album) -> Result<Album, AlbumError> {
        sqlx::query("INSERT INTO albums (id, name, year) VALUES ($1, $2, $3)")
            .bind(album.id.as_str())
            .bind(&album.name)
            .bind(album.year.value())
            .execute(&self.pool)
            .await
            .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        Ok(album)
    }

    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, AlbumError> {
        let row = sqlx::query("SELECT id, name, year FROM albums WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_album).transpose()
    }

    async fn find_songs(&self, id: &AlbumId) -> Result<Vec<SongSummary>, AlbumError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, performer
            FROM songs
            WHERE album_id = $1
            ORDER BY title
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| SongSummary {
                id: SongId(r.get("id")),
                title: r.get("title"),
                performer: r.get("performer"),
            })
            .collect())
    }

    async fn update(&self, album: Album) -> Result<Album, AlbumError> {
        let result = sqlx::query("UPDATE albums SET name = $2, year = $3 WHERE id = $1")
            .bind(album.id.as_str())
            .bind(&album.name)
            .bind(album.year.value())
            .execute(&self.pool)
            .await
            .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AlbumError::NotFound(album.id));
        }

        Ok(album)
    }

    async fn delete(&self, id: &AlbumId) -> Result<(), AlbumError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AlbumError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AlbumError::NotFound(id.clone()));
        }

        Ok(())
    }
}
