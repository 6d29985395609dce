use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::album::models::AlbumId;
use crate::domain::common::ReleaseYear;
use crate::domain::song::errors::SongError;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongFilter;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;
use crate::domain::song::ports::SongRepository;

pub struct PostgresSongRepository {
    pool: PgPool,
}

impl PostgresSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_song(row: PgRow) -> Result<Song, SongError> {
        Ok(Song {
            id: SongId(row.get("id")),
            title: row.get("title"),
            year: ReleaseYear::new(row.get("year"))?,
            genre: row.get("genre"),
            performer: row.get("performer"),
            duration: row.get("duration"),
            album_id: row.get::<Option<String>, _>("album_id").map(AlbumId),
        })
    }

    fn map_write_error(e: sqlx::Error, song: &Song) -> SongError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation()
                && db_err.constraint() == Some("songs_album_id_fkey")
            {
                if let Some(album_id) = &song.album_id {
                    return SongError::AlbumNotFound(album_id.clone());
                }
            }
        }
        SongError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SongRepository for PostgresSongRepository {
    async fn create(&self, song: Song) -> Result<Song, SongError> {
        sqlx::query(
            r#"
            INSERT INTO songs (id, title, year, genre, performer, duration, album_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(song.id.as_str())
        .bind(&song.title)
        .bind(song.year.value())
        .bind(&song.genre)
        .bind(&song.performer)
        .bind(song.duration)
        .bind(song.album_id.as_ref().map(AlbumId::as_str))
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &song))?;

        Ok(song)
    }

    async fn search(&self, filter: &SongFilter) -> Result<Vec<SongSummary>, SongError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, performer
            FROM songs
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 ESCAPE '\')
              AND ($2::TEXT IS NULL OR performer ILIKE $2 ESCAPE '\')
            ORDER BY title
            "#,
        )
        .bind(filter.title.as_deref().map(contains_pattern))
        .bind(filter.performer.as_deref().map(contains_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| SongSummary {
                id: SongId(r.get("id")),
                title: r.get("title"),
                performer: r.get("performer"),
            })
            .collect())
    }

    async fn find_by_id(&self, id: &SongId) -> Result<Option<Song>, SongError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, year, genre, performer, duration, album_id
            FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_song).transpose()
    }

    async fn update(&self, song: Song) -> Result<Song, SongError> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET title = $2, year = $3, genre = $4, performer = $5, duration = $6, album_id = $7
            WHERE id = $1
            "#,
        )
        .bind(song.id.as_str())
        .bind(&song.title)
        .bind(song.year.value())
        .bind(&song.genre)
        .bind(&song.performer)
        .bind(song.duration)
        .bind(song.album_id.as_ref().map(AlbumId::as_str))
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &song))?;

        if result.rows_affected() == 0 {
            return Err(SongError::NotFound(song.id));
        }

        Ok(song)
    }

    async fn delete(&self, id: &SongId) -> Result<(), SongError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| SongError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SongError::NotFound(id.clone()));
        }

        Ok(())
    }
}

/// `ILIKE` pattern matching `value` anywhere, with `%`, `_` and `\` taken literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_plain_text() {
        assert_eq!(contains_pattern("life"), "%life%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("%"), "%\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }
}
