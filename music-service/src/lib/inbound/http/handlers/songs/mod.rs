pub mod create_song;
pub mod delete_song;
pub mod get_song;
pub mod list_songs;
pub mod update_song;

pub use create_song::create_song;
pub use delete_song::delete_song;
pub use get_song::get_song;
pub use list_songs::list_songs;
pub use update_song::update_song;

use serde::Deserialize;

use crate::domain::song::errors::SongError;
use crate::domain::song::models::SongCommand;

/// Body of `POST /songs` and `PUT /songs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    title: String,
    year: i32,
    genre: String,
    performer: String,
    #[serde(default)]
    duration: Option<i32>,
    #[serde(default)]
    album_id: Option<String>,
}

impl SongRequest {
    fn try_into_command(self) -> Result<SongCommand, SongError> {
        SongCommand::new(
            self.title,
            self.year,
            self.genre,
            self.performer,
            self.duration,
            self.album_id,
        )
    }
}
