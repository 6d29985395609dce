pub mod add_playlist_song;
pub mod create_playlist;
pub mod delete_playlist;
pub mod delete_playlist_song;
pub mod get_playlist_songs;
pub mod list_playlists;

pub use add_playlist_song::add_playlist_song;
pub use create_playlist::create_playlist;
pub use delete_playlist::delete_playlist;
pub use delete_playlist_song::delete_playlist_song;
pub use get_playlist_songs::get_playlist_songs;
pub use list_playlists::list_playlists;

use serde::Deserialize;

use crate::domain::common::FieldError;
use crate::domain::common::required_text;
use crate::domain::song::models::SongId;

/// Body of `POST` and `DELETE /playlists/{id}/songs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSongRequest {
    song_id: String,
}

impl PlaylistSongRequest {
    fn try_into_song_id(self) -> Result<SongId, FieldError> {
        Ok(SongId::from(required_text("songId", self.song_id, usize::MAX)?))
    }
}
