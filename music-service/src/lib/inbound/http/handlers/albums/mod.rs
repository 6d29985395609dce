pub mod create_album;
pub mod delete_album;
pub mod get_album;
pub mod update_album;

pub use create_album::create_album;
pub use delete_album::delete_album;
pub use get_album::get_album;
pub use update_album::update_album;

use serde::Deserialize;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::AlbumCommand;

/// Body of `POST /albums` and `PUT /albums/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumRequest {
    name: String,
    year: i32,
}

impl AlbumRequest {
    fn try_into_command(self) -> Result<AlbumCommand, AlbumError> {
        AlbumCommand::new(self.name, self.year)
    }
}
