use std::fmt;

use crate::domain::album::errors::AlbumError;
use crate::domain::common::generate_id;
use crate::domain::common::required_text;
use crate::domain::common::ReleaseYear;
use crate::domain::song::models::SongSummary;

/// Album aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub year: ReleaseYear,
}

/// Opaque album identifier (`album-<16 chars>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(pub String);

impl AlbumId {
    pub fn new() -> Self {
        Self(generate_id("album"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AlbumId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for AlbumId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated album fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCommand {
    pub name: String,
    pub year: ReleaseYear,
}

impl AlbumCommand {
    const MAX_NAME_LENGTH: usize = 255;

    pub fn new(name: String, year: i32) -> Result<Self, AlbumError> {
        Ok(Self {
            name: required_text("name", name, Self::MAX_NAME_LENGTH)?,
            year: ReleaseYear::new(year)?,
        })
    }
}

/// Album together with the songs that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumWithSongs {
    pub album: Album,
    pub songs: Vec<SongSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::FieldError;
    use crate::domain::common::YearError;

    #[test]
    fn test_album_command_validation() {
        let command = AlbumCommand::new("Viva la Vida".to_string(), 2008).unwrap();
        assert_eq!(command.name, "Viva la Vida");
        assert_eq!(command.year.value(), 2008);

        assert!(matches!(
            AlbumCommand::new("".to_string(), 2008),
            Err(AlbumError::InvalidField(FieldError::Empty { field: "name" }))
        ));
        assert!(matches!(
            AlbumCommand::new("Viva la Vida".to_string(), 1800),
            Err(AlbumError::InvalidYear(YearError::OutOfRange { actual: 1800, .. }))
        ));
    }

    #[test]
    fn test_album_id_prefix() {
        assert!(AlbumId::new().as_str().starts_with("album-"));
    }
}
