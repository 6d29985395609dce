pub mod album;
pub mod collaboration;
pub mod playlist;
pub mod refresh_token;
pub mod song;
pub mod user;

pub use album::PostgresAlbumRepository;
pub use collaboration::PostgresCollaborationRepository;
pub use playlist::PostgresPlaylistRepository;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use song::PostgresSongRepository;
pub use user::PostgresUserRepository;
