pub mod album;
pub mod authentication;
pub mod collaboration;
pub mod common;
pub mod playlist;
pub mod song;
pub mod user;
