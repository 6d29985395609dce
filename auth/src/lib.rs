//! Authentication primitives shared by the service crates.
//!
//! - Password hashing (Argon2id)
//! - Access/refresh JWT issuance and verification with independent keys
//!
//! Neither piece touches storage: persisting refresh tokens and looking up
//! users belongs to the service that uses them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("secret123").unwrap();
//! assert!(hasher.verify("secret123", &hash).is_ok());
//! assert!(hasher.verify("secret124", &hash).is_err());
//! ```
//!
//! ## Token Pair
//! ```
//! use auth::{TokenManager, TokenSettings};
//! use chrono::Duration;
//!
//! let tokens = TokenManager::new(
//!     TokenSettings { secret: b"access_secret_key_at_least_32_bytes!", max_age: Duration::minutes(30) },
//!     TokenSettings { secret: b"refresh_secret_key_at_least_32_bytes", max_age: Duration::days(30) },
//! )
//! .unwrap();
//!
//! let access = tokens.create_access_token("user-abc").unwrap();
//! let claims = tokens.verify_access_token(&access).unwrap();
//! assert_eq!(claims.subject(), "user-abc");
//! ```

pub mod jwt;
pub mod password;
pub mod token_manager;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token_manager::TokenManager;
pub use token_manager::TokenSettings;
