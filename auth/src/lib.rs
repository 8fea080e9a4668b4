//! Authentication primitives library
//!
//! Provides the leaf building blocks for the authentication service:
//! - Password hashing (Argon2id)
//! - Access token issuance and validation with a fixed claim set
//!
//! The service defines its own orchestration and ports on top of these
//! primitives; nothing in this crate talks to the network or a store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(15));
//! let token = issuer.issue("user123", "alice@example.com", "user").unwrap();
//! let claims = issuer.validate(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.role, "user");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::AccessTokenClaims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
