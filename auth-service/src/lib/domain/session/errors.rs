use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for refresh token store operations
#[derive(Debug, Clone, Error)]
pub enum RefreshTokenStoreError {
    #[error("Refresh token not found")]
    NotFound,

    #[error("Token store unavailable: {0}")]
    Unavailable(String),

    #[error("Stored token record is malformed: {0}")]
    MalformedRecord(String),
}

/// Error for user directory lookups
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    #[error("User directory unavailable: {0}")]
    Unavailable(String),

    #[error("Directory record is malformed: {0}")]
    MalformedRecord(String),
}

/// Classified outcome of a failed authentication operation.
///
/// One variant per wire status. The carried message is the caller-safe text;
/// underlying causes are logged at the point of classification and never
/// cross the service boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Malformed caller input
    #[error("{0}")]
    Validation(String),

    /// Credentials or tokens that cannot be accepted
    #[error("{0}")]
    Authentication(String),

    /// A downstream dependency is unreachable
    #[error("{0}")]
    Availability(String),

    /// Unexpected internal failure
    #[error("{0}")]
    Internal(String),
}

impl AuthError {
    /// Rejection shared by unknown email and wrong password. The two cases
    /// must stay byte-identical to the caller.
    pub fn invalid_credentials() -> Self {
        Self::Authentication("invalid email or password".to_string())
    }

    /// Rejection shared by malformed, tampered, and expired access tokens.
    pub fn invalid_access_token() -> Self {
        Self::Authentication("invalid or expired token".to_string())
    }

    /// Rejection shared by unknown, expired, rotated, and revoked refresh
    /// tokens.
    pub fn invalid_refresh_token() -> Self {
        Self::Authentication("invalid refresh token".to_string())
    }

    pub fn directory_unavailable() -> Self {
        Self::Availability("user directory unavailable".to_string())
    }

    pub fn store_unavailable() -> Self {
        Self::Availability("token store unavailable".to_string())
    }

    pub fn internal() -> Self {
        Self::Internal("internal error".to_string())
    }
}
