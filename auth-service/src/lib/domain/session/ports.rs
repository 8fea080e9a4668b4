use async_trait::async_trait;

use auth::AccessTokenClaims;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::RefreshTokenStoreError;
use crate::domain::session::errors::UserDirectoryError;
use crate::domain::session::models::Credential;
use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::TokenPair;
use crate::domain::session::models::UserId;
use crate::domain::session::models::UserRecord;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and open a session.
    ///
    /// # Arguments
    /// * `email` - Raw email from the caller
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Access/refresh token pair
    ///
    /// # Errors
    /// * `Authentication` - Unknown email or wrong password, indistinguishably
    /// * `Availability` - User directory unreachable
    /// * `Internal` - Token signing or token persistence failed
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError>;

    /// Validate an access token and return its claims.
    ///
    /// Side-effect free; used by the gateway on every protected request.
    ///
    /// # Errors
    /// * `Authentication` - Token is malformed, tampered with, or expired
    async fn validate(&self, access_token: &str) -> Result<AccessTokenClaims, AuthError>;

    /// Exchange a live refresh token for a fresh token pair.
    ///
    /// Claims in the new access token reflect the directory's current record,
    /// not the claims the token was originally issued with.
    ///
    /// # Errors
    /// * `Validation` - Empty refresh token
    /// * `Authentication` - Token unknown, expired, or the user is gone
    /// * `Availability` - Token store or user directory unreachable
    /// * `Internal` - Token signing or rotation failed
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Revoke a refresh token.
    ///
    /// # Errors
    /// * `Validation` - Empty refresh token
    /// * `Authentication` - Token was not live
    /// * `Availability` - Token store unreachable
    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError>;
}

/// Keyed TTL storage for opaque refresh tokens.
///
/// A token value maps to at most one user at any instant; a user may hold
/// any number of live tokens. Implementations only need atomic single-key
/// operations.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync + 'static {
    /// Generate a cryptographically random opaque token and persist it for
    /// the user with the store's TTL.
    ///
    /// # Errors
    /// * `Unavailable` - Backing store unreachable
    async fn create(&self, user_id: &UserId) -> Result<String, RefreshTokenStoreError>;

    /// Resolve a token to the user it was issued for.
    ///
    /// # Errors
    /// * `NotFound` - Token absent or expired
    /// * `Unavailable` - Backing store unreachable
    async fn get(&self, token: &str) -> Result<UserId, RefreshTokenStoreError>;

    /// Remove a token mapping.
    ///
    /// # Errors
    /// * `NotFound` - Token was not present; revocation of an unknown token
    ///   is rejected rather than silently accepted
    /// * `Unavailable` - Backing store unreachable
    async fn delete(&self, token: &str) -> Result<(), RefreshTokenStoreError>;

    /// Replace `old_token` with a fresh token for the same user.
    ///
    /// Create runs before delete: a failure between the two steps leaves the
    /// old token usable instead of locking the user out, at the price of a
    /// narrow window in which both tokens resolve. An old token already gone
    /// at delete time counts as rotated, not as a failure.
    ///
    /// # Errors
    /// * `Unavailable` - Backing store unreachable
    async fn rotate(
        &self,
        old_token: &str,
        user_id: &UserId,
    ) -> Result<String, RefreshTokenStoreError> {
        let new_token = self.create(user_id).await?;

        match self.delete(old_token).await {
            Ok(()) | Err(RefreshTokenStoreError::NotFound) => Ok(new_token),
            Err(e) => Err(e),
        }
    }
}

/// Read-only lookup into the external user directory.
///
/// The directory owns all user records; this service never writes to it.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Fetch the credential record for an email address.
    ///
    /// # Returns
    /// Optional credential (None if no account matches)
    ///
    /// # Errors
    /// * `Unavailable` - Directory unreachable
    /// * `MalformedRecord` - Directory response failed domain validation
    async fn credential_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, UserDirectoryError>;

    /// Fetch the current user record by id.
    ///
    /// # Returns
    /// Optional user record (None if the user no longer exists)
    ///
    /// # Errors
    /// * `Unavailable` - Directory unreachable
    /// * `MalformedRecord` - Directory response failed domain validation
    async fn user_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserDirectoryError>;
}
