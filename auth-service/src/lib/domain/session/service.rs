use std::sync::Arc;

use async_trait::async_trait;

use auth::AccessTokenClaims;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::RefreshTokenStoreError;
use crate::domain::session::errors::UserDirectoryError;
use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::TokenPair;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;

/// Domain service implementing the authentication lifecycle.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Stateless across calls; session state lives entirely in the refresh
/// token store.
pub struct AuthService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    refresh_tokens: Arc<RS>,
    directory: Arc<UD>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<RS, UD> AuthService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `refresh_tokens` - Refresh token persistence implementation
    /// * `directory` - External user record lookup implementation
    /// * `token_issuer` - Access token signer/validator
    pub fn new(refresh_tokens: Arc<RS>, directory: Arc<UD>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            refresh_tokens,
            directory,
            token_issuer,
            password_hasher: PasswordHasher::new(),
        }
    }

    fn classify_directory_error(error: UserDirectoryError) -> AuthError {
        match error {
            UserDirectoryError::Unavailable(cause) => {
                tracing::error!(error = %cause, "User directory unreachable");
                AuthError::directory_unavailable()
            }
            UserDirectoryError::MalformedRecord(cause) => {
                tracing::error!(error = %cause, "User directory returned a malformed record");
                AuthError::internal()
            }
        }
    }
}

#[async_trait]
impl<RS, UD> AuthServicePort for AuthService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        // An unparsable email gets the same rejection as a wrong password;
        // the caller must not learn which part failed.
        let email = match EmailAddress::new(email.to_string()) {
            Ok(email) => email,
            Err(e) => {
                tracing::debug!(error = %e, "Login rejected: email failed validation");
                return Err(AuthError::invalid_credentials());
            }
        };

        let credential = self
            .directory
            .credential_by_email(&email)
            .await
            .map_err(Self::classify_directory_error)?
            .ok_or_else(|| {
                tracing::debug!("Login rejected: no account for email");
                AuthError::invalid_credentials()
            })?;

        if !self
            .password_hasher
            .verify(password, &credential.password_hash)
        {
            tracing::debug!(user_id = %credential.id, "Login rejected: password mismatch");
            return Err(AuthError::invalid_credentials());
        }

        // Token issuance and refresh token persistence must both succeed;
        // the caller never sees a partial pair.
        let access_token = self
            .token_issuer
            .issue(
                &credential.id.to_string(),
                credential.email.as_str(),
                credential.role.as_str(),
            )
            .map_err(|e| {
                tracing::error!(error = %e, "Access token signing failed");
                AuthError::internal()
            })?;

        let refresh_token = self.refresh_tokens.create(&credential.id).await.map_err(|e| {
            tracing::error!(error = %e, user_id = %credential.id, "Refresh token creation failed");
            AuthError::internal()
        })?;

        tracing::info!(user_id = %credential.id, "Login succeeded");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn validate(&self, access_token: &str) -> Result<AccessTokenClaims, AuthError> {
        // Expired and invalid collapse into a single caller-visible failure.
        self.token_issuer.validate(access_token).map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            AuthError::invalid_access_token()
        })
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        if refresh_token.is_empty() {
            return Err(AuthError::Validation(
                "refresh token is required".to_string(),
            ));
        }

        let user_id = self
            .refresh_tokens
            .get(refresh_token)
            .await
            .map_err(|e| match e {
                RefreshTokenStoreError::NotFound => {
                    tracing::debug!("Refresh rejected: token unknown or expired");
                    AuthError::invalid_refresh_token()
                }
                RefreshTokenStoreError::Unavailable(cause) => {
                    tracing::error!(error = %cause, "Token store unreachable during refresh");
                    AuthError::store_unavailable()
                }
                RefreshTokenStoreError::MalformedRecord(cause) => {
                    tracing::error!(error = %cause, "Token store returned a malformed record");
                    AuthError::internal()
                }
            })?;

        // Claims are rebuilt from the directory's current record, not copied
        // from old claims, so role and email changes land on the next
        // rotation instead of the next login.
        let user = self
            .directory
            .user_by_id(&user_id)
            .await
            .map_err(Self::classify_directory_error)?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Refresh rejected: user no longer in directory");
                AuthError::invalid_refresh_token()
            })?;

        let access_token = self
            .token_issuer
            .issue(&user.id.to_string(), user.email.as_str(), user.role.as_str())
            .map_err(|e| {
                tracing::error!(error = %e, "Access token signing failed");
                AuthError::internal()
            })?;

        let new_refresh_token = self
            .refresh_tokens
            .rotate(refresh_token, &user.id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %user.id, "Refresh token rotation failed");
                AuthError::internal()
            })?;

        tracing::info!(user_id = %user.id, "Refresh token rotated");

        Ok(TokenPair {
            access_token,
            refresh_token: new_refresh_token,
        })
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        if refresh_token.is_empty() {
            return Err(AuthError::Validation(
                "refresh token is required".to_string(),
            ));
        }

        match self.refresh_tokens.delete(refresh_token).await {
            Ok(()) => {
                tracing::info!("Refresh token revoked");
                Ok(())
            }
            Err(RefreshTokenStoreError::NotFound) => {
                tracing::debug!("Logout rejected: token unknown or expired");
                Err(AuthError::invalid_refresh_token())
            }
            Err(RefreshTokenStoreError::Unavailable(cause)) => {
                tracing::error!(error = %cause, "Token store unreachable during logout");
                Err(AuthError::store_unavailable())
            }
            Err(RefreshTokenStoreError::MalformedRecord(cause)) => {
                tracing::error!(error = %cause, "Token store returned a malformed record");
                Err(AuthError::internal())
            }
        }
    }
}
