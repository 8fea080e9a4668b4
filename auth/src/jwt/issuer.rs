use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessTokenClaims;
use super::errors::TokenError;

/// Signs and validates short-lived access tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide secret. Every issued
/// token carries the fixed [`AccessTokenClaims`] shape; validation enforces
/// signature, expiry, and claim shape.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `access_ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], access_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            access_ttl,
        }
    }

    /// Issue a signed access token for a subject.
    ///
    /// Claims are stamped with `iat = now` and `exp = now + access_ttl`.
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed; the key is unusable,
    ///   which is a startup-grade condition rather than a per-request one
    pub fn issue(&self, subject: &str, email: &str, role: &str) -> Result<String, TokenError> {
        let claims = AccessTokenClaims::new(subject, email, role, Utc::now(), self.access_ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - Signature checks out but `exp` is in the past
    /// * `Invalid` - Bad signature, malformed token, or wrong claim shape
    pub fn validate(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
