use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::domain::session::errors::RefreshTokenStoreError;
use crate::domain::session::models::UserId;
use crate::domain::session::ports::RefreshTokenStore;

/// Refresh token entropy in bytes (256 bits).
const TOKEN_BYTES: usize = 32;

/// Redis-backed refresh token store.
///
/// One key per token, value is the owning user id, expiry via key TTL.
/// Only atomic single-key commands are issued, so rotation stays the
/// two-step create-then-delete of the port's default method and keeps its
/// documented dual-valid window.
pub struct RedisRefreshTokenStore {
    connection: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisRefreshTokenStore {
    /// Create a store over an established connection manager.
    ///
    /// # Arguments
    /// * `connection` - Multiplexed Redis connection (cheap to clone)
    /// * `ttl_seconds` - Lifetime of every stored token
    pub fn new(connection: ConnectionManager, ttl_seconds: u64) -> Self {
        Self {
            connection,
            ttl_seconds,
        }
    }
}

fn generate_opaque_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}

#[async_trait]
impl RefreshTokenStore for RedisRefreshTokenStore {
    async fn create(&self, user_id: &UserId) -> Result<String, RefreshTokenStoreError> {
        let token = generate_opaque_token();
        let mut connection = self.connection.clone();

        connection
            .set_ex::<_, _, ()>(&token, user_id.to_string(), self.ttl_seconds)
            .await
            .map_err(|e| RefreshTokenStoreError::Unavailable(e.to_string()))?;

        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<UserId, RefreshTokenStoreError> {
        let mut connection = self.connection.clone();

        let value: Option<String> = connection
            .get(token)
            .await
            .map_err(|e| RefreshTokenStoreError::Unavailable(e.to_string()))?;

        let value = value.ok_or(RefreshTokenStoreError::NotFound)?;

        UserId::from_string(&value)
            .map_err(|e| RefreshTokenStoreError::MalformedRecord(e.to_string()))
    }

    async fn delete(&self, token: &str) -> Result<(), RefreshTokenStoreError> {
        let mut connection = self.connection.clone();

        let removed: u64 = connection
            .del(token)
            .await
            .map_err(|e| RefreshTokenStoreError::Unavailable(e.to_string()))?;

        // DEL reports how many keys existed. Revoking an absent token is
        // rejected rather than silently accepted.
        if removed == 0 {
            return Err(RefreshTokenStoreError::NotFound);
        }

        Ok(())
    }
}
