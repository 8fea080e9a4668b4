use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::domain::session::errors::RefreshTokenStoreError;
use auth_service::domain::session::errors::UserDirectoryError;
use auth_service::domain::session::models::Credential;
use auth_service::domain::session::models::EmailAddress;
use auth_service::domain::session::models::Role;
use auth_service::domain::session::models::UserId;
use auth_service::domain::session::models::UserRecord;
use auth_service::domain::session::ports::RefreshTokenStore;
use auth_service::domain::session::ports::UserDirectory;
use auth_service::domain::session::service::AuthService;
use auth_service::inbound::grpc::AuthGrpcService;
use auth_service::proto::auth::auth_service_client::AuthServiceClient;
use auth_service::proto::auth::auth_service_server::AuthServiceServer;
use chrono::Duration;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32b!";

/// In-memory refresh token store mirroring the single-key semantics of the
/// Redis adapter: one entry per token, absent keys are NotFound for both
/// lookup and delete.
#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    entries: Mutex<HashMap<String, UserId>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a known token, as if created by an earlier login.
    pub fn insert(&self, token: &str, user_id: UserId) {
        self.entries
            .lock()
            .unwrap()
            .insert(token.to_string(), user_id);
    }

    /// Direct lookup bypassing the port, for assertions.
    pub fn lookup(&self, token: &str) -> Option<UserId> {
        self.entries.lock().unwrap().get(token).copied()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn create(&self, user_id: &UserId) -> Result<String, RefreshTokenStoreError> {
        let token = Uuid::new_v4().simple().to_string();
        self.entries
            .lock()
            .unwrap()
            .insert(token.clone(), *user_id);
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<UserId, RefreshTokenStoreError> {
        self.entries
            .lock()
            .unwrap()
            .get(token)
            .copied()
            .ok_or(RefreshTokenStoreError::NotFound)
    }

    async fn delete(&self, token: &str) -> Result<(), RefreshTokenStoreError> {
        match self.entries.lock().unwrap().remove(token) {
            Some(_) => Ok(()),
            None => Err(RefreshTokenStoreError::NotFound),
        }
    }
}

/// In-memory user directory with a fixed set of credentials.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    credentials: Mutex<Vec<Credential>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, hashing the password the way the real directory
    /// would. Returns the generated user id.
    pub fn add_user(&self, email: &str, password: &str, role: Role) -> UserId {
        let credential = Credential {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
            password_hash: PasswordHasher::new()
                .hash(password)
                .expect("Failed to hash test password"),
            role,
        };

        let id = credential.id;
        self.credentials.lock().unwrap().push(credential);
        id
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn credential_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, UserDirectoryError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|credential| credential.email.as_str() == email.as_str())
            .cloned())
    }

    async fn user_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserDirectoryError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|credential| credential.id == *id)
            .map(|credential| UserRecord {
                id: credential.id,
                email: credential.email.clone(),
                role: credential.role,
            }))
    }
}

/// Directory stub whose calls always fail as unreachable.
pub struct UnavailableUserDirectory;

#[async_trait]
impl UserDirectory for UnavailableUserDirectory {
    async fn credential_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<Credential>, UserDirectoryError> {
        Err(UserDirectoryError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    async fn user_by_id(&self, _id: &UserId) -> Result<Option<UserRecord>, UserDirectoryError> {
        Err(UserDirectoryError::Unavailable(
            "connection refused".to_string(),
        ))
    }
}

/// Spawn the real gRPC server on an ephemeral port and return a connected
/// client.
pub async fn spawn_grpc<RS, UD>(store: Arc<RS>, directory: Arc<UD>) -> AuthServiceClient<Channel>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    let token_issuer = Arc::new(TokenIssuer::new(TEST_JWT_SECRET, Duration::minutes(15)));
    let service = Arc::new(AuthService::new(store, directory, token_issuer));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        Server::builder()
            .add_service(AuthServiceServer::new(AuthGrpcService::new(service)))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .expect("gRpc server crashed");
    });

    AuthServiceClient::connect(address)
        .await
        .expect("Failed to connect test client")
}

/// Test application running the full service against in-memory fakes.
pub struct TestApp {
    pub client: AuthServiceClient<Channel>,
    pub store: Arc<InMemoryRefreshTokenStore>,
    pub directory: Arc<InMemoryUserDirectory>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryRefreshTokenStore::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let client = spawn_grpc(Arc::clone(&store), Arc::clone(&directory)).await;

        Self {
            client,
            store,
            directory,
        }
    }
}
