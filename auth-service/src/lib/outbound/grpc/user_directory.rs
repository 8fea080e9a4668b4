use anyhow::Error;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Code;

use crate::domain::session::errors::RoleError;
use crate::domain::session::errors::UserDirectoryError;
use crate::domain::session::models::Credential;
use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::Role;
use crate::domain::session::models::UserId;
use crate::domain::session::models::UserRecord;
use crate::domain::session::ports::UserDirectory;
use crate::proto::directory::user_directory_client::UserDirectoryClient;
use crate::proto::directory::GetCredentialByEmailRequest;
use crate::proto::directory::GetUserByIdRequest;

/// gRPC client adapter for the external user directory.
///
/// Absent records arrive as the NOT_FOUND status and surface as `None`;
/// every other failure is an availability problem. Wire strings are parsed
/// into domain types here, so malformed directory data never reaches the
/// service layer.
pub struct GrpcUserDirectory {
    client: UserDirectoryClient<Channel>,
}

impl GrpcUserDirectory {
    pub async fn connect(url: &str) -> Result<Self, Error> {
        let client = UserDirectoryClient::connect(url.to_string()).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UserDirectory for GrpcUserDirectory {
    async fn credential_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, UserDirectoryError> {
        let request = tonic::Request::new(GetCredentialByEmailRequest {
            email: email.as_str().to_string(),
        });

        let mut client = self.client.clone();
        let response = match client.get_credential_by_email(request).await {
            Ok(response) => response.into_inner(),
            Err(status) if status.code() == Code::NotFound => return Ok(None),
            Err(status) => return Err(UserDirectoryError::Unavailable(status.to_string())),
        };

        let id = UserId::from_string(&response.id)
            .map_err(|e| UserDirectoryError::MalformedRecord(e.to_string()))?;
        let email = EmailAddress::new(response.email)
            .map_err(|e| UserDirectoryError::MalformedRecord(e.to_string()))?;
        let role = response
            .role
            .parse::<Role>()
            .map_err(|e: RoleError| UserDirectoryError::MalformedRecord(e.to_string()))?;

        Ok(Some(Credential {
            id,
            email,
            password_hash: response.password_hash,
            role,
        }))
    }

    async fn user_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, UserDirectoryError> {
        let request = tonic::Request::new(GetUserByIdRequest { id: id.to_string() });

        let mut client = self.client.clone();
        let response = match client.get_user_by_id(request).await {
            Ok(response) => response.into_inner(),
            Err(status) if status.code() == Code::NotFound => return Ok(None),
            Err(status) => return Err(UserDirectoryError::Unavailable(status.to_string())),
        };

        let id = UserId::from_string(&response.id)
            .map_err(|e| UserDirectoryError::MalformedRecord(e.to_string()))?;
        let email = EmailAddress::new(response.email)
            .map_err(|e| UserDirectoryError::MalformedRecord(e.to_string()))?;
        let role = response
            .role
            .parse::<Role>()
            .map_err(|e: RoleError| UserDirectoryError::MalformedRecord(e.to_string()))?;

        Ok(Some(UserRecord { id, email, role }))
    }
}
