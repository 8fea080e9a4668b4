use std::sync::Arc;

use tonic::Status;

use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;
use crate::domain::session::service::AuthService;
use crate::proto::auth::LogoutRequest;
use crate::proto::auth::LogoutResponse;

pub async fn logout<RS, UD>(
    service: Arc<AuthService<RS, UD>>,
    request: LogoutRequest,
) -> Result<LogoutResponse, Status>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    service.logout(&request.refresh_token).await?;

    Ok(LogoutResponse {
        message: "Logout successful".to_string(),
    })
}
