use std::sync::Arc;

use tonic::Status;

use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;
use crate::domain::session::service::AuthService;
use crate::proto::auth::RefreshAccessTokenRequest;
use crate::proto::auth::RefreshAccessTokenResponse;

pub async fn refresh_access_token<RS, UD>(
    service: Arc<AuthService<RS, UD>>,
    request: RefreshAccessTokenRequest,
) -> Result<RefreshAccessTokenResponse, Status>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    let tokens = service.refresh_access_token(&request.refresh_token).await?;

    Ok(RefreshAccessTokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })
}
