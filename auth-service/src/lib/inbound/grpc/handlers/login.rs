use std::sync::Arc;

use tonic::Status;

use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;
use crate::domain::session::service::AuthService;
use crate::proto::auth::LoginRequest;
use crate::proto::auth::LoginResponse;

pub async fn login<RS, UD>(
    service: Arc<AuthService<RS, UD>>,
    request: LoginRequest,
) -> Result<LoginResponse, Status>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    let tokens = service.login(&request.email, &request.password).await?;

    Ok(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        message: "Login successful".to_string(),
    })
}
