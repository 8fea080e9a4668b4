use std::sync::Arc;

use tonic::Status;

use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;
use crate::domain::session::service::AuthService;
use crate::proto::auth::ValidateRequest;
use crate::proto::auth::ValidateResponse;

pub async fn validate<RS, UD>(
    service: Arc<AuthService<RS, UD>>,
    request: ValidateRequest,
) -> Result<ValidateResponse, Status>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    let claims = service.validate(&request.access_token).await?;

    Ok(ValidateResponse {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
