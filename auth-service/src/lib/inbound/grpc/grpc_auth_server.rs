use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::login;
use super::handlers::logout;
use super::handlers::refresh_access_token;
use super::handlers::validate;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::UserDirectory;
use crate::domain::session::service::AuthService;
use crate::proto::auth::auth_service_server::AuthService as AuthServiceProto;
use crate::proto::auth::LoginRequest;
use crate::proto::auth::LoginResponse;
use crate::proto::auth::LogoutRequest;
use crate::proto::auth::LogoutResponse;
use crate::proto::auth::RefreshAccessTokenRequest;
use crate::proto::auth::RefreshAccessTokenResponse;
use crate::proto::auth::ValidateRequest;
use crate::proto::auth::ValidateResponse;

pub struct AuthGrpcService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    service: Arc<AuthService<RS, UD>>,
}

impl<RS, UD> AuthGrpcService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    pub fn new(service: Arc<AuthService<RS, UD>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<RS, UD> AuthServiceProto for AuthGrpcService<RS, UD>
where
    RS: RefreshTokenStore,
    UD: UserDirectory,
{
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login::login(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn validate(
        &self,
        request: Request<ValidateRequest>,
    ) -> Result<Response<ValidateResponse>, Status> {
        let response = validate::validate(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn refresh_access_token(
        &self,
        request: Request<RefreshAccessTokenRequest>,
    ) -> Result<Response<RefreshAccessTokenResponse>, Status> {
        let response = refresh_access_token::refresh_access_token(
            self.service.clone(),
            request.into_inner(),
        )
        .await?;
        Ok(Response::new(response))
    }

    async fn logout(
        &self,
        request: Request<LogoutRequest>,
    ) -> Result<Response<LogoutResponse>, Status> {
        let response = logout::logout(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
