use std::sync::Arc;

use auth::TokenIssuer;
use auth_service::config::Config;
use auth_service::domain::session::service::AuthService;
use auth_service::inbound::grpc::AuthGrpcService;
use auth_service::outbound::grpc::GrpcUserDirectory;
use auth_service::outbound::repositories::RedisRefreshTokenStore;
use auth_service::proto::auth::auth_service_server::AuthServiceServer;
use chrono::Duration;
use redis::aio::ConnectionManager;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        redis_url = %config.redis.url,
        user_directory_url = %config.user_directory.url,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_seconds = config.refresh_token.ttl_seconds,
        "Configuration loaded"
    );

    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_connection = ConnectionManager::new(redis_client).await?;
    tracing::info!(store = "redis", "Token store connection established");

    let directory = Arc::new(GrpcUserDirectory::connect(&config.user_directory.url).await?);
    tracing::info!(url = %config.user_directory.url, "User directory client connected");

    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.access_ttl_minutes),
    ));
    let refresh_tokens = Arc::new(RedisRefreshTokenStore::new(
        redis_connection,
        config.refresh_token.ttl_seconds,
    ));

    let auth_service = Arc::new(AuthService::new(refresh_tokens, directory, token_issuer));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServiceServer::new(grpc_service))
        .serve(grpc_address)
        .await?;

    Ok(())
}
