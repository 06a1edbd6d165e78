use admin_claims_shared::claims::CognitoClaimsAdmin;
use admin_claims_shared::config::AdminConfig;
use admin_claims_shared::AppState;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Resolve configuration and the Cognito client once at startup
    let config = AdminConfig::from_env()?;
    let sdk_config = aws_config::load_from_env().await;

    tracing::info!("Using Cognito user pool {}", config.user_pool_id);

    let state = AppState::new(CognitoClaimsAdmin::new(
        CognitoClient::new(&sdk_config),
        &config,
    ));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
