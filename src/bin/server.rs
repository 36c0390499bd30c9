use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use banana_stand::core::Config;
use banana_stand::reminders::DefaultApiClient;
use banana_stand::server;
use banana_stand::skill::stock_skill;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting banana-stand skill server...");

    let mut api_client = DefaultApiClient::new(config.reminders_timeout)?;
    if let Some(base) = &config.reminders_api_base {
        info!("Reminders API endpoint override: {base}");
        api_client = api_client.with_endpoint_override(base);
    }

    let skill = Arc::new(stock_skill(api_client));
    let app = server::router(skill);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
