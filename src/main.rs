mod api;
mod app;
mod config;
mod db;
mod domain;
mod engine;
mod error;
mod logging;
mod middleware;
mod routes;

use anyhow::Result;

use engine::policy::PricingPolicy;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        rate_per_sqft = settings.rate_per_sqft,
        "Starting SiteQuote backend"
    );

    // Create database pool and apply pending migrations
    let pool = db::create_pool(&settings).await?;
    sqlx::migrate!().run(&pool).await?;

    // Pricing policy for the estimation engine
    let policy = PricingPolicy {
        rate_per_sqft: settings.rate_per_sqft,
    };

    // Create application state
    let state = app::AppState::new(pool, settings.clone(), policy);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
