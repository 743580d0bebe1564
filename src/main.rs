use std::net::SocketAddr;

use ats_backend::{
    config::Config,
    database::{
        pool::{create_pool, run_migrations},
        seed::seed_demo_data,
    },
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = config.server_address.parse()?;

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    if config.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    let app = routes::router(AppState::new(pool, config));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
