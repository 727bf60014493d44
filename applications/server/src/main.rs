/// Subtrack Server - subscription tracking HTTP service
use clap::{Parser, Subcommand};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use subtrack_server::{api, config::AppConfig, services::SubscriptionService, state::AppState};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "subtrack-server")]
#[command(about = "Subscription tracking HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subtrack_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Migrate { config } => {
            migrate(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration; missing database settings or server port abort here
    let config = AppConfig::load(config_path)?;

    tracing::info!("Starting Subtrack Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = subtrack_storage::create_pool_with_size(
        &config.database.connection_url(),
        config.database.max_connections,
    )
    .await?;
    subtrack_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected: {}", config.database.name);

    // Build application state
    let subscriptions = Arc::new(SubscriptionService::new(pool));
    let app_state = AppState::new(subscriptions);

    let app = api::router(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;

    let pool = subtrack_storage::create_pool(&config.database.connection_url()).await?;
    subtrack_storage::run_migrations(&pool).await?;

    tracing::info!("Migrations applied to {}", config.database.name);

    Ok(())
}
