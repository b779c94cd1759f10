//! scentmatch-ui - Fragrance recommendation web application
//!
//! Serves a preference form on localhost, scores the fragrance catalog
//! against each submission, and renders the top five matches with images.
//! The catalog database is opened read-only.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use scentmatch_common::{config, db};
use scentmatch_ui::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "scentmatch-ui", about = "ScentMatch fragrance recommendation web UI")]
struct Args {
    /// Root folder holding scentmatch.db and fragrance_images/
    #[arg(long)]
    root_folder: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting ScentMatch UI (scentmatch-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    config::ensure_root_folder(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    let db_path = config::database_path(&root_folder);
    let pool = match db::connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to catalog database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to catalog database: {}", e);
            return Err(e.into());
        }
    };

    let image_root = config::image_folder(&root_folder);
    info!("Image folder: {}", image_root.display());

    let state = AppState::new(pool, image_root);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:5780").await?;
    info!("scentmatch-ui listening on http://127.0.0.1:5780");
    info!("Health check: http://127.0.0.1:5780/health");

    axum::serve(listener, app).await?;

    Ok(())
}
