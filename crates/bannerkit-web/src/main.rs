//! Process bootstrap for the bannerkit web front end.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use bannerkit::FontCatalog;
use bannerkit_web::app;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut catalog = FontCatalog::new();
    if let Ok(dir) = env::var("BANNERKIT_FONT_DIR") {
        let loaded = catalog.load_dir(&PathBuf::from(&dir))?;
        info!("Loaded {loaded} fonts from {dir}");
    }

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app(catalog)).await?;
    Ok(())
}
