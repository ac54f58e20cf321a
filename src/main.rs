use clap::Parser;
use dotenvy::dotenv;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wallart_catalog::config;
use wallart_catalog::console::Console;
use wallart_catalog::errors::Result;
use wallart_catalog::images::MediaLibrary;
use wallart_catalog::store::CatalogStore;

/// Storefront catalog and admin console for WallArt Studio.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the seed catalog file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Directory acquired wallpaper images are copied into.
    #[arg(long, default_value = "media")]
    media_dir: PathBuf,
}

fn main() -> Result<()> {
    // 1. Load .env before tracing so RUST_LOG from it reaches the filter
    dotenv().ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // 3. Load the seed catalog
    let catalog_config = config::load_config(&args.config)
        .inspect(|config| {
            info!(
                "Loaded {} seed wallpapers from {}.",
                config.wallpapers.len(),
                args.config.display()
            );
        })
        .inspect_err(|e| error!("Failed to load seed catalog: {e}"))?;

    let store = CatalogStore::with_records(catalog_config.into_records())
        .inspect_err(|e| error!("Seed catalog is invalid: {e}"))?;

    // 4. Open the media directory for admin image uploads
    let media = MediaLibrary::open(&args.media_dir)
        .inspect_err(|e| error!("Failed to open media directory: {e}"))?;

    // 5. Run the console session
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Console::new(store, media, stdin, stdout).run()
}
