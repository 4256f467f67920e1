//! Connect Pro Site - Main entry point
//!
//! Renders the marketing site to static HTML: `index.html` in the
//! configured language plus one `index.<code>.html` per language.

use anyhow::Context;
use connectpro_site_lib::core::Config;
use connectpro_site_lib::site::Site;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Connect Pro Site v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    let output_dir = config.general.output_dir.clone();

    let mut site = Site::new(config).context("Failed to set up site")?;
    site.mount().await;

    let written = site
        .write_pages(&output_dir)
        .await
        .with_context(|| format!("Failed to write pages to {}", output_dir.display()))?;

    site.unmount().await;
    log::info!("Rendered {} pages into {}", written.len(), output_dir.display());
    Ok(())
}
