//! Lists the translation resources an extension would register.
//!
//! Usage:
//!   cargo run -- <extension-root>
//!
//! Optional:
//! - TRANSLATIONS_DIR (defaults to translations)
//! - RUST_LOG (defaults to scan_translations=info)

use anyhow::{bail, Context, Result};
use extension_translations::{BaseDirectory, LoaderConfig, TranslationLoader};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scan_translations=info".parse()?)
                .add_directive("extension_translations=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(root) = args.get(1) else {
        bail!(usage(&args));
    };
    let root = PathBuf::from(root)
        .canonicalize()
        .with_context(|| format!("Extension root {} is not accessible", root))?;

    let config = LoaderConfig::from_env();
    info!(
        "Scanning {} for {}/",
        root.display(),
        config.translations_dir
    );

    let loader = TranslationLoader::with_config(BaseDirectory::local(&root), config);
    let resources = loader
        .discover_now()
        .context("Failed to discover translations")?;

    let resources = match resources {
        Some(resources) => resources,
        None => {
            info!("No translations directory found");
            Vec::new()
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&resources).context("Failed to serialize resources")?
    );
    Ok(())
}

fn usage(args: &[String]) -> String {
    let program = args.first().map(String::as_str).unwrap_or("scan-translations");
    format!("Usage: {} <extension-root>", program)
}
