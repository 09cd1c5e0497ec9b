//! Example redirect server.
//!
//! Requests are tried against the mapping file given with `--path` (YAML or
//! JSON, picked by suffix), then against a small built-in table, and finally
//! answered with `Hello World.`.

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use log::LevelFilter;
use std::collections::HashMap;
use toolbelt_redirect::{
    format_handler, hello_router, map_handler, shutdown_signal, MappingFormat, RedirectServer,
    ServerConfig,
};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Redirect Server - map short paths to URLs")]
struct Cli {
    #[clap(long, default_value = "", help = "File path for redirect data, JSON and YAML supported")]
    path: String,

    #[clap(long, default_value = "0.0.0.0:8080")]
    bind_addr: String,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Disable per-request logging")]
    no_request_log: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let handler = build_handler(&cli.path).await?;

    let config = ServerConfig::new()
        .with_bind_addr_str(&cli.bind_addr)?
        .with_logging(!cli.no_request_log);

    let server = RedirectServer::with_config(handler, config);

    if let Err(e) = server.serve_with_shutdown(shutdown_signal()).await {
        log::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn default_paths() -> HashMap<String, String> {
    HashMap::from([
        ("/google".to_string(), "https://google.com".to_string()),
        ("/youtube".to_string(), "https://youtube.com".to_string()),
    ])
}

/// Chain the mapping file (if usable) in front of the built-in redirects.
///
/// A missing or unreadable file, or an unknown suffix, leaves only the
/// built-in table. A file that reads but does not parse is an error.
async fn build_handler(path: &str) -> Result<Router> {
    let defaults = map_handler(default_paths(), hello_router());

    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) => {
            if !path.is_empty() {
                log::warn!("Could not read redirect file {}: {}", path, e);
            }
            log::info!("Using built-in redirects only");
            return Ok(defaults);
        }
    };

    match MappingFormat::from_path(path) {
        Some(format) => {
            log::info!("Loading {:?} redirects from {}", format, path);
            format_handler(format, &data, defaults)
                .with_context(|| format!("Invalid redirect file {}", path))
        }
        None => {
            log::warn!(
                "Unsupported redirect file type for {}, using built-in redirects only",
                path
            );
            Ok(defaults)
        }
    }
}
