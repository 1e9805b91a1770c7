//! # Subrecon Server
//!
//! Main entry point for the subdomain enumeration API

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use subrecon_api::create_api_routes;
use subrecon_domain::{CliOverrides, Config};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "subrecon")]
#[command(version)]
#[command(about = "Subdomain enumeration API over subfinder and Sublist3r")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path to the SQLite scan store
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config);
    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let pool = bootstrap::create_database(&config).await?;

    let repositories = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repositories, &config);
    let app = create_app(use_cases, &config);

    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Creates the main application router
fn create_app(use_cases: di::UseCases, config: &Config) -> Router {
    Router::new()
        .nest("/api", create_api_routes(use_cases.into_app_state()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    if config.server.cors_allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
