//! Civil-rights document generator server
//!
//! Serves the state law table and renders legal documents (public records
//! requests, cease and desist letters, notices of claim, subpoenas and
//! discovery requests) for a caller's subscription tier. Provides REST API
//! endpoints for:
//!
//! - Document generation
//! - State law lookup and know-your-rights cards
//! - Template and feature listing
//!
//! The server holds no user data; every request carries its own tier,
//! document type, state and form fields.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use docgen_engine::{DocumentGenerator, SystemClock};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
#[cfg(test)]
mod tests;

use api::AppState;

/// Command-line arguments for the document generator server
#[derive(Parser, Debug)]
#[command(name = "docgen-server")]
#[command(about = "Civil-rights legal document generator server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting docgen server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .context("Rate limit must be at least 1 request per second")?,
    );

    let state = AppState {
        generator: Arc::new(DocumentGenerator::new(Arc::new(SystemClock))),
    };
    info!(
        "Loaded state law table: {} jurisdictions",
        state.generator.table().all().count()
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state).layer(
        ServiceBuilder::new()
            .layer(cors)
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
