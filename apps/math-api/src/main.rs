//! math-api server
//!
//! A small HTTP service computing statistics over numbers passed as query
//! parameters:
//!
//! - `/min` and `/max` - the N smallest or largest numbers
//! - `/avg` and `/median` - average and median
//! - `/percentile` - nearest-rank percentile
//!
//! ```text
//! GET /percentile?numbers=40,50,60,70&quantifier=90
//! {"Description":"90th percentile of []float64{40, 50, 60, 70}","Results":[70]}
//! ```
//!
//! Requests are independent and stateless; all computation lives in the
//! `math-core` crate.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

/// Command-line arguments for the math-api server
#[derive(Parser, Debug)]
#[command(name = "math-api")]
#[command(about = "HTTP server for basic statistics over query parameters")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Request timeout in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "10000")]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

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

    info!("Starting math-api server on {}:{}", args.host, args.port);

    let app = api::router(Duration::from_millis(args.timeout_ms));

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Request timeout: {}ms", args.timeout_ms);

    axum::serve(listener, app).await?;

    Ok(())
}
