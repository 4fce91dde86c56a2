mod routes;

use std::net::SocketAddr;

use anyhow::Context;
use asciify::Converter;
use clap::Parser;

use routes::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(name = "asciify-server", version)]
#[command(about = "HTTP upload-and-convert endpoint for asciify")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "ASCIIFY_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "ASCIIFY_MAX_UPLOAD", default_value_t = 10 * 1024 * 1024)]
    max_upload_bytes: usize,

    /// Largest accepted output width or height, in characters.
    #[arg(long, env = "ASCIIFY_MAX_DIMENSION", default_value_t = 1000)]
    max_dimension: u32,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .init();

    let converter = Converter::new().with_max_dimension(args.max_dimension);
    let app = create_router(AppState::new(converter), args.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    log::info!("Server starting on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
