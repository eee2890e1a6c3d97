mod fal;
mod generate;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use fal::FalClient;
use generate::{generate_router, GenerateState};

#[derive(Parser)]
#[command(name = "coloria-server")]
struct Args {
    /// API key for the image generation service.
    #[arg(long, env = "FAL_KEY", hide_env_values = true)]
    fal_key: String,

    /// Generation model endpoint.
    #[arg(
        long,
        default_value = "https://110602490-recraft-20b.gateway.alpha.fal.ai/",
        env = "COLORIA_FAL_ENDPOINT"
    )]
    fal_endpoint: String,

    /// Port to listen on.
    #[arg(long, default_value = "4540", env = "COLORIA_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "COLORIA_BIND")]
    bind: String,

    /// Path to the built coloria-web dist directory.
    #[arg(long, env = "COLORIA_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    info!("forwarding generation requests to {}", args.fal_endpoint);
    let state = Arc::new(GenerateState {
        upstream: Arc::new(FalClient::new(args.fal_endpoint, args.fal_key)),
    });

    let router = generate_router(state);

    let app = if let Some(ref web_dir) = args.web_dir {
        info!("serving web UI from {}", web_dir.display());
        let spa_fallback =
            ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router.fallback_service(spa_fallback)
    } else {
        router
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("coloria-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
