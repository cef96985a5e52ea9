//! Quotary server binary.

use clap::Parser;
use quotary_core::QuotationStore;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quotary")]
#[command(about = "Content-negotiating quotation CRUD service", long_about = None)]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let app = quotary_server::app(QuotationStore::seeded());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("quotary listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
