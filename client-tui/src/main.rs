use clap::Parser;
use client_tui::{config, state::AppSession, ui};
use trainer_client::TrainerClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Terminal client for the trainer server
#[derive(Parser)]
#[command(name = "client-tui", version)]
struct Args {
    /// Server base URL (overrides TRAINTTY_SERVER_URL)
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up tracing with file output in logs directory
    let log_dir = "logs";
    std::fs::create_dir_all(log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(log_dir, "traintty-client-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_url = args.server.unwrap_or_else(config::server_url);
    tracing::info!(server = %server_url, "traintty client starting up");

    println!("traintty - Terminal Training Client");
    println!("Connecting to server at {}", server_url);
    println!("Debug logs: logs/traintty-client-tui.YYYY-MM-DD");

    let client = TrainerClient::new(&server_url);
    let session = AppSession::new(client, config::data_dir());
    ui::run_app(session).await?;

    tracing::info!("traintty client shutting down");
    Ok(())
}
