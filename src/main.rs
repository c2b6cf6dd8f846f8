use std::io::IsTerminal;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;

use imgtext::client::{ImageSource, LoadingIndicator, OcrClient};
use imgtext::config::{AppState, Config};

#[derive(Parser)]
#[command(name = "imgtext")]
#[command(about = "Extract text from images through an OCR backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the proxy server (default)
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Upload an image and print its text
    Extract(ExtractArgs),
}

#[derive(Args)]
struct ExtractArgs {
    #[command(flatten)]
    image: ImageArgs,

    /// Base URL of the imgtext server
    #[arg(long, env = "IMGTEXT_SERVER_URL", default_value = "http://localhost:3000")]
    server: String,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ImageArgs {
    /// Local image file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Remote image URL (.jpg, .jpeg, .png or .webp)
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // stdout is reserved for extracted text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => serve(port).await,
        Commands::Extract(args) => extract(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // single place a failure is reported
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(port: Option<u16>) -> Result<()> {
    let mut cfg = Config::init().context("Failed to load configuration")?;
    if let Some(port) = port {
        cfg.server_port = port;
    }

    let addr: SocketAddr = format!("{}:{}", cfg.server_host, cfg.server_port)
        .parse()
        .context("Invalid listen address")?;

    tracing::info!("Forwarding to backend at {}", cfg.backend_host);
    let app = imgtext::build_app(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server ready! Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn extract(args: ExtractArgs) -> Result<()> {
    let source = match (args.image.file, args.image.url) {
        (Some(path), _) => ImageSource::File(path),
        (None, Some(url)) => ImageSource::Url(url),
        (None, None) => anyhow::bail!("Either --file or --url is required"),
    };

    let client = OcrClient::new(args.server);

    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let indicator = LoadingIndicator::start(stderr, is_tty);
    let outcome = client.run(&source).await;
    indicator.finish();

    println!("{}", outcome?);
    Ok(())
}
