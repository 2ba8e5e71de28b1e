use clap::Parser;
use meow::config::Config;
use meow::daemon;
use meow::error::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meowd")]
#[command(about = "Meow debt-tracking request daemon")]
struct Cli {
    #[arg(long, env = "MEOW_CONFIG")]
    config: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    max_body_bytes: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,meow=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.host.is_some() {
        config.host = cli.host;
    }
    if cli.port.is_some() {
        config.port = cli.port;
    }
    if cli.max_body_bytes.is_some() {
        config.max_body_bytes = cli.max_body_bytes;
    }

    daemon::run(config).await
}
