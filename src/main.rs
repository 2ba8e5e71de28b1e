use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use meow::domains::header::MeowRequest;
use meow::error::{MeowError, Result};
use meow::services::parser::{read_and_parse, DEFAULT_BODY_LIMIT};
use meow::Request;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meow")]
#[command(about = "Meow protocol tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode one request document from a file or stdin.
    Decode {
        #[arg(long)]
        file: Option<String>,

        #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
        limit: u64,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode { file, limit } => decode(file.as_deref(), limit),
    };
    match result {
        Ok(request) => {
            println!("type: {}", request.request_type());
            println!("{request:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {err}", err.kind());
            ExitCode::FAILURE
        }
    }
}

fn decode(file: Option<&str>, limit: u64) -> Result<Request> {
    match file {
        Some(path) => {
            let file = File::open(path).map_err(MeowError::ReadFailure)?;
            read_and_parse(file, limit)
        }
        None => read_and_parse(io::stdin().lock(), limit),
    }
}
