// ABOUTME: Entry point for the kcloud CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ImgCommands};
use kcloud::commands::{LsOptions, RmOptions};
use kcloud::error::Result;
use std::env;
use tracing_subscriber::EnvFilter;

const METRO_ENV: &str = "KRAFTCLOUD_METRO";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let metro_env = env::var(METRO_ENV).ok();

    match cli.command {
        Commands::Img(ImgCommands::Rm(args)) => {
            let opts = RmOptions::validate(
                args.all,
                &args.images,
                args.metro.as_deref(),
                metro_env.as_deref(),
            )?;
            opts.run(&args.images).await
        }
        Commands::Img(ImgCommands::Ls(args)) => {
            let opts =
                LsOptions::validate(args.output, args.metro.as_deref(), metro_env.as_deref())?;
            opts.run().await
        }
    }
}
