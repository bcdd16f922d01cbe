use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contactform::cli::FormArgs;

/// contactform - validate and send the contact form
#[derive(Parser)]
#[command(name = "contactform")]
#[command(about = "Validate and submit the contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the form values and print every validation error
    Validate(FormArgs),
    /// Fill the form, submit it and wait for the endpoint to answer
    Submit(FormArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = contactform::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    contactform::observability::init_observability(
        "contactform",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let status = match cli.command {
        Commands::Validate(args) => contactform::cli::validate(args)?,
        Commands::Submit(args) => contactform::cli::submit(&config, args).await?,
    };

    Ok(status.into())
}
