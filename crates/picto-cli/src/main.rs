use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("picto error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    match &cli.command {
        cli::Commands::Schema(args) => commands::schema::handle(args),
        cli::Commands::Diagram(args) => commands::diagram::handle(args, &load_config()?, &flags),
        cli::Commands::Show(args) => commands::show::handle(args, &load_config()?).await,
    }
}

fn load_config() -> anyhow::Result<picto_config::PictoConfig> {
    let config =
        picto_config::PictoConfig::load_with_dotenv().context("failed to load picto config")?;
    tracing::debug!(
        database = %config.database.path,
        diagram = %config.diagram.output,
        "config loaded"
    );
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PICTO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
