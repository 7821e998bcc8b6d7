use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "mealplan",
    version,
    about = "Plan the week's meals from the terminal"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Directory holding the saved plan
    #[arg(long, global = true, env = "MEALPLAN_DIR", default_value = ".mealplan")]
    dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.dir.as_path();
    match &cli.command {
        commands::Commands::Init(args) => commands::init::run(args, dir),
        commands::Commands::Add(args) => commands::add::run(args, dir),
        commands::Commands::Remove(args) => commands::remove::run(args, dir),
        commands::Commands::Show(args) => commands::show::run(args, dir, cli.format),
        commands::Commands::Export(args) => commands::export::run(args, dir),
        commands::Commands::Import(args) => commands::import::run(args, dir),
        commands::Commands::Slots => commands::slots::run(cli.format),
    }
}
