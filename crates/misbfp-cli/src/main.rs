// crates/misbfp-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "misbfp-cli")]
#[command(about = "MISB ST 1201 float <-> integer field codec", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG when set)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode real values into hex fields
    Encode(cmd::encode::EncodeArgs),

    /// Decode hex fields back to real values
    Decode(cmd::decode::DecodeArgs),

    /// Print the derived codec constants
    Inspect(cmd::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
