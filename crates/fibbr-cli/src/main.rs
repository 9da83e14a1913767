use clap::{Parser, Subcommand};
use fibbr_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "fibbr", version, about = "Fibbr: enter numbers, spot the Fibonacci ones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        /// Seconds between entry summaries (skips the interval prompt)
        #[arg(long, allow_hyphen_values = true)]
        interval: Option<String>,
    },
    /// Check numbers without starting a session
    Check {
        /// Numbers to enter, in order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// FIBBR_LOG, then RUST_LOG, then `log.level` from the config file.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("FIBBR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Read-only: only `config` subcommands write the file.
    let loaded = Config::read();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    init_logging(&config);
    if let Err(e) = &loaded {
        tracing::warn!("using default configuration: {e}");
    }

    let result = match cli.command {
        Commands::Play { interval } => commands::play::run(&config, interval),
        Commands::Check { numbers, json } => commands::check::run(numbers, json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
