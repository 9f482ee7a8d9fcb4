use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use tbscore_cli::commands;
use tbscore_cli::config::{self, CliConfig};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the flattened question catalog as JSON
    Catalog {
        #[arg(short, long)]
        instrument: Option<String>,
    },
    /// Score an answers file and print the result
    Score {
        /// JSON file: `[{"question_id": .., "value": ..}]` or `{"id": value}`
        #[arg(short, long)]
        answers: PathBuf,
        #[arg(short, long)]
        instrument: Option<String>,
        /// Refuse to score unless every question is answered
        #[arg(long)]
        require_complete: bool,
        /// Print a plain-text report instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "tbscore")]
#[command(about = "Pediatric TB risk scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to config file (defaults to <config dir>/tbscore/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Commands::Catalog { instrument } => {
            let cfg = config::load_or_default(&config_path)?;
            let instrument =
                commands::resolve_instrument(instrument.as_deref().unwrap_or(&cfg.instrument_id))?;
            println!("{}", commands::catalog_json(instrument)?);
        }
        Commands::Score {
            answers,
            instrument,
            require_complete,
            text,
        } => {
            let cfg = config::load_or_default(&config_path)?;
            let instrument =
                commands::resolve_instrument(instrument.as_deref().unwrap_or(&cfg.instrument_id))?;
            let mut engine = cfg.engine;
            if require_complete {
                engine.allow_incomplete_finalize = false;
            }
            let result = commands::score_file(instrument, engine, &answers)?;
            if text {
                print!("{}", commands::render_text(&result));
            } else {
                println!("{}", result.to_json()?);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let cfg = config::load_or_default(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &CliConfig::default())?;
                println!("wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}
