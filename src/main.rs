use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use gradebook::config::{expand_home, load_config, validate_config, ColorMode};
use gradebook::console::Console;
use gradebook::output::should_use_colors;
use gradebook::session::{run_session, SessionOptions};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Analyse student marks: statistics, letter grades and pass/fail reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gradebook/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "gradebook=debug" } else { "gradebook=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let color_mode = if cli.no_color {
        ColorMode::Never
    } else {
        config.color
    };
    let options = SessionOptions {
        use_colors: should_use_colors(color_mode),
        default_csv: config.default_csv.as_deref().map(expand_home),
    };
    tracing::debug!(?options, "starting session");

    let mut console = Console::stdio();
    if let Err(e) = run_session(&mut console, &options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}
