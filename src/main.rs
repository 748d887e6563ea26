mod generate;
mod types;
mod utils;

use crate::generate::{generate, GenerateArgs};
use crate::types::{types, TypesArgs};
use clap::{CommandFactory, Parser, Subcommand};
use log::{warn, LevelFilter};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct CLI {
    #[arg(
        short,
        long,
        env = "JSONSKEL_VERBOSE",
        default_value = "0",
        help = "0 - 4, sets the log level from Error - Trace, negative numbers disable all logging"
    )]
    verbose: i8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Generate(GenerateArgs),
    Types(TypesArgs),
}

/// Log level for `--verbose`, `None` when the value is out of range.
fn verbosity(verbose: i8) -> Option<LevelFilter> {
    let level = match verbose {
        v if v < 0 => LevelFilter::Off,
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        4 => LevelFilter::Trace,
        _ => return None,
    };
    Some(level)
}

fn main() {
    let cli = CLI::parse();
    let level = verbosity(cli.verbose);
    // RUST_LOG still takes precedence over --verbose
    pretty_env_logger::formatted_builder()
        .filter_level(level.unwrap_or(LevelFilter::Warn))
        .parse_default_env()
        .init();
    if level.is_none() {
        warn!("Unsupported Level {}, defaulting to warn", cli.verbose)
    }
    match cli.command {
        None => {
            let mut c = CLI::command();
            c.print_help().expect("print_help failed");
        }
        Some(c) => match c {
            Commands::Generate(args) => generate(args),
            Commands::Types(args) => types(args),
        },
    }
}
