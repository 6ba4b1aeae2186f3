mod commands;
mod error;
mod logging;
mod manifest;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use portico_core::constants::DEFAULT_DEFINITION_FILE;

use crate::commands::Session;

/// Portico: validate plugin build definitions and render publication manifests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Build definition file (.toml, .yaml, .yml or .json)
    #[arg(short, long, default_value = DEFAULT_DEFINITION_FILE)]
    file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Publishing property, e.g. -P sonatypeUsername=me or -P forceSign
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE")]
    properties: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the definition and print a summary
    Check,
    /// List registered plugins
    List {
        /// Only plugins carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Print one plugin descriptor
    Show {
        /// The id of the plugin to show
        id: String,
    },
    /// List distinct tags and the plugins carrying them
    Tags,
    /// Render the publication manifest
    Manifest {
        /// Output format: json, yaml or toml
        #[arg(long, default_value = "json")]
        format: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show repositories that would receive the publication
    Targets,
}

fn run(args: &CliArgs) -> error::Result<()> {
    let session = Session::open(&args.file, &args.properties)?;
    match &args.command {
        Commands::Check => session.check(),
        Commands::List { tag } => session.list(tag.as_deref()),
        Commands::Show { id } => session.show(id),
        Commands::Tags => session.tags(),
        Commands::Manifest { format, output } => session.manifest(format, output.as_ref()),
        Commands::Targets => session.targets(),
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
