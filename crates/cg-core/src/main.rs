//! commentgraph CLI entry point.

use cg_core::config::{DEFAULT_MATRIX, DEFAULT_PUBLISH, DEFAULT_SOURCE};
use cg_core::{pipeline, ExitCode, PipelineConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "commentgraph",
    version,
    about = "Build the front-end node graph JSON from labeled comment CSVs"
)]
struct Cli {
    /// Raise the default log level from info to debug (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline and publish the document
    Build(InputArgs),
    /// Load, build, and merge in memory without publishing
    Check(InputArgs),
    /// Print the JSON Schema of the published document
    Schema,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Primary CSV of labeled comments (header row required)
    #[arg(long, env = "CG_SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Pairwise cosine-distance matrix CSV (no header, square)
    #[arg(long, env = "CG_MATRIX", default_value = DEFAULT_MATRIX)]
    matrix: PathBuf,

    /// Skip the matrix pass; nodes publish with empty distance maps
    #[arg(long)]
    without_matrix: bool,

    /// Destination path for the published document
    #[arg(long, env = "CG_OUT", default_value = DEFAULT_PUBLISH)]
    out: PathBuf,
}

impl InputArgs {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            source_path: self.source,
            matrix_path: (!self.without_matrix).then_some(self.matrix),
            publish_path: self.out,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Command::Build(args) => run_pipeline(args.into_config(), true),
        Command::Check(args) => run_pipeline(args.into_config(), false),
        Command::Schema => print_schema(),
    };
    std::process::exit(code.as_i32());
}

fn run_pipeline(config: PipelineConfig, do_publish: bool) -> ExitCode {
    let result = if do_publish {
        pipeline::run(&config)
    } else {
        pipeline::check(&config)
    };
    match result {
        Ok(summary) => {
            info!(
                nodes = summary.nodes,
                distance_entries = summary.distance_entries,
                "pipeline complete"
            );
            ExitCode::Success
        }
        Err(err) => {
            error!(code = err.code(), "{err}");
            ExitCode::from(&err)
        }
    }
}

fn print_schema() -> ExitCode {
    match serde_json::to_string_pretty(&cg_common::schema::document_schema()) {
        Ok(schema) => {
            println!("{schema}");
            ExitCode::Success
        }
        Err(err) => {
            error!("schema serialization failed: {err}");
            ExitCode::InternalError
        }
    }
}
