//! gistub CLI binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gistub::cli::{run_generate, run_modules};
use gistub::report::RunStatus;
use gistub_gi::GenConfig;

/// Generate Python type stubs from a GObject-introspection metadata graph.
#[derive(Parser)]
#[command(name = "gistub")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate stub files and print a JSON run report.
    Generate {
        /// Path to the metadata graph JSON file.
        graph: PathBuf,

        /// Output directory for the stub tree.
        #[arg(long, default_value = "stubs")]
        out_dir: PathBuf,

        /// Module to generate (repeatable; default: every graph module).
        #[arg(long = "module")]
        modules: Vec<String>,
    },

    /// List the modules present in a metadata graph.
    Modules {
        /// Path to the metadata graph JSON file.
        graph: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            graph,
            out_dir,
            modules,
        } => match run_generate(&graph, &out_dir, &modules, &GenConfig::default()) {
            Ok(report) => {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("error: failed to serialize run report: {}", err);
                        return ExitCode::from(10);
                    }
                }
                match report.status {
                    RunStatus::Ok => ExitCode::SUCCESS,
                    RunStatus::Error => ExitCode::FAILURE,
                }
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::from(err.exit_code())
            }
        },

        Commands::Modules { graph } => match run_modules(&graph) {
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::from(err.exit_code())
            }
        },
    }
}
