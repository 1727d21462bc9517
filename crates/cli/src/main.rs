//! Vellum CLI - Inspect and debug template compilation.
//!
//! Mirrors the plugin's host-facing behavior so template authors can see
//! exactly what a build would produce: the eager render of a file, the
//! module generated for it, or the virtual engine module itself.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;
use vellum_core::EngineOptions;

#[derive(Parser)]
#[command(name = "vellum")]
#[command(
    author,
    version,
    about = "Build-time template compiler plugin for bundler pipelines"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template file eagerly and print the result
    Render {
        /// Template file
        file: PathBuf,

        /// Render context as a JSON object
        #[arg(short, long)]
        data: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the module generated for a template file
    Transform {
        /// Template file
        file: PathBuf,

        /// Static data as a JSON object (selects eager rendering)
        #[arg(short, long)]
        data: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the virtual engine module
    EngineModule {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Engine tuning flags shared by all subcommands.
#[derive(Args, Clone)]
struct EngineArgs {
    /// Enable HTML auto-escaping
    #[arg(long)]
    autoescape: bool,

    /// Remove the newline after block tags
    #[arg(long)]
    trim_blocks: bool,

    /// Strip leading whitespace before block tags
    #[arg(long)]
    lstrip_blocks: bool,

    /// Keep the template's trailing newline
    #[arg(long)]
    keep_trailing_newline: bool,

    /// Error on undefined variables
    #[arg(long)]
    strict: bool,
}

impl EngineArgs {
    fn to_options(&self) -> EngineOptions {
        EngineOptions::new()
            .with_autoescape(self.autoescape)
            .with_trim_blocks(self.trim_blocks)
            .with_lstrip_blocks(self.lstrip_blocks)
            .with_keep_trailing_newline(self.keep_trailing_newline)
            .with_strict_variables(self.strict)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { file, data, engine } => {
            commands::render::execute(&file, data.as_deref(), engine.to_options())
        }
        Commands::Transform { file, data, engine } => {
            commands::transform::execute(&file, data.as_deref(), engine.to_options()).await
        }
        Commands::EngineModule { engine } => {
            commands::engine_module::execute(engine.to_options())
        }
    }
}
