//! stackgen CLI - scaffold React and Vue projects on Node, Bun or Deno

use anyhow::Result;
use clap::{Parser, Subcommand};
use stackgen_core::tui::{self, CreateArgs};
use stackgen_core::ProductConfig;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// stackgen product configuration
#[derive(Clone)]
pub struct StackgenConfig;

impl ProductConfig for StackgenConfig {
    fn name(&self) -> &'static str {
        "stackgen"
    }

    fn display_name(&self) -> &'static str {
        "stackgen"
    }

    fn presets_env(&self) -> &'static str {
        "STACKGEN_PRESETS"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/stackgen/stackgen#readme"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install stackgen --force"
    }
}

#[derive(Parser, Debug)]
#[command(name = "stackgen")]
#[command(about = "CLI for scaffolding React and Vue projects on Node, Bun or Deno")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CliCreateArgs),
    /// List the built-in presets and those from a presets file
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Preset to use instead of answering every prompt
    #[arg(short, long)]
    pub preset: Option<String>,

    /// YAML file with additional presets (overrides STACKGEN_PRESETS)
    #[arg(long = "presets")]
    pub presets_file: Option<PathBuf>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            preset: args.preset,
            presets_file: args.presets_file,
            directory: args.directory,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// YAML file with additional presets (overrides STACKGEN_PRESETS)
    #[arg(long = "presets")]
    pub presets_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = StackgenConfig;

    match args.command {
        Some(Command::Presets(presets_args)) => {
            tui::list_presets(&config, presets_args.presets_file.as_deref(), CLI_VERSION)
        }
        Some(Command::Create(create_args)) => create(&config, create_args.into()).await,
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(&config, CreateArgs::default()).await,
    }
}

async fn create(config: &StackgenConfig, args: CreateArgs) -> Result<()> {
    let result = stackgen_core::run(config, args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        // The outro already told the user
        Err(e) if tui::is_cancelled(&e) => std::process::exit(1),
        other => other,
    }
}
