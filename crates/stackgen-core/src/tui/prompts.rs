//! Charm-style CLI prompts using cliclack

use crate::catalog::CatalogOption;
use crate::collector::{Choice, Prompter};
use crate::config::{builtin_presets, load_presets_file, version, Preset};
use crate::error::{Result as ScaffoldResult, ScaffoldError};
use crate::product::ProductConfig;
use crate::report;
use crate::runtime;
use crate::templates;
use crate::workflow::{self, Plan, ScaffoldOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Preset id; skips the selection prompts
    pub preset: Option<String>,

    /// YAML file with additional presets
    pub presets_file: Option<PathBuf>,

    /// Directory the project directory is created in
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// [`Prompter`] backed by cliclack widgets
pub struct CliclackPrompter;

fn prompt_error(e: std::io::Error) -> ScaffoldError {
    // cliclack reports Esc and Ctrl-C inside a prompt as Interrupted
    if e.kind() == std::io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::Prompt(e)
    }
}

impl Prompter for CliclackPrompter {
    fn choose(&mut self, prompt: &str, items: &[Choice]) -> ScaffoldResult<usize> {
        let mut select = cliclack::select(prompt);
        for (idx, item) in items.iter().enumerate() {
            select = select.item(idx, &item.label, &item.hint);
        }
        select.interact().map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, initial: bool) -> ScaffoldResult<bool> {
        cliclack::confirm(prompt)
            .initial_value(initial)
            .interact()
            .map_err(prompt_error)
    }

    fn info(&mut self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::info(message).map_err(ScaffoldError::Prompt)
    }

    fn warning(&mut self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::warning(message).map_err(ScaffoldError::Prompt)
    }
}

/// Whether `err` is the user aborting the flow
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::Cancelled))
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    match create(config, args, cli_version).await {
        Err(e) if is_cancelled(&e) => {
            cliclack::outro_cancel("Setup cancelled.")?;
            Err(e)
        }
        result => result,
    }
}

async fn create<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    // Step 1: Presets (built-in plus file)
    let presets = load_presets(config, args.presets_file.as_deref(), cli_version)?;

    // Step 2: Collect the configuration and resolve it
    let options = ScaffoldOptions {
        parent_dir: select_parent_dir(&args)?,
        preset: args.preset.clone(),
        yes: args.yes,
    };
    let mut prompter = CliclackPrompter;
    let plan = workflow::prepare(&mut prompter, &presets, &options)?;
    cliclack::log::success(format!(
        "{}: {} files, {} dependencies, {} dev dependencies",
        plan.config.quadrant().display_name(),
        plan.files.len(),
        plan.files.dependencies.len(),
        plan.files.dev_dependencies.len()
    ))?;

    // Step 3: Check toolchain (advisory)
    check_toolchain(&plan)?;

    // Step 4: Confirm and write
    workflow::confirm(&mut prompter, &plan, &options).await?;
    create_project(&plan).await?;

    // Step 5: Show next steps
    let steps = config.next_steps(&plan.project_dir, &plan.config);
    report::print_summary(&plan.config, &steps);
    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Built-in presets followed by the presets file from `path` or the product's env var
pub fn load_presets<C: ProductConfig>(
    config: &C,
    path: Option<&Path>,
    cli_version: &str,
) -> Result<Vec<Preset>> {
    let mut presets = builtin_presets();

    let from_env = std::env::var_os(config.presets_env()).map(PathBuf::from);
    let Some(path) = path.map(Path::to_path_buf).or(from_env) else {
        return Ok(presets);
    };

    let file = load_presets_file(&path)?;
    if let Some(required) = &file.version {
        if let Some(warning) =
            version::check_compatibility(cli_version, required, config.upgrade_command())
        {
            cliclack::log::warning(format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            ))?;
        }
    }

    let extra = file
        .into_presets(&presets)
        .with_context(|| format!("Invalid presets in {}", path.display()))?;
    cliclack::log::info(format!("Loaded {} presets from {}", extra.len(), path.display()))?;
    presets.extend(extra);

    Ok(presets)
}

fn select_parent_dir(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => return Ok(current_dir),
    };
    cliclack::log::info(format!("Using directory: {}", path.display()))?;

    if path.exists() && !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }

    Ok(path)
}

fn check_toolchain(plan: &Plan) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    let tools = runtime::check_toolchain(&plan.config);
    let detected: Vec<String> = tools.iter().map(|t| t.describe()).collect();
    spinner.stop(format!("Detected: {}", detected.join(", ")));

    for missing in tools.iter().filter(|t| !t.available) {
        cliclack::log::warning(format!(
            "{} was not found. Install it from {} before running the project.",
            missing.tool.name, missing.tool.install_url
        ))?;
    }

    Ok(())
}

async fn create_project(plan: &Plan) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match templates::materialize(&plan.files, &plan.project_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                plan.project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to create project");
            Err(e.into())
        }
    }
}

/// Print every available preset
pub fn list_presets<C: ProductConfig>(
    config: &C,
    presets_file: Option<&Path>,
    cli_version: &str,
) -> Result<()> {
    let presets = load_presets(config, presets_file, cli_version)?;

    println!();
    for preset in &presets {
        let c = &preset.config;
        println!("  {}  {}", preset.id.bold(), preset.name);
        if !preset.description.is_empty() {
            println!("      {}", preset.description.dimmed());
        }
        println!(
            "      {}",
            [
                c.framework().id(),
                c.runtime().id(),
                c.package_manager().id(),
                c.validation().id(),
                c.error_handling().id(),
                c.testing().id(),
                c.state().id(),
                c.ui().id(),
            ]
            .join(" · ")
            .cyan()
        );
    }
    println!();
    println!("  Use one with: {} create --preset <id>", config.name());
    println!("  Presets file format: {}", config.docs_url());
    println!();

    Ok(())
}
