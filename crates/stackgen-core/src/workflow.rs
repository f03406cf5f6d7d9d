//! The create flow: select, resolve, confirm, materialize
//!
//! Front-end agnostic. The cliclack front end calls the steps one by one to put
//! a spinner around materialization; [`scaffold`] runs them all.

use crate::collector::{self, PresetChoice, Prompter};
use crate::config::{find_preset, Configuration, Preset};
use crate::error::{Result, ScaffoldError};
use crate::templates::{self, materializer, FileSet};
use std::path::PathBuf;

/// Inputs that do not come from prompts
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
    /// Preset id that skips the selection prompts
    pub preset: Option<String>,
    /// Skip the confirmation
    pub yes: bool,
}

/// A resolved project that has not been written yet
#[derive(Debug, Clone)]
pub struct Plan {
    pub config: Configuration,
    pub project_dir: PathBuf,
    pub files: FileSet,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub config: Configuration,
    pub project_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Collect a configuration and resolve it. Nothing is written.
pub fn prepare<P: Prompter + ?Sized>(
    prompter: &mut P,
    presets: &[Preset],
    options: &ScaffoldOptions,
) -> Result<Plan> {
    let config = match &options.preset {
        Some(id) => {
            let preset = find_preset(presets, id)?;
            prompter.info(&format!("Using preset: {}", preset.name))?;
            preset.config
        }
        None => match collector::select_preset(prompter, presets)? {
            PresetChoice::Preset(config) => config,
            PresetChoice::Custom => collector::collect_custom(prompter)?,
        },
    };

    let files = templates::resolve(&config)?;
    let project_dir = options.parent_dir.join(config.project_name());

    Ok(Plan {
        config,
        project_dir,
        files,
    })
}

/// Ask before writing. Declining is [`ScaffoldError::Cancelled`].
pub async fn confirm<P: Prompter + ?Sized>(
    prompter: &mut P,
    plan: &Plan,
    options: &ScaffoldOptions,
) -> Result<()> {
    let existing = materializer::is_non_empty_dir(&plan.project_dir).await;
    if existing {
        prompter.warning(&format!(
            "{} already exists and is not empty. Generated files will overwrite files with the same name.",
            plan.project_dir.display()
        ))?;
    }

    if options.yes {
        return Ok(());
    }

    let prompt = format!(
        "Create {} ({}, {} files) in {}?",
        plan.config.project_name(),
        plan.config.quadrant().display_name(),
        plan.files.len(),
        plan.project_dir.display()
    );
    if prompter.confirm(&prompt, !existing)? {
        Ok(())
    } else {
        Err(ScaffoldError::Cancelled)
    }
}

/// Run the whole flow
pub async fn scaffold<P: Prompter + ?Sized>(
    prompter: &mut P,
    presets: &[Preset],
    options: &ScaffoldOptions,
) -> Result<Outcome> {
    let plan = prepare(prompter, presets, options)?;
    confirm(prompter, &plan, options).await?;
    let written = templates::materialize(&plan.files, &plan.project_dir).await?;

    Ok(Outcome {
        config: plan.config,
        project_dir: plan.project_dir,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Answer, ScriptedPrompter};
    use crate::config::builtin_presets;
    use tempfile::TempDir;

    fn options(temp: &TempDir) -> ScaffoldOptions {
        ScaffoldOptions {
            parent_dir: temp.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_preset_flow_writes_project() {
        let temp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Answer::pick("react-node"), Answer::Confirm(true)]);

        let outcome = scaffold(&mut prompter, &builtin_presets(), &options(&temp)).await.unwrap();
        assert_eq!(outcome.project_dir, temp.path().join("react-node-app"));
        assert!(outcome.project_dir.join("package.json").is_file());
        assert!(outcome.project_dir.join("src/stores/useCounter.ts").is_file());
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_decline_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Answer::pick("vue3-node"), Answer::Confirm(false)]);

        let err = scaffold(&mut prompter, &builtin_presets(), &options(&temp)).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Cancelled));
        assert!(!temp.path().join("vue3-node-app").exists());
    }

    #[tokio::test]
    async fn test_preset_flag_and_yes_skip_prompts() {
        let temp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::default();
        let options = ScaffoldOptions {
            preset: Some("VUE3-NODE".to_string()),
            yes: true,
            ..options(&temp)
        };

        let outcome = scaffold(&mut prompter, &builtin_presets(), &options).await.unwrap();
        assert!(outcome.project_dir.join("src/stores/counter.ts").is_file());
        assert!(prompter.prompts.is_empty());
        assert_eq!(prompter.notices, vec!["Using preset: Vue3 + Node quick start"]);
    }

    #[tokio::test]
    async fn test_unknown_preset_lists_available() {
        let temp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::default();
        let options = ScaffoldOptions {
            preset: Some("svelte".to_string()),
            ..options(&temp)
        };

        let err = scaffold(&mut prompter, &builtin_presets(), &options).await.unwrap_err();
        assert!(err.to_string().contains("react-node, vue3-node"));
    }

    #[tokio::test]
    async fn test_existing_directory_warns_before_confirm() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("react-node-app");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("notes.md"), "mine").unwrap();

        let mut prompter = ScriptedPrompter::new([Answer::pick("react-node"), Answer::Confirm(true)]);
        scaffold(&mut prompter, &builtin_presets(), &options(&temp)).await.unwrap();

        assert!(prompter.notices[0].starts_with("warning: "));
        assert_eq!(std::fs::read_to_string(project.join("notes.md")).unwrap(), "mine");
        assert!(project.join("README.md").is_file());
    }
}
