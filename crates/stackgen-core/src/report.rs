//! Feature summary, README and next-step instructions

use crate::catalog::PackageManager;
use crate::config::Configuration;
use crate::error::Result;
use crate::templates::render::{lines, render};
use colored::Colorize;
use minijinja::context;
use std::path::Path;

/// `(install, dev)` commands for a package manager
pub fn commands(package_manager: PackageManager) -> (&'static str, &'static str) {
    match package_manager {
        PackageManager::Npm => ("npm install", "npm run dev"),
        PackageManager::Pnpm => ("pnpm install", "pnpm dev"),
        PackageManager::Yarn => ("yarn install", "yarn dev"),
        PackageManager::Bun => ("bun install", "bun dev"),
    }
}

/// One bullet for the project structure, then one per optional axis that is not `none`
pub fn feature_bullets(config: &Configuration) -> Vec<String> {
    let mut bullets = vec![format!("{} project structure", config.quadrant().display_name())];
    bullets.extend(
        config
            .selected_features()
            .into_iter()
            .map(|(axis, library)| format!("{}: {}", axis, library)),
    );
    bullets
}

/// README.md of the generated project
pub fn readme(config: &Configuration) -> Result<String> {
    let (install, dev) = commands(config.package_manager());
    let features = lines(feature_bullets(config).iter().map(|b| format!("- {}", b)));
    render(
        "README.md",
        asset!("common/README.md"),
        context! {
            title => config.project_name(),
            quadrant => config.quadrant().display_name(),
            features,
            install,
            dev,
        },
    )
}

/// Shell steps to start working on the project. `cd` is skipped when the
/// project is the current directory.
pub fn next_steps(dir: &Path, current_dir: Option<&Path>, config: &Configuration) -> Vec<String> {
    let (install, dev) = commands(config.package_manager());
    let mut steps = Vec::new();
    if current_dir != Some(dir) {
        steps.push(format!("cd {}", dir.display()));
    }
    steps.push(install.to_string());
    steps.push(dev.to_string());
    steps
}

/// Print the selected features and numbered next steps
pub fn print_summary(config: &Configuration, steps: &[String]) {
    println!();
    println!("  {}", "Features".bold());
    for bullet in feature_bullets(config) {
        println!("  {} {}", "•".dimmed(), bullet);
    }

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Framework, Runtime, StateLibrary, TestingLibrary, UiLibrary, ValidationLibrary,
    };
    use std::path::PathBuf;

    fn config(package_manager: PackageManager) -> Configuration {
        Configuration::builder()
            .framework(Framework::Vue3)
            .runtime(Runtime::Node)
            .package_manager(package_manager)
            .validation(ValidationLibrary::Zod)
            .state(StateLibrary::Pinia)
            .ui(UiLibrary::Vuetify)
            .build()
            .unwrap()
    }

    #[test]
    fn test_commands_per_package_manager() {
        assert_eq!(commands(PackageManager::Npm), ("npm install", "npm run dev"));
        assert_eq!(commands(PackageManager::Pnpm), ("pnpm install", "pnpm dev"));
        assert_eq!(commands(PackageManager::Yarn), ("yarn install", "yarn dev"));
        assert_eq!(commands(PackageManager::Bun), ("bun install", "bun dev"));
    }

    #[test]
    fn test_feature_bullets() {
        let bullets = feature_bullets(&config(PackageManager::Npm));
        assert_eq!(
            bullets,
            vec![
                "Vite + Vue project structure",
                "Validation: Zod",
                "State management: Pinia",
                "UI components: Vuetify",
            ]
        );

        let bare = Configuration::builder()
            .framework(Framework::React)
            .runtime(Runtime::Deno)
            .package_manager(PackageManager::Npm)
            .testing(TestingLibrary::None)
            .build()
            .unwrap();
        assert_eq!(feature_bullets(&bare), vec!["Fresh project structure"]);
    }

    #[test]
    fn test_readme_lists_features_and_commands() {
        let readme = readme(&config(PackageManager::Pnpm)).unwrap();
        assert!(readme.starts_with("# vue3-node-app\n"));
        assert_eq!(readme.lines().filter(|l| l.starts_with("- ")).count(), 4);
        assert!(readme.contains("```sh\npnpm install\n```"));
        assert!(readme.contains("```sh\npnpm dev\n```"));
    }

    #[test]
    fn test_next_steps_skip_cd_in_current_dir() {
        let dir = PathBuf::from("/work/vue3-node-app");
        let config = config(PackageManager::Yarn);

        let steps = next_steps(&dir, Some(Path::new("/work")), &config);
        assert_eq!(steps, vec!["cd /work/vue3-node-app", "yarn install", "yarn dev"]);

        let steps = next_steps(&dir, Some(&dir), &config);
        assert_eq!(steps, vec!["yarn install", "yarn dev"]);
    }
}
