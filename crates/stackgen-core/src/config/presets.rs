//! Named presets: built-in quick starts and user-defined presets files

use super::Configuration;
use crate::catalog::{
    ErrorHandlingLibrary, Framework, PackageManager, Runtime, StateLibrary, TestingLibrary,
    UiLibrary, ValidationLibrary,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A fully pre-filled configuration the user can pick instead of answering every prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub config: Configuration,
}

/// The two quick-start presets offered on every run
pub fn builtin_presets() -> Vec<Preset> {
    let quick_start = |framework: Framework, state: StateLibrary| {
        Configuration::builder()
            .framework(framework)
            .runtime(Runtime::Node)
            .package_manager(PackageManager::Npm)
            .validation(ValidationLibrary::Zod)
            .error_handling(ErrorHandlingLibrary::Neverthrow)
            .testing(TestingLibrary::Vitest)
            .state(state)
            .ui(UiLibrary::None)
            .build()
    };

    vec![
        builtin(
            "react-node",
            "React + Node quick start",
            "Zod, neverthrow, Vitest and Zustand on Vite",
            quick_start(Framework::React, StateLibrary::Zustand),
        ),
        builtin(
            "vue3-node",
            "Vue3 + Node quick start",
            "Zod, neverthrow, Vitest and Pinia on Vite",
            quick_start(Framework::Vue3, StateLibrary::Pinia),
        ),
    ]
}

/// Panics on an invalid built-in configuration
fn builtin(
    id: &str,
    name: &str,
    description: &str,
    config: Result<Configuration, ConfigError>,
) -> Preset {
    match config {
        Ok(config) => Preset {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            config,
        },
        Err(e) => unreachable!("built-in preset {} is invalid: {}", id, e),
    }
}

/// Presets file (YAML)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetFile {
    /// Minimum CLI version these presets were written for
    #[serde(default)]
    pub version: Option<String>,

    /// Preset definitions, offered after the built-in presets
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// One preset as written in a presets file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetEntry {
    /// Identifier used with `--preset`
    pub id: String,

    /// Display name (defaults to the id)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,

    pub framework: Framework,
    pub runtime: Runtime,
    pub package_manager: PackageManager,

    /// Optional axes default to none when omitted
    #[serde(default = "none_validation")]
    pub validation: ValidationLibrary,
    #[serde(default = "none_error_handling")]
    pub error_handling: ErrorHandlingLibrary,
    #[serde(default = "none_testing")]
    pub testing: TestingLibrary,
    #[serde(default = "none_state")]
    pub state: StateLibrary,
    #[serde(default = "none_ui")]
    pub ui: UiLibrary,
}

fn none_validation() -> ValidationLibrary {
    ValidationLibrary::None
}

fn none_error_handling() -> ErrorHandlingLibrary {
    ErrorHandlingLibrary::None
}

fn none_testing() -> TestingLibrary {
    TestingLibrary::None
}

fn none_state() -> StateLibrary {
    StateLibrary::None
}

fn none_ui() -> UiLibrary {
    UiLibrary::None
}

impl PresetEntry {
    /// Validate the entry into a preset (fails on cross-axis violations)
    pub fn into_preset(self) -> Result<Preset, ConfigError> {
        let config = Configuration::builder()
            .framework(self.framework)
            .runtime(self.runtime)
            .package_manager(self.package_manager)
            .validation(self.validation)
            .error_handling(self.error_handling)
            .testing(self.testing)
            .state(self.state)
            .ui(self.ui)
            .build()?;

        Ok(Preset {
            name: self.name.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            description: self.description,
            config,
        })
    }
}

impl PresetFile {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::ParsePresets {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate every entry; ids must be unique, including against `existing`
    pub fn into_presets(self, existing: &[Preset]) -> Result<Vec<Preset>, ConfigError> {
        let mut presets: Vec<Preset> = Vec::with_capacity(self.presets.len());
        for entry in self.presets {
            let taken = existing.iter().chain(presets.iter()).any(|p| p.id == entry.id);
            if taken {
                return Err(ConfigError::DuplicatePreset(entry.id));
            }
            presets.push(entry.into_preset()?);
        }
        Ok(presets)
    }
}

/// Read and parse a presets file
pub fn load_presets_file(path: &Path) -> Result<PresetFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadPresets {
        path: path.to_path_buf(),
        source,
    })?;
    PresetFile::parse(&content, path)
}

/// Find a preset by id
pub fn find_preset<'a>(presets: &'a [Preset], id: &str) -> Result<&'a Preset, ConfigError> {
    presets
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| ConfigError::UnknownPreset {
            id: id.to_string(),
            available: presets
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 2);

        let react = &presets[0].config;
        assert_eq!(react.framework(), Framework::React);
        assert_eq!(react.runtime(), Runtime::Node);
        assert_eq!(react.package_manager(), PackageManager::Npm);
        assert_eq!(react.validation(), ValidationLibrary::Zod);
        assert_eq!(react.error_handling(), ErrorHandlingLibrary::Neverthrow);
        assert_eq!(react.testing(), TestingLibrary::Vitest);
        assert_eq!(react.state(), StateLibrary::Zustand);
        assert_eq!(react.ui(), UiLibrary::None);

        assert_eq!(presets[1].config.framework(), Framework::Vue3);
        assert_eq!(presets[1].config.state(), StateLibrary::Pinia);
    }

    #[test]
    #[should_panic(expected = "built-in preset broken is invalid")]
    fn test_invalid_builtin_fails_loudly() {
        let config = Configuration::builder()
            .framework(Framework::React)
            .runtime(Runtime::Node)
            .package_manager(PackageManager::Npm)
            .state(StateLibrary::Pinia)
            .build();
        builtin("broken", "Broken", "", config);
    }

    #[test]
    fn test_parse_presets_file() {
        let yaml = r#"
version: "0.1.0"
presets:
  - id: team
    name: Team default
    description: React on Bun with Redux
    framework: react
    runtime: bun
    package_manager: pnpm
    validation: io-ts
    error_handling: oxide.ts
    state: redux
"#;
        let file = PresetFile::parse(yaml, Path::new("presets.yaml")).unwrap();
        assert_eq!(file.version.as_deref(), Some("0.1.0"));

        let presets = file.into_presets(&builtin_presets()).unwrap();
        assert_eq!(presets.len(), 1);
        let config = presets[0].config;
        assert_eq!(config.runtime(), Runtime::Bun);
        assert_eq!(config.validation(), ValidationLibrary::IoTs);
        assert_eq!(config.error_handling(), ErrorHandlingLibrary::OxideTs);
        assert_eq!(config.testing(), TestingLibrary::None);
        assert_eq!(config.ui(), UiLibrary::None);
    }

    #[test]
    fn test_preset_outside_framework_domain_is_rejected() {
        let yaml = r#"
presets:
  - id: broken
    framework: vue3
    runtime: node
    package_manager: npm
    state: recoil
"#;
        let file = PresetFile::parse(yaml, Path::new("presets.yaml")).unwrap();
        let err = file.into_presets(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::NotOfferedFor { value: "recoil", .. }));
    }

    #[test]
    fn test_unknown_library_is_a_parse_error() {
        let yaml = r#"
presets:
  - id: typo
    framework: react
    runtime: node
    package_manager: npm
    validation: zodd
"#;
        let err = PresetFile::parse(yaml, Path::new("p.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParsePresets { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let yaml = r#"
presets:
  - id: react-node
    framework: react
    runtime: node
    package_manager: npm
"#;
        let file = PresetFile::parse(yaml, Path::new("p.yaml")).unwrap();
        let err = file.into_presets(&builtin_presets()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePreset(id) if id == "react-node"));
    }

    #[test]
    fn test_find_preset_lists_available_ids() {
        let presets = builtin_presets();
        assert_eq!(find_preset(&presets, "VUE3-node").unwrap().id, "vue3-node");

        let err = find_preset(&presets, "svelte").unwrap_err();
        assert!(err.to_string().contains("react-node, vue3-node"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_presets_file(Path::new("/nonexistent/presets.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadPresets { .. }));
    }
}
