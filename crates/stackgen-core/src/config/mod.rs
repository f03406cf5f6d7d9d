//! Project configuration: one concrete choice per axis
//!
//! A [`Configuration`] can only be obtained from [`ConfigurationBuilder::build`],
//! which enforces that the state and UI libraries belong to the chosen framework.

pub mod presets;
pub mod version;

use crate::catalog::{
    CatalogOption, Contribution, ErrorHandlingLibrary, Framework, PackageManager, Runtime,
    StateLibrary, TestingLibrary, UiLibrary, ValidationLibrary,
};
use crate::error::ConfigError;

pub use presets::{builtin_presets, find_preset, load_presets_file, Preset, PresetEntry, PresetFile};

/// The (framework, runtime) pair that selects a template blueprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    ViteReact,
    ViteVue,
    Fresh,
    VueCdn,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::ViteReact,
        Quadrant::ViteVue,
        Quadrant::Fresh,
        Quadrant::VueCdn,
    ];

    pub fn of(framework: Framework, runtime: Runtime) -> Self {
        match (framework, runtime) {
            (Framework::React, Runtime::Node | Runtime::Bun) => Quadrant::ViteReact,
            (Framework::Vue3, Runtime::Node | Runtime::Bun) => Quadrant::ViteVue,
            (Framework::React, Runtime::Deno) => Quadrant::Fresh,
            (Framework::Vue3, Runtime::Deno) => Quadrant::VueCdn,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Quadrant::ViteReact => "Vite + React",
            Quadrant::ViteVue => "Vite + Vue",
            Quadrant::Fresh => "Fresh",
            Quadrant::VueCdn => "Vue via CDN",
        }
    }

    pub fn framework(&self) -> Framework {
        match self {
            Quadrant::ViteReact | Quadrant::Fresh => Framework::React,
            Quadrant::ViteVue | Quadrant::VueCdn => Framework::Vue3,
        }
    }
}

/// A complete, validated set of choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    framework: Framework,
    runtime: Runtime,
    package_manager: PackageManager,
    validation: ValidationLibrary,
    error_handling: ErrorHandlingLibrary,
    testing: TestingLibrary,
    state: StateLibrary,
    ui: UiLibrary,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn validation(&self) -> ValidationLibrary {
        self.validation
    }

    pub fn error_handling(&self) -> ErrorHandlingLibrary {
        self.error_handling
    }

    pub fn testing(&self) -> TestingLibrary {
        self.testing
    }

    pub fn state(&self) -> StateLibrary {
        self.state
    }

    pub fn ui(&self) -> UiLibrary {
        self.ui
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.framework, self.runtime)
    }

    /// Name of the generated project directory: `${framework}-${runtime}-app`
    pub fn project_name(&self) -> String {
        format!("{}-{}-app", self.framework.id(), self.runtime.id())
    }

    /// Package contributions of the optional axes, in manifest merge order:
    /// validation, error handling, testing, state, UI
    pub fn contributions(&self) -> Vec<Contribution> {
        [
            self.validation.packages(),
            self.error_handling.packages(),
            self.testing.packages(self.framework, self.runtime),
            self.state.packages(self.framework),
            self.ui.packages(self.framework),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Labels of the optional axes that are not `none`, as `(axis, library)` pairs
    pub fn selected_features(&self) -> Vec<(&'static str, &'static str)> {
        let mut features = Vec::new();
        if self.validation != ValidationLibrary::None {
            features.push(("Validation", self.validation.label()));
        }
        if self.error_handling != ErrorHandlingLibrary::None {
            features.push(("Error handling", self.error_handling.label()));
        }
        if self.testing != TestingLibrary::None {
            features.push(("Testing", self.testing.label()));
        }
        if self.state != StateLibrary::None {
            features.push(("State management", self.state.label()));
        }
        if self.ui != UiLibrary::None {
            features.push(("UI components", self.ui.label()));
        }
        features
    }
}

/// Collects one value per axis and validates the cross-axis invariant once
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    framework: Option<Framework>,
    runtime: Option<Runtime>,
    package_manager: Option<PackageManager>,
    validation: Option<ValidationLibrary>,
    error_handling: Option<ErrorHandlingLibrary>,
    testing: Option<TestingLibrary>,
    state: Option<StateLibrary>,
    ui: Option<UiLibrary>,
}

impl ConfigurationBuilder {
    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = Some(package_manager);
        self
    }

    pub fn validation(mut self, validation: ValidationLibrary) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn error_handling(mut self, error_handling: ErrorHandlingLibrary) -> Self {
        self.error_handling = Some(error_handling);
        self
    }

    pub fn testing(mut self, testing: TestingLibrary) -> Self {
        self.testing = Some(testing);
        self
    }

    pub fn state(mut self, state: StateLibrary) -> Self {
        self.state = Some(state);
        self
    }

    pub fn ui(mut self, ui: UiLibrary) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Build the configuration. Framework, runtime and package manager are
    /// required; optional axes default to `none`.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let framework = self.framework.ok_or(ConfigError::Missing(Framework::AXIS))?;
        let runtime = self.runtime.ok_or(ConfigError::Missing(Runtime::AXIS))?;
        let package_manager = self
            .package_manager
            .ok_or(ConfigError::Missing(PackageManager::AXIS))?;
        let state = self.state.unwrap_or(StateLibrary::None);
        let ui = self.ui.unwrap_or(UiLibrary::None);

        if !StateLibrary::options_for(framework).contains(&state) {
            return Err(ConfigError::NotOfferedFor {
                axis: StateLibrary::AXIS,
                value: state.id(),
                framework: framework.label(),
            });
        }
        if !UiLibrary::options_for(framework).contains(&ui) {
            return Err(ConfigError::NotOfferedFor {
                axis: UiLibrary::AXIS,
                value: ui.id(),
                framework: framework.label(),
            });
        }

        Ok(Configuration {
            framework,
            runtime,
            package_manager,
            validation: self.validation.unwrap_or(ValidationLibrary::None),
            error_handling: self.error_handling.unwrap_or(ErrorHandlingLibrary::None),
            testing: self.testing.unwrap_or(TestingLibrary::None),
            state,
            ui,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react_node() -> ConfigurationBuilder {
        Configuration::builder()
            .framework(Framework::React)
            .runtime(Runtime::Node)
            .package_manager(PackageManager::Npm)
    }

    #[test]
    fn test_optional_axes_default_to_none() {
        let config = react_node().build().unwrap();
        assert_eq!(config.validation(), ValidationLibrary::None);
        assert_eq!(config.state(), StateLibrary::None);
        assert_eq!(config.ui(), UiLibrary::None);
        assert!(config.selected_features().is_empty());
        assert!(config.contributions().is_empty());
    }

    #[test]
    fn test_missing_required_axis() {
        let err = Configuration::builder()
            .framework(Framework::React)
            .package_manager(PackageManager::Npm)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("runtime")));
    }

    #[test]
    fn test_rejects_state_outside_framework_domain() {
        let err = Configuration::builder()
            .framework(Framework::Vue3)
            .runtime(Runtime::Bun)
            .package_manager(PackageManager::Pnpm)
            .state(StateLibrary::Redux)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "state library 'redux' is not available for Vue 3");
    }

    #[test]
    fn test_rejects_ui_outside_framework_domain() {
        let err = react_node().ui(UiLibrary::Vuetify).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotOfferedFor {
                value: "vuetify",
                ..
            }
        ));
    }

    #[test]
    fn test_project_name_and_quadrant() {
        let config = Configuration::builder()
            .framework(Framework::Vue3)
            .runtime(Runtime::Deno)
            .package_manager(PackageManager::Yarn)
            .build()
            .unwrap();
        assert_eq!(config.project_name(), "vue3-deno-app");
        assert_eq!(config.quadrant(), Quadrant::VueCdn);
        assert_eq!(Quadrant::of(Framework::React, Runtime::Bun), Quadrant::ViteReact);
        assert_eq!(Quadrant::of(Framework::React, Runtime::Deno), Quadrant::Fresh);
    }

    #[test]
    fn test_contributions_follow_axis_order() {
        let config = react_node()
            .ui(UiLibrary::Antd)
            .validation(ValidationLibrary::Yup)
            .state(StateLibrary::Jotai)
            .build()
            .unwrap();
        let first: Vec<_> = config
            .contributions()
            .iter()
            .map(|c| c.packages[0].name)
            .collect();
        assert_eq!(first, vec!["yup", "jotai", "antd"]);
    }

    #[test]
    fn test_selected_features_skip_none() {
        let config = react_node()
            .testing(TestingLibrary::Playwright)
            .state(StateLibrary::Zustand)
            .build()
            .unwrap();
        assert_eq!(
            config.selected_features(),
            vec![("Testing", "Playwright"), ("State management", "Zustand")]
        );
    }
}
