//! stackgen core - scaffolding frontend projects from a set of stack choices
//!
//! A project is described by one choice per axis (framework, runtime, package
//! manager, validation, error handling, testing, state, UI). This library turns
//! such a [`Configuration`] into a [`FileSet`] and writes it to disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - option catalog, template resolution, materialization
//! - **Layer 2: Workflow Orchestration** - [`Prompter`] seam, presets and the create flow
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use stackgen_core::catalog::{Framework, PackageManager, Runtime, StateLibrary};
//! use stackgen_core::{templates, Configuration};
//!
//! # async fn demo() -> stackgen_core::Result<()> {
//! let config = Configuration::builder()
//!     .framework(Framework::React)
//!     .runtime(Runtime::Bun)
//!     .package_manager(PackageManager::Bun)
//!     .state(StateLibrary::Jotai)
//!     .build()?;
//!
//! let files = templates::resolve(&config)?;
//! templates::materialize(&files, std::path::Path::new("react-bun-app")).await?;
//! # Ok(())
//! # }
//! ```

/// Template text bundled at compile time, relative to `templates/`
macro_rules! asset {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod product;
pub mod report;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use collector::{Answer, Choice, PresetChoice, Prompter, ScriptedPrompter};
pub use config::{Configuration, ConfigurationBuilder, Preset, Quadrant};
pub use error::{ConfigError, Result, ScaffoldError};
pub use product::ProductConfig;
pub use templates::{FileSet, GeneratedFile, Manifest};
pub use workflow::{scaffold, Outcome, Plan, ScaffoldOptions};

#[cfg(feature = "tui")]
pub use tui::run;
