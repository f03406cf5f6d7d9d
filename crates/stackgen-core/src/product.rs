//! Product configuration trait for CLI binaries
//!
//! The core library stays brand-neutral; the binary supplies its identity
//! through this trait.

use crate::config::Configuration;
use crate::report;
use std::path::Path;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable naming a presets file
    fn presets_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Instructions printed after the project is written
    fn next_steps(&self, dir: &Path, config: &Configuration) -> Vec<String> {
        let current = std::env::current_dir().ok();
        report::next_steps(dir, current.as_deref(), config)
    }
}
