//! Toolchain detection
//!
//! Checks that the runtime and package manager named in a configuration are
//! installed. The result is advisory; scaffolding never depends on it.

pub mod check;

pub use check::{check_tool, check_toolchain, toolchain, Tool, ToolInfo};
