//! Detection of the runtime and package manager a configuration relies on

use crate::catalog::{PackageManager, Runtime};
use crate::config::Configuration;
use std::process::Command;

/// A binary the generated project expects on PATH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub binary: &'static str,
    pub name: &'static str,
    pub install_url: &'static str,
}

/// Detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub tool: Tool,
    pub version: Option<String>,
    pub available: bool,
}

impl ToolInfo {
    /// `Node.js (v20.11.1)` or `Node.js (not installed)`
    pub fn describe(&self) -> String {
        match &self.version {
            Some(version) if self.available => format!("{} ({})", self.tool.name, version),
            _ if self.available => format!("{} (unknown)", self.tool.name),
            _ => format!("{} (not installed)", self.tool.name),
        }
    }
}

pub fn runtime_tool(runtime: Runtime) -> Tool {
    match runtime {
        Runtime::Node => Tool {
            binary: "node",
            name: "Node.js",
            install_url: "https://nodejs.org",
        },
        Runtime::Bun => Tool {
            binary: "bun",
            name: "Bun",
            install_url: "https://bun.sh",
        },
        Runtime::Deno => Tool {
            binary: "deno",
            name: "Deno",
            install_url: "https://deno.com",
        },
    }
}

pub fn package_manager_tool(package_manager: PackageManager) -> Tool {
    match package_manager {
        PackageManager::Npm => Tool {
            binary: "npm",
            name: "npm",
            install_url: "https://nodejs.org",
        },
        PackageManager::Pnpm => Tool {
            binary: "pnpm",
            name: "pnpm",
            install_url: "https://pnpm.io/installation",
        },
        PackageManager::Yarn => Tool {
            binary: "yarn",
            name: "Yarn",
            install_url: "https://yarnpkg.com/getting-started/install",
        },
        PackageManager::Bun => runtime_tool(Runtime::Bun),
    }
}

/// Runtime first, then the package manager unless it is the same binary
pub fn toolchain(config: &Configuration) -> Vec<Tool> {
    let runtime = runtime_tool(config.runtime());
    let package_manager = package_manager_tool(config.package_manager());
    if runtime.binary == package_manager.binary {
        vec![runtime]
    } else {
        vec![runtime, package_manager]
    }
}

/// Run `<binary> --version`
pub fn check_tool(tool: Tool) -> ToolInfo {
    let output = Command::new(tool.binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                tool,
                version: Some(version).filter(|v| !v.is_empty()),
                available: true,
            }
        }
        _ => ToolInfo {
            tool,
            version: None,
            available: false,
        },
    }
}

/// Check every tool of the configuration. Missing tools are reported, never fatal.
pub fn check_toolchain(config: &Configuration) -> Vec<ToolInfo> {
    toolchain(config).into_iter().map(check_tool).collect()
}
