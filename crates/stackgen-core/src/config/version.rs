//! Version comparison between the CLI and a presets file

use semver::Version;

/// Compare the running CLI version against the minimum a presets file asks for.
/// Returns a warning message if the CLI is older.
pub fn check_compatibility(
    cli_version: &str,
    required_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    // Unparseable requirement: nothing to compare against
    let required_ver = parse_version(required_version)?;

    if cli_ver < required_ver {
        Some(format!(
            "These presets were written for version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            required_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, accepting a leading 'v'
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
