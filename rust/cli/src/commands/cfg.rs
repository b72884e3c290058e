//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! Battler configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "ai": {
//!     "value": "scripted",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "pause": {
            "value": config.pause,
            "source": sources.pause,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_SEED, load_from};

    #[test]
    fn test_cfg_writes_values_and_sources() {
        let resolved = load_from(|key| match key {
            k if k == ENV_SEED => Some("12".to_string()),
            _ => None,
        })
        .unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        assert_eq!(json["seed"]["value"], 12);
        assert_eq!(json["seed"]["source"], "env");
        assert_eq!(json["ai"]["value"], "scripted");
        assert_eq!(json["ai"]["source"], "default");
        assert_eq!(json["pause"]["value"], true);
        assert!(output.contains('\n'), "output should be pretty-printed");
    }

    #[test]
    fn test_cfg_reports_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battler.toml");
        std::fs::write(&path, "pause = false\n").unwrap();
        let path = path.to_string_lossy().to_string();
        let resolved = load_from(|key| match key {
            k if k == config::ENV_CONFIG => Some(path.clone()),
            _ => None,
        })
        .unwrap();

        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["pause"]["value"], false);
        assert_eq!(json["pause"]["source"], "file");
    }
}
