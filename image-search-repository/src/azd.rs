//! Azure Developer CLI environment discovery.
//!
//! Resolves the default azd environment's `.env` file through the CLI's
//! JSON listing and loads it into the process environment, so locally run
//! binaries see the same variables a deployment would.

use serde::Deserialize;
use std::env;
use tokio::process::Command;
use tracing::info;

use crate::errors::AzdEnvError;

/// One entry of `azd env list -o json`.
#[derive(Debug, Deserialize)]
struct AzdEnvEntry {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "IsDefault")]
    is_default: bool,
    #[serde(rename = "DotEnvPath")]
    dot_env_path: String,
}

/// Load the default azd environment's variables into the process env.
///
/// Values from the env file override variables that are already set,
/// matching what a fresh deployment shell would see. Absence of a default
/// environment is fatal: callers must not continue without one.
pub async fn load_default_environment() -> Result<(), AzdEnvError> {
    let output = Command::new("azd")
        .args(["env", "list", "-o", "json"])
        .output()
        .await
        .map_err(|e| AzdEnvError::process(format!("Failed to run azd env list: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AzdEnvError::process(format!(
            "azd env list exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let (name, path) = default_env_file(&output.stdout)?;
    info!(environment = %name, path = %path, "Loading azd environment");

    let entries = dotenv::from_path_iter(&path)
        .map_err(|e| AzdEnvError::env_file(&path, e.to_string()))?;
    for entry in entries {
        let (key, value) = entry.map_err(|e| AzdEnvError::env_file(&path, e.to_string()))?;
        env::set_var(key, value);
    }

    Ok(())
}

/// Pick the default environment's name and `.env` path from the listing.
fn default_env_file(stdout: &[u8]) -> Result<(String, String), AzdEnvError> {
    let entries: Vec<AzdEnvEntry> = serde_json::from_slice(stdout)
        .map_err(|e| AzdEnvError::parse(e.to_string()))?;

    entries
        .into_iter()
        .find(|entry| entry.is_default)
        .map(|entry| (entry.name, entry.dot_env_path))
        .ok_or(AzdEnvError::NoDefaultEnvironment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env_file_picks_default_entry() {
        let listing = br#"[
            {"Name": "staging", "IsDefault": false, "DotEnvPath": "/envs/staging/.env"},
            {"Name": "dev", "IsDefault": true, "DotEnvPath": "/envs/dev/.env"}
        ]"#;

        let (name, path) = default_env_file(listing).unwrap();

        assert_eq!(name, "dev");
        assert_eq!(path, "/envs/dev/.env");
    }

    #[test]
    fn test_no_default_environment_is_an_error() {
        let listing = br#"[
            {"Name": "staging", "IsDefault": false, "DotEnvPath": "/envs/staging/.env"}
        ]"#;

        assert!(matches!(
            default_env_file(listing),
            Err(AzdEnvError::NoDefaultEnvironment)
        ));
    }

    #[test]
    fn test_unparsable_listing_is_an_error() {
        assert!(matches!(
            default_env_file(b"not json"),
            Err(AzdEnvError::ParseError(_))
        ));
    }
}
