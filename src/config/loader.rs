//! Credentials loading with environment variable substitution and overrides

use super::credentials::{Credentials, COSMOS_DB_KEYS, KNOWN_KEYS};
use super::schema::CollectorConfig;
use crate::domain::errors::MetadataError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variables overriding credentials file entries
pub const ENV_PREFIX: &str = "ABS_";

/// Loads and validates the collector configuration
///
/// This function:
/// 1. Reads the credentials file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the `KEY=VALUE` lines
/// 4. Applies environment variable overrides (ABS_* prefix)
/// 5. Builds and validates the typed configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - A line is not `KEY=VALUE`
/// - An Azure key references an environment variable that is not set
/// - A required Azure key is missing
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use abs_metadata::config::load_config;
///
/// let config = load_config("credentials.txt").expect("Failed to load credentials");
/// println!("Member: {}", config.azure.blockchain_member_name);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CollectorConfig> {
    let credentials = load_credentials(path)?;
    let config = CollectorConfig::from_credentials(&credentials)?;

    config.validate().map_err(|e| {
        MetadataError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Reads a credentials file, substituting `${VAR}` references and applying
/// `ABS_<KEY>` overrides
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a line is
/// malformed, or a referenced environment variable is unset.
pub fn load_credentials(path: impl AsRef<Path>) -> Result<Credentials> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MetadataError::Configuration(format!(
            "Credentials file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MetadataError::Configuration(format!(
            "Failed to read credentials file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;
    let mut credentials: Credentials = contents.parse()?;
    apply_env_overrides(&mut credentials);

    tracing::debug!(
        path = %path.display(),
        keys = ?credentials.keys().collect::<Vec<_>>(),
        "Loaded credentials"
    );

    Ok(credentials)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// A Cosmos DB line referencing an unset variable is dropped, so the key
/// counts as missing and contract collection degrades. Unset variables on
/// any other line are fatal.
///
/// # Errors
///
/// Returns an error listing every fatal variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MetadataError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Comment lines are copied verbatim
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        let mut unset: Vec<String> = Vec::new();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !unset.iter().any(|unset_var| unset_var == var_name) {
                        unset.push(var_name.to_string());
                    }
                }
            }
        }

        if unset.is_empty() {
            result.push_str(&processed_line);
            result.push('\n');
            continue;
        }

        let key = line.split_once('=').map(|(key, _)| key.trim());
        match key {
            Some(key) if COSMOS_DB_KEYS.contains(&key) => {
                tracing::warn!(
                    key = key,
                    variables = %unset.join(", "),
                    "Environment variable not set, ignoring credential"
                );
            }
            _ => {
                for var_name in unset {
                    if !missing_vars.contains(&var_name) {
                        missing_vars.push(var_name);
                    }
                }
            }
        }
    }

    if !missing_vars.is_empty() {
        return Err(MetadataError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `ABS_<KEY>` environment variables over file values
///
/// For example `ABS_COSMOS_DB_KEY` replaces `COSMOS_DB_KEY`.
fn apply_env_overrides(credentials: &mut Credentials) {
    for key in KNOWN_KEYS {
        if let Ok(value) = std::env::var(format!("{ENV_PREFIX}{key}")) {
            tracing::debug!(key = key, "Credential overridden from environment");
            credentials.set(key, value);
        }
    }
}
