//! Configuration loader with TOML parsing and environment variable substitution

use super::schema::TillsynConfig;
use crate::domain::errors::TillsynError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`TillsynConfig`]
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use tillsyn::config::load_config;
///
/// let config = load_config("tillsyn.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TillsynConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TillsynError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TillsynError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: TillsynConfig = toml::from_str(&contents)
        .map_err(|e| TillsynError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config
        .validate()
        .map_err(|e| TillsynError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Load configuration from a TOML file, falling back to defaults when
/// the file does not exist. Used by the CLI so a bare invocation works
/// out of the box.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<TillsynConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        Ok(TillsynConfig::default())
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| TillsynError::Configuration(format!("env var pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TillsynError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}
