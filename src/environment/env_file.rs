//! Dotenv-style file loading.
//!
//! Variables loaded from env files populate the fallback map consulted when
//! the process environment does not have a variable set.

use crate::error::{RequisiteError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load environment variables from a dotenv-style file.
///
/// # Format
///
/// ```text
/// # Comment
/// KEY=value
/// QUOTED="value with spaces"
/// SINGLE='also works'
/// export EXPORTED=1
/// ```
///
/// # Errors
///
/// Returns `Io` if the file can't be read.
/// Returns `EnvFileParseError` for invalid lines.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_dotenv(&content, path)
}

fn parse_dotenv(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    let mut env = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            return Err(RequisiteError::EnvFileParseError {
                path: source_path.to_path_buf(),
                message: format!("Invalid line {}: {}", line_num + 1, line),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(RequisiteError::EnvFileParseError {
                path: source_path.to_path_buf(),
                message: format!("Missing variable name on line {}", line_num + 1),
            });
        }

        let mut value = value.trim();
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }

        env.insert(key.to_string(), value.to_string());
    }

    Ok(env)
}
