use std::env;
use std::path::PathBuf;

use dirs_next::home_dir;

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Reads a path from `var`, ignoring unset or blank values.
pub fn env_path_override(var: &str) -> Option<PathBuf> {
    let value = env::var(var).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| expand_tilde(trimmed))
}
