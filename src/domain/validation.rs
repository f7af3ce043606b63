use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    base.join(path)
}

/// An existing directory, relative paths taken from `base`.
pub fn is_valid_input_path(base: &Path, path: &str) -> bool {
    !path.is_empty() && resolve_path(base, path).is_dir()
}

/// An existing writable directory, or a path that `create_dir_all` could produce.
///
/// Checks:
/// - Non-empty
/// - If the path exists, it is a directory and not read-only
/// - Otherwise, the nearest existing ancestor is a directory and not read-only
pub fn is_valid_output_path(base: &Path, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let path = resolve_path(base, path);
    if path.exists() {
        return is_writable_dir(&path);
    }

    match path.ancestors().skip(1).find(|ancestor| ancestor.exists()) {
        Some(ancestor) => is_writable_dir(ancestor),
        None => false,
    }
}

fn is_writable_dir(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_dir() && !metadata.permissions().readonly(),
        Err(_) => false,
    }
}

/// Non-empty token. Callers trim before checking.
pub fn is_valid_string(value: &str) -> bool {
    !value.is_empty()
}

/// Positive base-10 integer that fits in a `u64`, digits only.
pub fn is_valid_proposal_id(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && matches!(value.parse::<u64>(), Ok(id) if id > 0)
}
