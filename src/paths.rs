//! Application directory paths.
//!
//! Single source of truth for the filesystem locations used by the app.
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! The data directory can be overridden with the `SUMMERTUI_DATA_DIR`
//! environment variable (useful for testing and custom deployments).

use std::path::PathBuf;

/// Application data root directory.
///
/// Holds the persisted timestamp state file and the log directory.
/// Resolves to `dirs::data_dir()/summertui/` by default. Override with
/// the `SUMMERTUI_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("SUMMERTUI_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("summertui"))
        .unwrap_or_else(|| PathBuf::from("/tmp/summertui-data"))
}

/// Persisted timestamp state file path (`data_dir()/state.json`).
#[must_use]
pub fn state_file() -> PathBuf {
    data_dir().join("state.json")
}

/// Log file directory (`data_dir()/logs/`).
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_nonempty() {
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn state_file_ends_with_state_json() {
        let path = state_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("state.json"), "state_file: {s}");
    }

    #[test]
    fn logs_dir_is_subpath_of_data_dir() {
        let logs = logs_dir();
        let data = data_dir();
        assert!(
            logs.starts_with(&data),
            "logs_dir ({}) should start with data_dir ({})",
            logs.display(),
            data.display()
        );
    }

    #[test]
    fn data_dir_override_via_env() {
        let key = "SUMMERTUI_DATA_DIR";
        let original = std::env::var_os(key);

        std::env::set_var(key, "/custom/data");
        let result = data_dir();
        assert_eq!(result, PathBuf::from("/custom/data"));

        // Restore.
        match original {
            Some(val) => std::env::set_var(key, val),
            None => std::env::remove_var(key),
        }
    }
}
