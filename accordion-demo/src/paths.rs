//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "accordion";
const APPLICATION: &str = "accordion";

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/accordion` or `~/.cache/accordion`
/// - macOS: `~/Library/Caches/dev.accordion.accordion`
/// - Windows: `C:\Users\<User>\AppData\Local\accordion\accordion\cache`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
