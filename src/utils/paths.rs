//! Filesystem locations for portal state.

use std::path::PathBuf;

const PORTAL_DIR: &str = "FilePortal";

/// Directory the session file lives in, following each platform's
/// app-data convention. An environment with no usable home falls back to
/// the working directory, which keeps the store readable either way.
pub fn portal_data_dir() -> PathBuf {
    let base = if cfg!(windows) {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else if cfg!(target_os = "macos") {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
    } else {
        std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share"))
            })
    };

    base.unwrap_or_else(|| PathBuf::from(".")).join(PORTAL_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_portal_dir() {
        assert!(portal_data_dir().ends_with(PORTAL_DIR));
    }
}
