// Bookmark Gallery platform paths for Windows
// Config: %APPDATA%\BookmarkGallery

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory on Windows.
/// Falls back to `C:\Users\Default\AppData\Roaming` when `%APPDATA%` is unset.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from(r"C:\Users\Default\AppData\Roaming"));
    PathBuf::from(appdata).join("BookmarkGallery")
}
