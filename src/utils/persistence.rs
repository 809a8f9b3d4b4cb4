//! File helpers for the ~/.arcade/ directory.

use crate::core::constants::ARCADE_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.arcade/ directory path, creating it if needed.
pub fn arcade_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(ARCADE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.arcade/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(arcade_dir()?.join(filename))
}

/// Read a text file, mapping "not found" to `Ok(None)`.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcade_dir_exists() {
        let dir = arcade_dir().expect("arcade_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(ARCADE_DIR_NAME));
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".arcade/test.json"));
    }

    #[test]
    fn test_read_optional_missing_is_none() {
        let path = std::env::temp_dir().join("arcade_nonexistent_test_file_12345.json");
        assert!(read_optional(&path).expect("read should succeed").is_none());
    }

    #[test]
    fn test_read_optional_existing() {
        let path = std::env::temp_dir().join("arcade_read_optional_test.txt");
        fs::write(&path, "hello").expect("write should succeed");
        assert_eq!(
            read_optional(&path).expect("read should succeed").as_deref(),
            Some("hello")
        );
        let _ = fs::remove_file(&path);
    }
}
