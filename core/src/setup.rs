//! Resolution of the root and destination folders before a scan

use crate::error::{RdsrError, Result};
use log::info;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Folder created in the working directory when no destination is given
pub const DEFAULT_DEST_DIR: &str = "RDSR";

/// Checks that the root folder exists and is a directory
///
/// # Errors
///
/// Returns [`RdsrError::Setup`] if the path is missing or not a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(RdsrError::Setup(format!(
            "The path {} does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(RdsrError::Setup(format!(
            "The path {} is not a directory",
            path.display()
        )));
    }
    info!("Root folder is {}", path.display());
    Ok(path.to_path_buf())
}

/// Resolves the destination folder, creating it with its parents if absent
///
/// `None` or an empty path selects `RDSR` in the current working directory.
///
/// # Errors
///
/// Returns [`RdsrError::Setup`] if the folder cannot be created or the path
/// is not a directory.
pub fn resolve_destination(dest: Option<&Path>) -> Result<PathBuf> {
    let dest = match dest {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => env::current_dir()?.join(DEFAULT_DEST_DIR),
    };

    if !dest.exists() {
        fs::create_dir_all(&dest).map_err(|e| {
            RdsrError::Setup(format!(
                "Failed to create the directory {}: {}",
                dest.display(),
                e
            ))
        })?;
        info!("Created the directory {}", dest.display());
    }
    if !dest.is_dir() {
        return Err(RdsrError::Setup(format!(
            "The path {} is not a directory",
            dest.display()
        )));
    }

    info!("Destination folder is {}", dest.display());
    Ok(dest)
}

/// Writes a prompt and reads one trimmed line of input
pub fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_accepts_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(temp_dir.path()).unwrap(), temp_dir.path());
    }

    #[test]
    fn test_resolve_root_rejects_missing_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        File::create(&file).unwrap();

        assert!(matches!(
            resolve_root(&temp_dir.path().join("absent")),
            Err(RdsrError::Setup(_))
        ));
        assert!(matches!(resolve_root(&file), Err(RdsrError::Setup(_))));
    }

    #[test]
    fn test_resolve_destination_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("a/b/RDSR");

        let resolved = resolve_destination(Some(dest.as_path())).unwrap();

        assert_eq!(resolved, dest);
        assert!(dest.is_dir());
    }

    #[test]
    fn test_resolve_destination_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        File::create(&file).unwrap();

        assert!(matches!(
            resolve_destination(Some(file.as_path())),
            Err(RdsrError::Setup(_))
        ));
    }

    #[test]
    fn test_prompt_line_trims_input() {
        let mut input = Cursor::new(b"  /data/scans \n".to_vec());
        let mut output = Vec::new();

        let line = prompt_line("Enter the root folder: ", &mut input, &mut output).unwrap();

        assert_eq!(line, "/data/scans");
        assert_eq!(output, b"Enter the root folder: ");
    }

    #[test]
    fn test_prompt_line_empty_input() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert_eq!(prompt_line("> ", &mut input, &mut output).unwrap(), "");
    }
}
