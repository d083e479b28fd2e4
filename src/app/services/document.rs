use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::infrastructure::error::{AppError, MAX_FILE_SIZE, Result};

/// A file that passed validation and was read into memory.
#[derive(Debug)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
}

/// Extract the display name from a file path, or "Unknown" if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Read a picked file into memory.
///
/// The size ceiling is checked against metadata before reading, so an
/// oversized file is rejected without pulling its bytes in. Decoding
/// must yield UTF-8 text; anything else is reported as invalid content.
pub fn load_document(path: PathBuf) -> Result<LoadedDocument> {
    let metadata = fs::metadata(&path)?;
    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge { size });
    }

    let bytes = fs::read(&path)?;
    let content = String::from_utf8(bytes).map_err(|_| AppError::InvalidContent)?;

    let name = display_name(&path);
    debug!(file = %name, bytes = size, "document loaded");
    Ok(LoadedDocument { path, name, content })
}

/// Write the document back to disk as one open-write-close sequence.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    debug!(file = %path.display(), bytes = content.len(), "document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Hi").unwrap();

        let doc = load_document(path.clone()).unwrap();
        assert_eq!(doc.name, "notes.md");
        assert_eq!(doc.content, "# Hi");
        assert_eq!(doc.path, path);
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.md");
        let file = fs::File::create(&path).unwrap();
        // A sparse file is enough; only metadata is consulted.
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        let err = load_document(path).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size } if size == MAX_FILE_SIZE + 1));
    }

    #[test]
    fn test_load_accepts_file_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge.md");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE).unwrap();

        assert!(load_document(path).is_ok());
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load_document(path).unwrap_err();
        assert!(matches!(err, AppError::InvalidContent));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        write_document(&path, "# Hi there").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Hi there");

        // Overwrites leave only the latest content.
        write_document(&path, "shorter").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "shorter");
    }

    #[test]
    fn test_write_to_bad_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.md");
        assert!(write_document(&path, "x").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/user/notes.md")), "notes.md");
        assert_eq!(display_name(Path::new("notes.md")), "notes.md");
        assert_eq!(display_name(Path::new("/")), "Unknown");
        assert_eq!(display_name(Path::new("")), "Unknown");
    }
}
