use thiserror::Error;

/// Maximum size of a file the editor will open: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot open files: {0}")]
    Unsupported(String),

    #[error("File is too large ({size} bytes). Maximum size is {limit} bytes.", limit = MAX_FILE_SIZE)]
    FileTooLarge { size: u64 },

    #[error("File is not valid text")]
    InvalidContent,

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Unsupported("no display server".to_string());
        assert_eq!(err.to_string(), "Cannot open files: no display server");

        let err = AppError::FileTooLarge { size: 11 * 1024 * 1024 };
        assert!(err.to_string().contains("11534336"));
        assert!(err.to_string().contains("10485760"));

        let err = AppError::Settings("invalid font size".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid font size");
    }

    #[test]
    fn test_invalid_content_display() {
        assert_eq!(AppError::InvalidContent.to_string(), "File is not valid text");
    }
}
