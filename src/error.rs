use miette::Diagnostic;
use thiserror::Error;

/// Main error type for geowall operations
#[derive(Error, Diagnostic, Debug)]
pub enum GeowallError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(geowall::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid dimensions: {width}x{height}")]
    #[diagnostic(
        code(geowall::dimensions),
        help("width and height must both be positive")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Parse error: {message}")]
    #[diagnostic(code(geowall::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Generation error: {message}")]
    #[diagnostic(code(geowall::generate))]
    Generation { message: String },
}

pub type Result<T> = std::result::Result<T, GeowallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = GeowallError::InvalidDimensions {
            width: 0,
            height: 1440,
        };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x1440");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = GeowallError::Io {
            path: "out/wall.png".into(),
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "IO error with out/wall.png: disk full");
    }
}
