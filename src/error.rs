use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CarouselError {
    #[error("Cannot read source root '{path}'")]
    #[diagnostic(
        code(import_carousel::root_unreadable),
        help("Check that the directory exists and that you can list its contents")
    )]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(import_carousel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed interchange report at line {line}: {message}")]
    #[diagnostic(
        code(import_carousel::interchange_parse_error),
        help("The file should be a raw report written by `import-carousel inspect --output`")
    )]
    InterchangeParseError { line: usize, message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(import_carousel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(import_carousel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(import_carousel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(import_carousel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
