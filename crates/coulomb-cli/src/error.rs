//! Errors reported by the command-line tool.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

use coulomb::LayoutError;

/// Errors raised while loading inputs, running the layout or writing output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing configuration file: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        src: String,
        message: String,
        span: Option<Range<usize>>,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Failed to serialize layout: {0}")]
    Serialize(String),
}

impl CliError {
    /// Builds a [`CliError::Parse`] from a TOML error and the text it came from.
    pub fn parse(path: impl Into<PathBuf>, src: String, err: &toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            src,
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}
