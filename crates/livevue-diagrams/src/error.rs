//! Error types for diagram generation.
//!
//! [`DiagramError`] is the single error type returned by the public API. It
//! covers model problems, layout failures, SVG export and file output.

use std::{io, path::PathBuf};

use thiserror::Error;

use livevue_diagrams_core::semantic::ModelError;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ModelError> for DiagramError {
    fn from(error: ModelError) -> Self {
        Self::Graph(error.to_string())
    }
}

impl From<crate::export::Error> for DiagramError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DiagramError {
    /// Wraps an I/O failure on `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
