//! Error types for the harrow library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harrow operations.
///
/// Every resolution failure carries the identifier that failed to resolve;
/// nothing is retried or substituted internally. The one deliberate fallback
/// in the library — an unrecognized model override degrading to the crop's
/// default model — is not an error at all (see [`crate::model::resolve_model`]).
#[derive(Debug, Error)]
pub enum HarrowError {
    /// Crop code absent from the crop/model table.
    #[error("no model defined for crop '{crop}'")]
    UnknownCrop { crop: String },

    /// No cultivar file (.CUL) matched the model prefix in the genotype
    /// directory. Fatal: genetic parameters cannot be resolved without it.
    #[error("no cultivar file (.CUL) found for model '{model}' in '{dir}'")]
    MissingCultivarFile { model: String, dir: PathBuf },

    /// No weather file matched the station code in either search directory.
    #[error("no weather file found matching station code '{code}'")]
    MissingWeatherFile { code: String },

    /// Requested variable not present in any resolved table.
    #[error("no variable named '{variable}' was found")]
    UnknownVariable { variable: String },

    /// Registry queried with a treatment it never indexed.
    #[error("no records held for treatment '{treatment}'")]
    UnknownTreatment { treatment: String },

    /// Parallel construction inputs of unequal length.
    #[error("mismatched {what} lengths: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// Error reading a file or listing a directory.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input-file text.
    #[error("parse error in '{path}' at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl HarrowError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_variable(variable: impl Into<String>) -> Self {
        Self::UnknownVariable {
            variable: variable.into(),
        }
    }
}

/// Result type alias for harrow operations.
pub type Result<T> = std::result::Result<T, HarrowError>;
