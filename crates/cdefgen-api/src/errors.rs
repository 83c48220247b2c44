use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating declarations
///
/// Every variant is fatal for the run; the generator never retries and
/// never resumes partial work.
#[derive(Error, Debug)]
pub enum GenError {
    /// Input header missing or unreadable
    #[error("IO error reading header {0}: {1}")]
    HeaderRead(PathBuf, #[source] std::io::Error),

    /// Scratch header could not be written
    #[error("Failed to write scratch header {0}: {1}")]
    ScratchWrite(PathBuf, #[source] std::io::Error),

    /// Translator executable not found on the search path
    #[error("Translator `{0}` not found")]
    TranslatorMissing(String),

    /// Translator could not be started for a reason other than absence
    #[error("Failed to run translator `{0}`: {1}")]
    TranslatorSpawn(String, #[source] std::io::Error),

    /// Translator ran but exited unsuccessfully
    #[error("Translator `{program}` exited with {status}: {stderr}")]
    TranslatorFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Translator output was not usable declaration text
    #[error("Malformed translator output: {0}")]
    MalformedOutput(String),

    /// A raw marker names an identifier that no namespace table knows
    #[error("Unresolved identifier `{marker}` in: {line}")]
    UnresolvedIdentifier { marker: String, line: String },

    /// Output file could not be written
    #[error("Failed to write output {0}: {1}")]
    OutputWrite(PathBuf, #[source] std::io::Error),
}

impl GenError {
    /// Attach the full declaration line to an unresolved-identifier error
    pub fn in_line(self, line: &str) -> Self {
        match self {
            GenError::UnresolvedIdentifier { marker, .. } => GenError::UnresolvedIdentifier {
                marker,
                line: line.to_string(),
            },
            other => other,
        }
    }
}

/// Result type for generator operations
pub type GenResult<T> = Result<T, GenError>;
