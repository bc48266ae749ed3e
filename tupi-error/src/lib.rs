#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_mut,
    missing_docs,
    missing_debug_implementations
)]
//! internal library to provide structures for errors in Tupi.
//!
//! # Examples
//! ```rust
//! use tupi_error::Result;
//!
//! fn main() -> Result<()> {
//!     Ok(())
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Boxed error to bypass specific [Error](StdError).
type BError = Box<dyn StdError + Send + Sync>;
/// anyhow-like error handler.
pub type Result<T> = core::result::Result<T, BError>;

/// The struct that represents an error
#[derive(Debug)]
pub struct Error {
    /// The error type.
    pub etype: ErrorType,
    /// The cause of this error.
    pub cause: Option<BError>,
    /// Explains the context in which the error occurs.
    pub context: Option<String>,
}

impl Error {
    /// Throw an [`Error`].
    pub fn new(
        etype: ErrorType,
        cause: Option<BError>,
        context: Option<String>,
    ) -> Self {
        Error {
            etype,
            cause,
            context,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.etype)
    }
}
impl StdError for Error {}

/// Errors in Tupi.
#[derive(Debug)]
pub enum ErrorType {
    /// Generic error that returns no additional information.
    Unspecified,
    /// An option value the pipeline does not recognize.
    Configuration(ConfigurationError),
    /// A caller-level precondition on pipeline input was violated.
    Pipeline(PipelineError),
    /// An external collaborator could not answer.
    Collaborator(CollaboratorError),
    /// IO errors, especially due to std::fs.
    InputOutput(IoError),
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorType::Unspecified => {
                write!(f, "An error has occurred, but no further information is provided.")
            },
            ErrorType::Configuration(error) => write!(f, "{:?}", error),
            ErrorType::Pipeline(error) => write!(f, "{:?}", error),
            ErrorType::Collaborator(error) => write!(f, "{:?}", error),
            ErrorType::InputOutput(error) => write!(f, "{:?}", error),
        }
    }
}
impl StdError for ErrorType {}

/// Unrecognized option values. Reported immediately instead of being
/// silently ignored, since they change the output shape.
#[derive(Debug)]
pub enum ConfigurationError {
    /// The normalizer tokenizer mode is not one of the supported names.
    UnknownTokenizerMode,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationError::UnknownTokenizerMode => {
                write!(f, "Unknown tokenizer mode for the normalizer.")
            },
        }
    }
}
impl StdError for ConfigurationError {}

/// Caller-side contract violations on pipeline input.
#[derive(Debug)]
pub enum PipelineError {
    /// The caller passed empty text where non-empty text is required.
    EmptyInput,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineError::EmptyInput => {
                write!(f, "The input text is empty.")
            },
        }
    }
}
impl StdError for PipelineError {}

/// Failures of the injected external collaborators.
#[derive(Debug)]
pub enum CollaboratorError {
    /// The translation service could not be reached or timed out.
    TranslationUnavailable,
    /// The tagging model is not available.
    TaggingUnavailable,
    /// The sentiment scorer is not available.
    SentimentUnavailable,
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollaboratorError::TranslationUnavailable => {
                write!(f, "The translation service is unavailable.")
            },
            CollaboratorError::TaggingUnavailable => {
                write!(f, "The tagging model is unavailable.")
            },
            CollaboratorError::SentimentUnavailable => {
                write!(f, "The sentiment scorer is unavailable.")
            },
        }
    }
}
impl StdError for CollaboratorError {}

/// Errors related to [`std`].
#[derive(Debug)]
pub enum IoError {
    /// Deserialization failed.
    DeserializationError,
    /// Data are corrupted or not in the correct format (UTF-8).
    ReadingError,
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::DeserializationError => {
                write!(f, "Deserialization failed.")
            },
            IoError::ReadingError => write!(
                f,
                "Data are corrupted or not in the correct format (UTF-8)."
            ),
        }
    }
}
impl StdError for IoError {}
