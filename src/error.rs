/// Error types that can occur during model operations
///
/// # Variants
///
/// - `InputValidationError` - indicates the input data provided does not meet the expected shape or validation rules
/// - `ProcessingError` - indicates that something went wrong while training or evaluating
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while writing debug dumps
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (creating, appending, flushing)
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
