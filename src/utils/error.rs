use std::fmt;
use thiserror::Error;

/// A validated text field of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    CourseName,
}

impl Field {
    /// Key used in the JSON record.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::CourseName => "course_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::CourseName => "Course name",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("{field} cannot be empty")]
    ValidationError { field: Field },

    #[error("Missing field '{field}' in record")]
    MissingFieldError { field: &'static str },

    #[error("Field '{field}' must be a string")]
    InvalidFieldTypeError { field: &'static str },

    #[error("Malformed record at index {index}: {source}")]
    MalformedRecordError {
        index: usize,
        #[source]
        source: Box<RegistrarError>,
    },

    #[error("File '{path}' not found.")]
    NotFoundError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A console answer that could not be read as text. The stream itself
    /// is still usable, so the menu keeps going.
    #[error("Could not read input: {0}")]
    InputError(#[source] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// The three kinds of failure the console distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Unexpected,
}

impl RegistrarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistrarError::ValidationError { .. } => ErrorCategory::Validation,
            RegistrarError::NotFoundError { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Unexpected,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => "Invalid input.".to_string(),
            ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Unexpected => match self {
                RegistrarError::InvalidConfigValueError { .. }
                | RegistrarError::ConfigError { .. } => {
                    "The configuration could not be used.".to_string()
                }
                _ => "An unexpected error occurred.".to_string(),
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistrarError::ValidationError { .. } => "Enter a non-empty value for every field.",
            RegistrarError::NotFoundError { .. } => {
                "Register a student and save to create the file."
            }
            RegistrarError::MissingFieldError { .. }
            | RegistrarError::InvalidFieldTypeError { .. }
            | RegistrarError::MalformedRecordError { .. }
            | RegistrarError::SerializationError(_) => {
                "Check that the file is a JSON array of objects with string first_name, last_name and course_name."
            }
            RegistrarError::IoError(_) => "Check the file permissions and available disk space.",
            RegistrarError::InputError(_) => "Type the answer again using plain text.",
            RegistrarError::InvalidConfigValueError { .. } | RegistrarError::ConfigError { .. } => {
                "Fix the configuration file or command-line arguments."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
