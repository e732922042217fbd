use std::fmt;

/// Failures surfaced by the HTTP helpers.
///
/// The verification form collapses all of these into one generic message, so
/// the variants mainly keep failure causes distinct in code and tests.
#[derive(Clone, Debug)]
pub enum AppError {
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
