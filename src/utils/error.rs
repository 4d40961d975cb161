use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid date {day:02}/{month:02}/{year}: {reason}")]
    InvalidDate {
        day: u32,
        month: u32,
        year: i32,
        reason: String,
    },

    #[error("Cannot parse date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, NumerologyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn invalid_date(day: u32, month: u32, year: i32, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            day,
            month,
            year,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDate { .. } | Self::DateParse { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Invalid input is recoverable: the caller should ask again instead of giving up.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidDate { .. } => {
                format!("That birth date is not valid. {}", self)
            }
            Self::DateParse { input, .. } => {
                format!("Could not read '{}' as a date", input)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::CsvError(e) => format!("The CSV input could not be read: {}", e),
            Self::SerializationError(e) => format!("Could not write JSON output: {}", e),
            Self::ConfigError { message } | Self::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            Self::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidDate { .. } => {
                "Enter a real calendar date between 1900 and 2100 (day 1-31, month 1-12)"
            }
            Self::DateParse { .. } => {
                "Use DD/MM/YYYY, DD-MM-YYYY, DD.MM.YYYY, DDMMYYYY or YYYY-MM-DD"
            }
            Self::IoError(_) => "Check that the path exists and is readable/writable",
            Self::CsvError(_) => "Check the CSV header row, delimiter and column names",
            Self::SerializationError(_) => "Re-run with --verbose to see the failing record",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the configuration file and run again; --dry-run shows the parsed settings"
            }
            Self::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }
}
