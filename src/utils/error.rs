use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Gender lookup error: {message}")]
    LookupError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
    Data,
}

impl CleanerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CleanerError::IoError(_) => ErrorSeverity::Critical,
            CleanerError::CsvError(_) | CleanerError::ProcessingError { .. } => ErrorSeverity::High,
            CleanerError::ConfigError { .. }
            | CleanerError::ValidationError { .. }
            | CleanerError::LookupError { .. }
            | CleanerError::InvalidConfigValueError { .. }
            | CleanerError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CleanerError::IoError(_) => ErrorCategory::Io,
            CleanerError::CsvError(_) => ErrorCategory::Parse,
            CleanerError::ConfigError { .. }
            | CleanerError::ValidationError { .. }
            | CleanerError::InvalidConfigValueError { .. }
            | CleanerError::MissingConfigError { .. } => ErrorCategory::Config,
            CleanerError::ProcessingError { .. } | CleanerError::LookupError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanerError::CsvError(e) => format!("The input file could not be parsed: {}", e),
            CleanerError::IoError(e) => format!("A file could not be read or written: {}", e),
            CleanerError::ConfigError { message }
            | CleanerError::ValidationError { message }
            | CleanerError::ProcessingError { message } => message.clone(),
            CleanerError::LookupError { message } => {
                format!("The name-gender lookup table is unusable: {}", message)
            }
            CleanerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            CleanerError::MissingConfigError { field } => {
                format!("The required setting '{}' was not provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CleanerError::CsvError(_) => {
                "Check that the file is a comma- or semicolon-delimited export with a header row"
            }
            CleanerError::IoError(_) => "Check the file path and directory permissions",
            CleanerError::ConfigError { .. }
            | CleanerError::InvalidConfigValueError { .. }
            | CleanerError::MissingConfigError { .. } => {
                "Run with --help to see the expected flags and values"
            }
            CleanerError::ValidationError { .. } => "Fix the flagged setting and run again",
            CleanerError::LookupError { .. } => {
                "Lookup files must be CSV with a header and name,gender rows"
            }
            CleanerError::ProcessingError { .. } => {
                "Inspect the input file around the reported row"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanerError>;
