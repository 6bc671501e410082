use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Random source unavailable: {message}")]
    RandomSourceError { message: String },

    #[error("Simulation worker failed: {message}")]
    WorkerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SimError {
    pub fn invalid_value(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        SimError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SimError::ConfigParseError { .. }
            | SimError::MissingConfigError { .. }
            | SimError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SimError::RandomSourceError { .. } | SimError::WorkerError { .. } => {
                ErrorCategory::System
            }
            SimError::IoError(_) | SimError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            SimError::ConfigParseError { .. } => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            SimError::MissingConfigError { field } => {
                format!("Add the '{}' field to your configuration", field)
            }
            SimError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SimError::RandomSourceError { .. } => {
                "The operating system entropy source is unavailable; pass --seed for a reproducible run or check the host".to_string()
            }
            SimError::WorkerError { .. } => {
                "Retry with --workers 1 to run the simulation on a single thread".to_string()
            }
            SimError::IoError(_) => "Check file paths and permissions".to_string(),
            SimError::SerializationError(_) => "Try the text output format instead".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("Could not complete simulation: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
        }
    }

    /// 依嚴重程度決定的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
