use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// One id per refresh cycle, used to correlate fetch/fallback/publish logs
define_id!(RefreshId);

/// Handle of the profile whose contributions are fetched (e.g. a GitHub login).
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileHandle(String);

impl ProfileHandle {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Profile handle must not be empty".to_string(),
            ));
        }
        if trimmed.contains(['/', '?', '#']) || trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidInput(format!(
                "Profile handle contains forbidden characters: {}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileHandle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProfileHandle> for String {
    fn from(handle: ProfileHandle) -> Self {
        handle.0
    }
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Data (4xxx)
    SerializationError = 4004,

    // Infrastructure (5xxx)
    NetworkError = 5002,
    TimeoutError = 5003,
    ExternalServiceError = 5004,
    ConfigurationError = 5005,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::NetworkError
            | ErrorCode::TimeoutError
            | ErrorCode::ExternalServiceError
            | ErrorCode::SerializationError => ErrorSeverity::Warning,

            ErrorCode::ValidationError | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::ConfigurationError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError | ErrorCode::TimeoutError | ErrorCode::ExternalServiceError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("External service responded with status {status}: {message}")]
    ExternalService { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Network(_) => ErrorCode::NetworkError,
            DomainError::Timeout(_) => ErrorCode::TimeoutError,
            DomainError::ExternalService { .. } => ErrorCode::ExternalServiceError,
            DomainError::Deserialization(_) => ErrorCode::SerializationError,
            DomainError::Configuration(_) => ErrorCode::ConfigurationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Network(msg)
            | DomainError::Timeout(msg)
            | DomainError::Deserialization(msg)
            | DomainError::Configuration(msg) => msg,
            DomainError::ExternalService { message, .. } => message,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
