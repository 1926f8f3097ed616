use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("SageMaker API error: {0}")]
    SageMakerError(#[from] aws_sdk_sagemaker::Error),

    #[error("EFS API error: {0}")]
    EfsError(#[from] aws_sdk_efs::Error),

    #[error("Mount targets for {file_system_id} still present after {attempts} polls")]
    DrainTimeoutError {
        file_system_id: String,
        attempts: u32,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CleanerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    AwsService,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CleanerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CleanerError::SageMakerError(_)
            | CleanerError::EfsError(_)
            | CleanerError::DrainTimeoutError { .. } => ErrorCategory::AwsService,
            CleanerError::ConfigError { .. } | CleanerError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
            CleanerError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 服務錯誤交給下一次排程重試
            CleanerError::SageMakerError(_)
            | CleanerError::EfsError(_)
            | CleanerError::DrainTimeoutError { .. } => ErrorSeverity::Medium,
            CleanerError::ConfigError { .. } | CleanerError::MissingConfigError { .. } => {
                ErrorSeverity::Critical
            }
            CleanerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CleanerError::SageMakerError(_) => {
                "Check AWS credentials and the sagemaker:List* permission; the next scheduled run will retry".to_string()
            }
            CleanerError::EfsError(_) => {
                "Check the elasticfilesystem:Describe*/Delete* permissions and service health; the next scheduled run will retry".to_string()
            }
            CleanerError::DrainTimeoutError { .. } => {
                "Raise --drain-max-attempts / --drain-interval-secs, or use --on-drain-timeout force to delete anyway".to_string()
            }
            CleanerError::ConfigError { .. } | CleanerError::MissingConfigError { .. } => {
                "Fix the environment configuration and re-run".to_string()
            }
            CleanerError::InvalidConfigValueError { .. } => {
                "Correct the flag or environment variable value and re-run".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanerError::SageMakerError(e) => format!("Could not list SageMaker domains: {}", e),
            CleanerError::EfsError(e) => format!("EFS request failed: {}", e),
            CleanerError::DrainTimeoutError {
                file_system_id,
                attempts,
            } => format!(
                "Gave up waiting for mount targets of {} after {} polls",
                file_system_id, attempts
            ),
            CleanerError::ConfigError { message } => format!("Configuration problem: {}", message),
            CleanerError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            CleanerError::InvalidConfigValueError { field, value, .. } => {
                format!("Invalid value '{}' for {}", value, field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let e = CleanerError::DrainTimeoutError {
            file_system_id: "fs-123".to_string(),
            attempts: 12,
        };
        assert_eq!(e.severity(), ErrorSeverity::Medium);
        assert_eq!(e.category(), ErrorCategory::AwsService);

        let e = CleanerError::MissingConfigError {
            field: "DRAIN_MAX_ATTEMPTS".to_string(),
        };
        assert_eq!(e.severity(), ErrorSeverity::Critical);
        assert_eq!(e.category(), ErrorCategory::Configuration);

        let e = CleanerError::InvalidConfigValueError {
            field: "drain_interval_secs".to_string(),
            value: "-1".to_string(),
            reason: "must be a non-negative number".to_string(),
        };
        assert_eq!(e.severity(), ErrorSeverity::High);
        assert_eq!(e.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_messages_name_the_resource() {
        let e = CleanerError::DrainTimeoutError {
            file_system_id: "fs-0123456789abcdef0".to_string(),
            attempts: 12,
        };
        assert!(e.to_string().contains("fs-0123456789abcdef0"));
        assert!(e.user_friendly_message().contains("12 polls"));
        assert!(!e.recovery_suggestion().is_empty());
    }
}
