use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Tag key SageMaker stamps on the EFS volumes it provisions; the value is
/// the ARN of the owning domain.
pub const OWNERSHIP_TAG_KEY: &str = "ManagedByAmazonSageMakerResource";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystem {
    pub id: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget {
    pub id: String,
}

/// What to do with a file system whose mount targets never drained within
/// the polling budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrainTimeoutAction {
    /// Delete the file system anyway. EFS may still reject the call while
    /// mount targets linger; that failure is handled like any other.
    #[default]
    Force,
    /// Give up on this file system and leave it for the next scheduled run.
    Fail,
}

impl FromStr for DrainTimeoutAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "force" => Ok(DrainTimeoutAction::Force),
            "fail" => Ok(DrainTimeoutAction::Fail),
            other => Err(format!(
                "unknown drain timeout action '{}': expected 'force' or 'fail'",
                other
            )),
        }
    }
}

impl fmt::Display for DrainTimeoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrainTimeoutAction::Force => write!(f, "force"),
            DrainTimeoutAction::Fail => write!(f, "fail"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    pub on_timeout: DrainTimeoutAction,
}

impl DrainPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 12;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
}

impl Default for DrainPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            interval: Self::DEFAULT_INTERVAL,
            on_timeout: DrainTimeoutAction::Force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_timeout_action_from_str() {
        assert_eq!("force".parse(), Ok(DrainTimeoutAction::Force));
        assert_eq!("fail".parse(), Ok(DrainTimeoutAction::Fail));
        assert_eq!(" Force ".parse(), Ok(DrainTimeoutAction::Force));
        assert!("abort".parse::<DrainTimeoutAction>().is_err());
        assert!("".parse::<DrainTimeoutAction>().is_err());
    }

    #[test]
    fn test_drain_policy_defaults() {
        let policy = DrainPolicy::default();
        assert_eq!(policy.max_attempts, 12);
        assert_eq!(policy.interval, Duration::from_secs(5));
        assert_eq!(policy.on_timeout, DrainTimeoutAction::Force);
    }
}
