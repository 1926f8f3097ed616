#[cfg(feature = "lambda")]
use crate::core::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::domain::model::DrainTimeoutAction;
#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use std::env;
#[cfg(feature = "lambda")]
use std::time::Duration;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub drain_max_attempts: u32,
    pub drain_interval_secs: u64,
    pub on_drain_timeout: DrainTimeoutAction,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        // A garbled action must not silently become a forced delete.
        let on_drain_timeout = match env::var("ON_DRAIN_TIMEOUT") {
            Ok(value) => value.parse().map_err(|reason| {
                crate::utils::error::CleanerError::InvalidConfigValueError {
                    field: "ON_DRAIN_TIMEOUT".to_string(),
                    value,
                    reason,
                }
            })?,
            Err(_) => DrainTimeoutAction::default(),
        };

        Ok(Self {
            drain_max_attempts: env::var("DRAIN_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .unwrap_or(12),
            drain_interval_secs: env::var("DRAIN_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            on_drain_timeout,
        })
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn drain_max_attempts(&self) -> u32 {
        self.drain_max_attempts
    }

    fn drain_interval(&self) -> Duration {
        Duration::from_secs(self.drain_interval_secs)
    }

    fn on_drain_timeout(&self) -> DrainTimeoutAction {
        self.on_drain_timeout
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        // 驗證輪詢參數
        validate_positive_number("DRAIN_MAX_ATTEMPTS", u64::from(self.drain_max_attempts), 1)?;
        validate_range("DRAIN_INTERVAL_SECONDS", self.drain_interval_secs, 0, 3600)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
