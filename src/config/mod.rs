pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::DrainTimeoutAction;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "efs-cleaner")]
#[command(about = "Deletes EFS file systems orphaned by deleted SageMaker domains")]
pub struct CliConfig {
    /// AWS region; falls back to the ambient provider chain when omitted
    #[arg(long)]
    pub region: Option<String>,

    #[arg(long, default_value = "12")]
    pub drain_max_attempts: u32,

    #[arg(long, default_value = "5")]
    pub drain_interval_secs: u64,

    #[arg(long, default_value = "force")]
    pub on_drain_timeout: DrainTimeoutAction,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
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

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        // 驗證區域
        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        // 驗證輪詢參數
        validate_positive_number("drain-max-attempts", u64::from(self.drain_max_attempts), 1)?;
        validate_range("drain-interval-secs", self.drain_interval_secs, 0, 3600)?;

        Ok(())
    }
}
