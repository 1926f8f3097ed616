use crate::domain::model::{DrainPolicy, DrainTimeoutAction, FileSystem, MountTarget};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read/write access to the elastic file system service.
pub trait FileSystemStore: Send + Sync {
    fn list_file_systems(&self)
        -> impl std::future::Future<Output = Result<Vec<FileSystem>>> + Send;
    fn list_mount_targets(
        &self,
        file_system_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<MountTarget>>> + Send;
    fn delete_mount_target(
        &self,
        mount_target_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn delete_file_system(
        &self,
        file_system_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Read-only view of the SageMaker control plane.
#[async_trait]
pub trait DomainCatalog: Send + Sync {
    async fn list_domain_arns(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn drain_max_attempts(&self) -> u32;
    fn drain_interval(&self) -> Duration;
    fn on_drain_timeout(&self) -> DrainTimeoutAction;

    fn drain_policy(&self) -> DrainPolicy {
        DrainPolicy {
            max_attempts: self.drain_max_attempts(),
            interval: self.drain_interval(),
            on_timeout: self.on_drain_timeout(),
        }
    }
}
