use crate::core::{DrainPolicy, DrainTimeoutAction, FileSystemStore};
use crate::utils::error::{CleanerError, Result};

/// Deletes one file system at a time: mount targets first, then a poll loop
/// until the service stops reporting them, then the file system itself.
pub struct TeardownExecutor<'a, F: FileSystemStore> {
    store: &'a F,
    drain: DrainPolicy,
}

impl<'a, F: FileSystemStore> TeardownExecutor<'a, F> {
    pub fn new(store: &'a F, drain: DrainPolicy) -> Self {
        Self { store, drain }
    }

    /// Tears down a single file system. Any failure is logged and reported as
    /// `false` so a sweep can move on to the next candidate.
    pub async fn delete_file_system(&self, file_system_id: &str) -> bool {
        match self.try_delete(file_system_id).await {
            Ok(()) => {
                tracing::info!("✅ EFS {} is completely deleted", file_system_id);
                true
            }
            Err(e) => {
                tracing::error!("❌ EFS deletion failed for {}: {}", file_system_id, e);
                false
            }
        }
    }

    async fn try_delete(&self, file_system_id: &str) -> Result<()> {
        let mount_targets = self.store.list_mount_targets(file_system_id).await?;
        tracing::debug!(
            "Found {} mount targets on {}",
            mount_targets.len(),
            file_system_id
        );

        for mount_target in &mount_targets {
            self.store.delete_mount_target(&mount_target.id).await?;
            tracing::debug!("Deleted mount target {}", mount_target.id);
        }

        self.wait_for_drain(file_system_id).await?;

        self.store.delete_file_system(file_system_id).await?;
        Ok(())
    }

    // DeleteMountTarget returns before the attachment is really gone, and
    // DeleteFileSystem rejects a file system that still has mount targets.
    // Poll until the service reports none.
    async fn wait_for_drain(&self, file_system_id: &str) -> Result<()> {
        for attempt in 1..=self.drain.max_attempts {
            let remaining = self.store.list_mount_targets(file_system_id).await?;
            if remaining.is_empty() {
                return Ok(());
            }
            tracing::debug!(
                "{} mount targets still attached to {} (poll {}/{})",
                remaining.len(),
                file_system_id,
                attempt,
                self.drain.max_attempts
            );
            if attempt < self.drain.max_attempts {
                tokio::time::sleep(self.drain.interval).await;
            }
        }

        match self.drain.on_timeout {
            DrainTimeoutAction::Force => {
                tracing::warn!(
                    "Mount targets of {} still reported after {} polls, deleting anyway",
                    file_system_id,
                    self.drain.max_attempts
                );
                Ok(())
            }
            DrainTimeoutAction::Fail => Err(CleanerError::DrainTimeoutError {
                file_system_id: file_system_id.to_string(),
                attempts: self.drain.max_attempts,
            }),
        }
    }
}
