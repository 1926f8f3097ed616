use crate::domain::model::{FileSystem, MountTarget, Tag};
use crate::domain::ports::FileSystemStore;
use crate::utils::error::Result;
use aws_sdk_efs::types::FileSystemDescription;
use aws_sdk_efs::Client as EfsClient;

#[derive(Debug, Clone)]
pub struct EfsFileSystemStore {
    client: EfsClient,
}

impl EfsFileSystemStore {
    pub fn new(client: EfsClient) -> Self {
        Self { client }
    }
}

fn to_file_system(description: &FileSystemDescription) -> FileSystem {
    FileSystem {
        id: description.file_system_id().to_string(),
        tags: description
            .tags()
            .iter()
            .map(|tag| Tag {
                key: tag.key().to_string(),
                value: tag.value().to_string(),
            })
            .collect(),
    }
}

impl FileSystemStore for EfsFileSystemStore {
    async fn list_file_systems(&self) -> Result<Vec<FileSystem>> {
        let mut pages = self.client.describe_file_systems().into_paginator().send();
        let mut file_systems = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(aws_sdk_efs::Error::from)?;
            file_systems.extend(page.file_systems().iter().map(to_file_system));
        }
        tracing::debug!("DescribeFileSystems returned {} entries", file_systems.len());
        Ok(file_systems)
    }

    async fn list_mount_targets(&self, file_system_id: &str) -> Result<Vec<MountTarget>> {
        let mut pages = self
            .client
            .describe_mount_targets()
            .file_system_id(file_system_id)
            .into_paginator()
            .send();
        let mut mount_targets = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(aws_sdk_efs::Error::from)?;
            mount_targets.extend(page.mount_targets().iter().map(|description| MountTarget {
                id: description.mount_target_id().to_string(),
            }));
        }
        Ok(mount_targets)
    }

    async fn delete_mount_target(&self, mount_target_id: &str) -> Result<()> {
        self.client
            .delete_mount_target()
            .mount_target_id(mount_target_id)
            .send()
            .await
            .map_err(aws_sdk_efs::Error::from)?;
        Ok(())
    }

    async fn delete_file_system(&self, file_system_id: &str) -> Result<()> {
        self.client
            .delete_file_system()
            .file_system_id(file_system_id)
            .send()
            .await
            .map_err(aws_sdk_efs::Error::from)?;
        Ok(())
    }
}
