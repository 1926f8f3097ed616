use async_trait::async_trait;
use efs_cleaner::core::{
    DomainCatalog, DrainPolicy, FileSystem, FileSystemStore, MountTarget, Result, Tag,
    OWNERSHIP_TAG_KEY,
};
use efs_cleaner::CleanerEngine;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

struct FixedCatalog {
    arns: Vec<String>,
}

#[async_trait]
impl DomainCatalog for FixedCatalog {
    async fn list_domain_arns(&self) -> Result<Vec<String>> {
        Ok(self.arns.clone())
    }
}

/// In-memory file system service that records every call it serves.
#[derive(Clone)]
struct RecordingStore {
    file_systems: Arc<Mutex<Vec<FileSystem>>>,
    mount_targets: Arc<Mutex<HashMap<String, Vec<MountTarget>>>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingStore {
    fn new(file_systems: Vec<FileSystem>, mount_targets: Vec<(&str, &str)>) -> Self {
        let mut by_file_system: HashMap<String, Vec<MountTarget>> = HashMap::new();
        for (file_system_id, mount_target_id) in mount_targets {
            by_file_system
                .entry(file_system_id.to_string())
                .or_default()
                .push(MountTarget {
                    id: mount_target_id.to_string(),
                });
        }
        Self {
            file_systems: Arc::new(Mutex::new(file_systems)),
            mount_targets: Arc::new(Mutex::new(by_file_system)),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn events(&self) -> Vec<String> {
        self.events.lock().await.clone()
    }
}

impl FileSystemStore for RecordingStore {
    async fn list_file_systems(&self) -> Result<Vec<FileSystem>> {
        self.events.lock().await.push("list-fs".to_string());
        Ok(self.file_systems.lock().await.clone())
    }

    async fn list_mount_targets(&self, file_system_id: &str) -> Result<Vec<MountTarget>> {
        self.events
            .lock()
            .await
            .push(format!("list-mt {}", file_system_id));
        let mount_targets = self.mount_targets.lock().await;
        Ok(mount_targets.get(file_system_id).cloned().unwrap_or_default())
    }

    async fn delete_mount_target(&self, mount_target_id: &str) -> Result<()> {
        self.events
            .lock()
            .await
            .push(format!("del-mt {}", mount_target_id));
        let mut mount_targets = self.mount_targets.lock().await;
        for attached in mount_targets.values_mut() {
            attached.retain(|mount_target| mount_target.id != mount_target_id);
        }
        Ok(())
    }

    async fn delete_file_system(&self, file_system_id: &str) -> Result<()> {
        self.events
            .lock()
            .await
            .push(format!("del-fs {}", file_system_id));
        let mut file_systems = self.file_systems.lock().await;
        file_systems.retain(|file_system| file_system.id != file_system_id);
        Ok(())
    }
}

fn tagged(id: &str, domain_arn: &str) -> FileSystem {
    FileSystem {
        id: id.to_string(),
        tags: vec![Tag {
            key: OWNERSHIP_TAG_KEY.to_string(),
            value: domain_arn.to_string(),
        }],
    }
}

fn untagged(id: &str) -> FileSystem {
    FileSystem {
        id: id.to_string(),
        tags: vec![Tag {
            key: "Name".to_string(),
            value: "shared-data".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_sweep_removes_only_file_systems_of_deleted_domains() {
    let catalog = FixedCatalog {
        arns: vec!["arn:alive".to_string()],
    };
    let store = RecordingStore::new(
        vec![
            tagged("fs-active", "arn:alive"),
            tagged("fs-orphan", "arn:gone"),
            untagged("fs-shared"),
        ],
        vec![("fs-orphan", "mt-1")],
    );

    let engine = CleanerEngine::new(catalog, store.clone(), DrainPolicy::default());
    engine.run().await.unwrap();

    let events = store.events().await;
    assert_eq!(
        events,
        vec![
            "list-fs",
            "list-mt fs-orphan",
            "del-mt mt-1",
            "list-mt fs-orphan",
            "del-fs fs-orphan",
        ]
    );

    // The surviving file systems are untouched.
    let remaining = store.file_systems.lock().await;
    let ids: Vec<&str> = remaining.iter().map(|fs| fs.id.as_str()).collect();
    assert_eq!(ids, vec!["fs-active", "fs-shared"]);
}

#[tokio::test]
async fn test_orphans_are_torn_down_in_listing_order() {
    let catalog = FixedCatalog { arns: vec![] };
    let store = RecordingStore::new(
        vec![
            tagged("fs-c", "arn:gone"),
            tagged("fs-a", "arn:gone"),
            tagged("fs-b", "arn:gone"),
        ],
        vec![],
    );

    let engine = CleanerEngine::new(catalog, store.clone(), DrainPolicy::default());
    engine.run().await.unwrap();

    let deletions: Vec<String> = store
        .events()
        .await
        .into_iter()
        .filter(|event| event.starts_with("del-fs"))
        .collect();
    assert_eq!(deletions, vec!["del-fs fs-c", "del-fs fs-a", "del-fs fs-b"]);
}

#[tokio::test]
async fn test_second_sweep_finds_nothing_left_to_do() {
    let catalog = FixedCatalog { arns: vec![] };
    let store = RecordingStore::new(vec![tagged("fs-orphan", "arn:gone")], vec![]);

    let engine = CleanerEngine::new(catalog, store.clone(), DrainPolicy::default());
    engine.run().await.unwrap();
    engine.run().await.unwrap();

    let deletions: Vec<String> = store
        .events()
        .await
        .into_iter()
        .filter(|event| event.starts_with("del-fs"))
        .collect();
    assert_eq!(deletions, vec!["del-fs fs-orphan"]);
}
