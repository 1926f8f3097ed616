use crate::core::{FileSystem, OWNERSHIP_TAG_KEY};
use std::collections::HashSet;

/// A file system is orphaned when it carries the SageMaker ownership tag and
/// the domain named by that tag no longer exists. File systems without the
/// tag do not belong to SageMaker and are never candidates.
pub fn is_orphaned(file_system: &FileSystem, active_domain_arns: &HashSet<String>) -> bool {
    file_system
        .tags
        .iter()
        .any(|tag| tag.key == OWNERSHIP_TAG_KEY && !active_domain_arns.contains(&tag.value))
}

pub fn find_orphaned_file_systems(
    file_systems: Vec<FileSystem>,
    active_domain_arns: &HashSet<String>,
) -> Vec<FileSystem> {
    file_systems
        .into_iter()
        .filter(|file_system| is_orphaned(file_system, active_domain_arns))
        .collect()
}
