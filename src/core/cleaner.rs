use crate::core::teardown::TeardownExecutor;
use crate::core::{domains, scanner};
use crate::core::{DomainCatalog, DrainPolicy, FileSystemStore};
use crate::utils::error::Result;

/// One full sweep: list active domains, flag orphaned file systems, tear each
/// one down in listing order.
pub struct CleanerEngine<D: DomainCatalog, F: FileSystemStore> {
    domains: D,
    file_systems: F,
    drain: DrainPolicy,
}

impl<D: DomainCatalog, F: FileSystemStore> CleanerEngine<D, F> {
    pub fn new(domains: D, file_systems: F, drain: DrainPolicy) -> Self {
        Self {
            domains,
            file_systems,
            drain,
        }
    }

    pub async fn run(&self) -> Result<()> {
        println!("Starting EFS sweep...");

        // Active domains
        println!("Listing SageMaker domains...");
        let active = domains::list_active_domain_arns(&self.domains).await?;
        println!("Found {} active domains", active.len());

        // Orphan scan
        println!("Scanning file systems...");
        let file_systems = self.file_systems.list_file_systems().await?;
        println!("Scanned {} file systems", file_systems.len());
        let orphaned = scanner::find_orphaned_file_systems(file_systems, &active);
        println!("Found {} orphaned file systems", orphaned.len());

        // Teardown, one at a time
        let teardown = TeardownExecutor::new(&self.file_systems, self.drain);
        let mut deleted = 0;
        for file_system in &orphaned {
            println!("Deleting {}...", file_system.id);
            if teardown.delete_file_system(&file_system.id).await {
                deleted += 1;
            }
        }
        println!(
            "Deleted {}/{} orphaned file systems",
            deleted,
            orphaned.len()
        );

        Ok(())
    }
}
