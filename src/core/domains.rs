use crate::core::DomainCatalog;
use crate::utils::error::Result;
use std::collections::HashSet;

/// Collects the ARN of every SageMaker domain that currently exists.
///
/// A file system whose ownership tag names one of these ARNs is still in use
/// and must be left alone.
pub async fn list_active_domain_arns<C: DomainCatalog>(catalog: &C) -> Result<HashSet<String>> {
    let arns = catalog.list_domain_arns().await?;
    tracing::debug!("Found {} active SageMaker domains", arns.len());
    Ok(arns.into_iter().collect())
}
