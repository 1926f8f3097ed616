use crate::domain::ports::DomainCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use aws_sdk_sagemaker::Client as SageMakerClient;

#[derive(Debug, Clone)]
pub struct SageMakerDomainCatalog {
    client: SageMakerClient,
}

impl SageMakerDomainCatalog {
    pub fn new(client: SageMakerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DomainCatalog for SageMakerDomainCatalog {
    async fn list_domain_arns(&self) -> Result<Vec<String>> {
        let mut pages = self.client.list_domains().into_paginator().send();
        let mut arns = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(aws_sdk_sagemaker::Error::from)?;
            arns.extend(
                page.domains()
                    .iter()
                    .filter_map(|domain| domain.domain_arn().map(str::to_string)),
            );
        }
        tracing::debug!("ListDomains returned {} entries", arns.len());
        Ok(arns)
    }
}
