pub mod efs;
pub mod sagemaker;

pub use efs::EfsFileSystemStore;
pub use sagemaker::SageMakerDomainCatalog;

use aws_config::{BehaviorVersion, Region};

/// Shared AWS configuration for every service client. An explicit region
/// overrides whatever the provider chain would resolve.
pub async fn load_aws_config(region: Option<String>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    loader.load().await
}
