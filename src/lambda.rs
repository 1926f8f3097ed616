#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use efs_cleaner::adapters::{EfsFileSystemStore, SageMakerDomainCatalog};
#[cfg(feature = "lambda")]
use efs_cleaner::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use efs_cleaner::core::{cleaner::CleanerEngine, ConfigProvider};
#[cfg(feature = "lambda")]
use efs_cleaner::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Serialize;
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    tracing::info!("Starting EFS cleanup Lambda function");
    // Scheduler payloads carry nothing this sweep needs
    tracing::debug!("Ignoring event payload: {}", event.payload);

    // 創建Lambda配置
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // 創建AWS配置和服務客戶端
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let domains = SageMakerDomainCatalog::new(aws_sdk_sagemaker::Client::new(&aws_config));
    let file_systems = EfsFileSystemStore::new(aws_sdk_efs::Client::new(&aws_config));

    // 運行清理
    let engine = CleanerEngine::new(domains, file_systems, config.drain_policy());
    engine
        .run()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("EFS cleanup Lambda function completed successfully");
    Ok(Response {
        message: "EFS sweep completed successfully".to_string(),
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
