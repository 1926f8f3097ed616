use clap::Parser;
use efs_cleaner::adapters::{self, EfsFileSystemStore, SageMakerDomainCatalog};
use efs_cleaner::core::ConfigProvider;
use efs_cleaner::utils::{logger, validation::Validate};
use efs_cleaner::{CleanerEngine, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting efs-cleaner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建AWS配置和服務客戶端
    let aws_config = adapters::load_aws_config(config.region.clone()).await;
    if aws_config.region().is_none() {
        tracing::error!("❌ No AWS region configured");
        eprintln!("❌ No AWS region configured; pass --region or set AWS_REGION");
        std::process::exit(1);
    }
    let domains = SageMakerDomainCatalog::new(aws_sdk_sagemaker::Client::new(&aws_config));
    let file_systems = EfsFileSystemStore::new(aws_sdk_efs::Client::new(&aws_config));

    // 創建清理引擎並運行
    let engine = CleanerEngine::new(domains, file_systems, config.drain_policy());

    match engine.run().await {
        Ok(()) => {
            tracing::info!("✅ EFS sweep completed successfully!");
            println!("✅ EFS sweep completed successfully!");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ EFS sweep failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                efs_cleaner::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                efs_cleaner::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                efs_cleaner::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                efs_cleaner::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
