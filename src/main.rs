//! Novelist - 小说写作辅助后端
//!
//! - Domain: novel/, export/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, adapters

use std::sync::Arc;

use novelist::application::LanguageModelPort;
use novelist::config::{load_config, print_config, AppConfig};
use novelist::infrastructure::adapters::{
    default_formatters, FileExportStorage, OllamaClient, OllamaClientConfig,
};
use novelist::infrastructure::http::{AppState, HttpServer, ServerConfig};
use novelist::infrastructure::memory::InMemoryNovelRepository;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},novelist={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：OLLAMA_BASE_URL > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Novelist - 小说写作辅助后端");
    print_config(&config);

    // 导出目录在启动时创建，运行中不再重建
    let export_storage = Arc::new(FileExportStorage::new(&config.export.dir).await?);

    // 内存仓库，进程退出即丢失
    let novel_repo = InMemoryNovelRepository::new().arc();

    // 模型服务客户端
    let llm_config = OllamaClientConfig::new(&config.llm.base_url)
        .with_timeout(config.llm.timeout_secs);
    let llm = Arc::new(OllamaClient::new(llm_config)?);

    if !llm.health_check().await {
        tracing::warn!(
            endpoint = %llm.endpoint(),
            "Model service is not reachable; generation and model listing will fail until it is"
        );
    }

    let formatters = default_formatters(config.export.language.labels());

    // 创建 HTTP 服务器
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if let Some(dir) = config.server.static_files.enabled_dir() {
        server_config = server_config.with_static_dir(dir);
    }
    let state = AppState::new(novel_repo, llm, formatters, export_storage);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
