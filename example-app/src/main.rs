//! # 示例应用程序
//!
//! 演示组件扫描、按名称注入和事务代理

mod config;
mod service;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, ConsoleTransactionManager};
use di_abstractions::BeanFactoryExt;
use di_impl::ApplicationContext;
use infrastructure_common::ContainerConfig;
use service::OrderOps;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn IoC 示例应用")]
struct Args {
    /// 容器配置文件路径（TOML），未指定时使用 AppConfig 的扫描路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 环境变量前缀
    #[arg(long, default_value = "LORN_IOC")]
    env_prefix: String,

    /// 日志级别，RUST_LOG 优先
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("启动 Lorn IoC 示例应用");

    let config = load_config(&args)?;
    let context = ApplicationContext::builder()
        .config(config)
        .transaction_manager(Arc::new(ConsoleTransactionManager))
        .build()
        .context("应用上下文启动失败")?;

    let order_service = context
        .get_bean_as::<dyn OrderOps>("orderService")
        .context("获取 orderService 失败")?;
    order_service.test();

    let stats = context.stats();
    info!(
        definitions = stats.registered_definitions,
        singletons = stats.cached_singletons,
        "应用运行完成"
    );
    Ok(())
}

/// 加载容器配置
fn load_config(args: &Args) -> anyhow::Result<ContainerConfig> {
    let config = match &args.config {
        Some(path) => ContainerConfig::from_file(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?,
        None => ContainerConfig::from_configuration::<AppConfig>(),
    };

    Ok(config.with_env_overrides(&args.env_prefix)?)
}
