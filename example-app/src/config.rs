//! 应用配置

use component_macros::Configuration;
use di_impl::TransactionManager;
use infrastructure_common::MethodInvocation;

/// 应用配置类
#[derive(Debug, Configuration)]
#[component_scan("example_app.service")]
pub struct AppConfig;

/// 把事务边界打印到标准输出
#[derive(Debug, Default)]
pub struct ConsoleTransactionManager;

impl TransactionManager for ConsoleTransactionManager {
    fn begin(&self, _invocation: &MethodInvocation<'_>) {
        println!("begin");
    }

    fn commit(&self, _invocation: &MethodInvocation<'_>) {
        println!("commit");
    }
}
