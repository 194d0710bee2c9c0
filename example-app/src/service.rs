//! 示例服务

use component_macros::{interceptable, Component};
use infrastructure_common::Autowired;

/// 用户服务
#[derive(Debug, Default, Component)]
#[component]
pub struct UserService;

/// 订单操作
#[interceptable]
pub trait OrderOps: Send + Sync {
    /// 演示方法，在事务中执行
    fn test(&self);
}

/// 订单服务
#[derive(Debug, Default, Component)]
#[component]
#[transactional(dyn OrderOps)]
pub struct OrderService {
    #[autowired]
    user_service: Autowired<UserService>,
}

impl OrderOps for OrderService {
    fn test(&self) {
        println!("OrderService.test: userService={:?}", self.user_service);
    }
}
