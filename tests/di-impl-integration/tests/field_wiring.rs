//! 字段注入集成测试
//!
//! 覆盖按字段标识符精确匹配 Bean 名称，以及把事务代理注入到其他 Bean 的字段中

use di_abstractions::{BeanFactory, BeanFactoryExt};
use di_impl::{ApplicationContext, TransactionManager};
use infrastructure_common::MethodInvocation;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;

static EVENTS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn emit(event: impl Into<String>) {
    EVENTS.lock().push(event.into());
}

mod exact {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component("user_service")]
    pub struct UserService;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct OrderService {
        #[autowired]
        pub user_service: Autowired<UserService>,
    }
}

mod checkout {
    use super::emit;
    use component_macros::{interceptable, Component};
    use infrastructure_common::Autowired;

    #[interceptable]
    pub trait OrderOps: Send + Sync {
        fn place_order(&self, item: &str) -> String;
    }

    #[derive(Debug, Default, Component)]
    #[component]
    #[transactional(dyn OrderOps)]
    pub struct OrderService;

    impl OrderOps for OrderService {
        fn place_order(&self, item: &str) -> String {
            emit(format!("place_order {item}"));
            format!("order:{item}")
        }
    }

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct Checkout {
        #[autowired]
        pub order_service: Autowired<dyn OrderOps>,
    }
}

use checkout::OrderOps;

struct EventTransactions;

impl TransactionManager for EventTransactions {
    fn begin(&self, invocation: &MethodInvocation<'_>) {
        emit(format!("begin {}", invocation.method));
    }

    fn commit(&self, invocation: &MethodInvocation<'_>) {
        emit(format!("commit {}", invocation.method));
    }
}

#[test]
fn test_field_identifier_matches_bean_name_exactly() -> anyhow::Result<()> {
    let context = ApplicationContext::builder()
        .component_scan("field_wiring.exact")
        .build()?;

    assert!(context.contains_bean("user_service"));
    assert!(!context.contains_bean("userService"));

    let user_service = context.get_bean_as::<exact::UserService>("user_service")?;
    let order_service = context.get_bean_as::<exact::OrderService>("orderService")?;
    assert!(Arc::ptr_eq(
        order_service.user_service.get().unwrap(),
        &user_service
    ));
    Ok(())
}

#[test]
fn test_proxy_injected_into_field_runs_in_transaction() -> anyhow::Result<()> {
    let context = ApplicationContext::builder()
        .component_scan("field_wiring.checkout")
        .transaction_manager(Arc::new(EventTransactions))
        .build()?;

    let checkout = context.get_bean_as::<checkout::Checkout>("checkout")?;
    let order_service = context.get_bean_as::<dyn OrderOps>("orderService")?;
    assert!(Arc::ptr_eq(
        checkout.order_service.get().unwrap(),
        &order_service
    ));

    EVENTS.lock().clear();
    let result = checkout.order_service.place_order("book");

    assert_eq!(result, "order:book");
    assert_eq!(
        *EVENTS.lock(),
        vec![
            "begin place_order".to_string(),
            "place_order book".to_string(),
            "commit place_order".to_string(),
        ]
    );
    Ok(())
}
