use component_macros::{interceptable, Component, Configuration};
use di_abstractions::ComponentClass;
use infrastructure_common::{Autowired, ScanConfiguration};

#[derive(Debug, Default, Component)]
#[component]
pub struct UserService;

#[interceptable]
pub trait OrderOps: Send + Sync {
    fn test(&self);
}

#[derive(Debug, Default, Component)]
#[component("orderService")]
#[transactional(dyn OrderOps)]
pub struct OrderService {
    #[autowired]
    user_service: Autowired<UserService>,
}

impl OrderOps for OrderService {
    fn test(&self) {
        let _ = &self.user_service;
    }
}

#[derive(Configuration)]
#[component_scan("app.service")]
struct AppConfig;

fn main() {
    let descriptor = OrderService::class_descriptor();
    assert_eq!(descriptor.component().unwrap().name, "orderService");
    assert!(descriptor.is_transactional());
    assert_eq!(descriptor.injection_points()[0].bean_name, "userService");
    assert_eq!(AppConfig::component_scan(), Some("app.service"));
}
