//! 并发获取 Bean 集成测试

use di_abstractions::{BeanFactory, BeanFactoryExt};
use di_impl::ApplicationContext;
use infrastructure_common::{BeanObject, ContainerConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static SLOW_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

mod slow {
    use super::SLOW_CONSTRUCTIONS;
    use component_macros::Component;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[derive(Debug, Component)]
    #[component]
    #[lazy]
    pub struct SlowService {
        pub serial: usize,
    }

    impl Default for SlowService {
        fn default() -> Self {
            std::thread::sleep(Duration::from_millis(20));
            Self {
                serial: SLOW_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1,
            }
        }
    }
}

mod jobs {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component]
    #[lazy]
    pub struct Ledger;

    #[derive(Debug, Default, Component)]
    #[component]
    #[scope("prototype")]
    pub struct Job {
        #[autowired]
        pub ledger: Autowired<Ledger>,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_lookup_creates_one_instance() -> anyhow::Result<()> {
    let context = ApplicationContext::new(ContainerConfig::for_package("concurrency.slow"))?;
    assert!(!context.contains_singleton("slowService"));

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let context = Arc::clone(&context);
            tokio::task::spawn_blocking(move || context.get_bean("slowService"))
        })
        .collect();

    let mut beans = Vec::new();
    for handle in handles {
        beans.push(handle.await??);
    }

    for bean in &beans[1..] {
        assert!(BeanObject::ptr_eq(&beans[0], bean));
    }
    assert_eq!(SLOW_CONSTRUCTIONS.load(Ordering::SeqCst), 1);

    let service = beans[0].downcast::<slow::SlowService>()?;
    assert_eq!(service.serial, 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_prototypes_share_singleton_dependency() -> anyhow::Result<()> {
    let context = ApplicationContext::new(ContainerConfig::for_package("concurrency.jobs"))?;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let context = Arc::clone(&context);
            tokio::task::spawn_blocking(move || context.get_bean_as::<jobs::Job>("job"))
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await??);
    }

    let ledger = context.get_bean_as::<jobs::Ledger>("ledger")?;
    for (index, job) in created.iter().enumerate() {
        assert!(Arc::ptr_eq(job.ledger.get().unwrap(), &ledger));
        for other in &created[index + 1..] {
            assert!(!Arc::ptr_eq(job, other));
        }
    }
    Ok(())
}
