use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serverless_bridge::api::response::ResponseWriter;
use serverless_bridge::app::{ApplicationLoader, Handler, LoaderState, factory_fn};
use serverless_bridge::core::models::ProxyRequest;

struct Noop;

#[async_trait]
impl Handler for Noop {
    async fn call(&self, _req: &ProxyRequest, res: &mut ResponseWriter) -> anyhow::Result<()> {
        res.send("");
        Ok(())
    }
}

#[tokio::test]
async fn test_load_error_leaves_loader_uninitialized() {
    let loader = ApplicationLoader::new(factory_fn(|| async {
        Err::<Arc<dyn Handler>, _>(anyhow::anyhow!("no such module"))
    }));

    let err = match loader.get_application().await {
        Ok(_) => panic!("load should fail"),
        Err(e) => e,
    };

    assert!(err.is_load());
    assert_eq!(err.message(), "no such module");
    assert_eq!(loader.state(), LoaderState::Uninitialized);
}

#[tokio::test]
async fn test_every_failed_attempt_loads_again() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let loader = ApplicationLoader::new(factory_fn(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Err::<Arc<dyn Handler>, _>(anyhow::anyhow!("still broken")) }
    }));

    for _ in 0..3 {
        assert!(loader.get_application().await.is_err());
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_loader_caches_first_success() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let loader = ApplicationLoader::new(factory_fn(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, anyhow::Error>(Arc::new(Noop) as Arc<dyn Handler>) }
    }));

    assert!(loader.get_application().await.is_ok());
    assert!(loader.get_application().await.is_ok());

    assert_eq!(loader.state(), LoaderState::Ready);
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
