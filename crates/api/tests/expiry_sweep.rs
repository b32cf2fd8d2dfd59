//! Tests for the background expiry sweep task.

use std::sync::Arc;
use std::time::Duration;

use scriptbox_api::background::expiry_sweep;
use scriptbox_core::clock::ManualClock;
use scriptbox_core::store::ScriptStore;
use tokio_util::sync::CancellationToken;

/// Poll `check` until it holds or the deadline passes.
async fn wait_until(mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

#[tokio::test]
async fn sweep_task_purges_expired_scripts_without_requests() {
    let clock = Arc::new(ManualClock::default());
    let store = Arc::new(ScriptStore::with_clock(clock.clone()));
    store.submit("old".into(), None).unwrap();
    store.submit("older".into(), Some("p".into())).unwrap();

    let cancel = CancellationToken::new();
    let handle = tokio::spawn(expiry_sweep::run(
        Arc::clone(&store),
        Duration::from_millis(20),
        cancel.clone(),
    ));

    // Nothing is old enough yet.
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(store.count(), 2);

    clock.advance(chrono::Duration::seconds(301));
    assert!(
        wait_until(|| store.count() == 0).await,
        "background sweep should purge expired scripts"
    );

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("sweep task should stop after cancellation")
        .unwrap();
}

#[tokio::test]
async fn sweep_task_stops_on_cancel() {
    let store = Arc::new(ScriptStore::new());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let handle = tokio::spawn(expiry_sweep::run(
        Arc::clone(&store),
        Duration::from_secs(3600),
        cancel,
    ));

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("sweep task should exit immediately when already cancelled")
        .unwrap();
}
