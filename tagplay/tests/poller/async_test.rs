#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::fixtures::{SAMPLE_TAG, SAMPLE_UID, catalog_for, names, recording_poller};
use tagplay::poller::PollerConfig;
use tagplay::test_support::detection_reply;

#[tokio::test]
async fn spawned_poller_is_handed_back_on_stop() {
    // the mock goes silent after the first reply; keep the loop from resetting
    let config = PollerConfig {
        health_threshold: 1.0,
        ..PollerConfig::default()
    };
    let (poller, rig, dispatches) = recording_poller(catalog_for(SAMPLE_TAG, &["a"]), config);
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));

    let stop = Arc::new(AtomicBool::new(false));
    let handle = poller.spawn(stop.clone());

    // MockDelay returns at once, so wait for the dispatch before stopping
    while names(&dispatches).is_empty() {
        tokio::task::yield_now().await;
    }
    stop.store(true, Ordering::SeqCst);

    let poller = handle.await.unwrap().unwrap();
    assert_eq!(names(&dispatches), vec!["a"]);
    assert_eq!(poller.health().size(), 10);
}
