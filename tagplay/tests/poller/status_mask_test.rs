#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SAMPLE_TAG, SAMPLE_UID, catalog_for, names, recording_poller};
use tagplay::Status;
use tagplay::poller::{CycleOutcome, PollerConfig};
use tagplay::test_support::{detection_reply, with_noisy_ack};

fn masked(mask: u8) -> PollerConfig {
    PollerConfig {
        status_mask: mask,
        ..PollerConfig::default()
    }
}

#[test]
fn exact_ok_policy_skips_detection_behind_noisy_ack() {
    let (mut poller, rig, dispatches) = recording_poller(catalog_for(SAMPLE_TAG, &["a"]), masked(0xff));
    rig.transport
        .push_reply(with_noisy_ack(detection_reply(&SAMPLE_UID)));

    let outcome = poller.poll_once().unwrap();
    assert_eq!(outcome, CycleOutcome::NoTag(Status::ACK_ERROR));
    assert!(names(&dispatches).is_empty());
}

#[test]
fn timeout_only_policy_dispatches_detection_behind_noisy_ack() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), masked(Status::TIMEOUT.bits()));
    rig.transport
        .push_reply(with_noisy_ack(detection_reply(&SAMPLE_UID)));

    let outcome = poller.poll_once().unwrap();
    assert!(matches!(outcome, CycleOutcome::Dispatched { index: 0, .. }));
    assert_eq!(names(&dispatches), vec!["a"]);
    // still counted against chip health
    assert_eq!(poller.health().unhealthy_count(), 1);
}

#[test]
fn timeout_only_policy_still_needs_a_uid() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), masked(Status::TIMEOUT.bits()));
    rig.transport
        .push_reply(with_noisy_ack(detection_reply(&[1, 2, 3, 4, 5, 6, 7, 8])));

    assert!(matches!(poller.poll_once().unwrap(), CycleOutcome::NoTag(_)));
    assert!(names(&dispatches).is_empty());
}
