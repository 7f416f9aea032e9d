#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SAMPLE_TAG, catalog_for, names, recording_poller};
use tagplay::poller::{CycleOutcome, PollerConfig, UnknownTagPolicy};
use tagplay::test_support::detection_reply;

const UNKNOWN: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

#[test]
fn unknown_tag_never_dispatches() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), PollerConfig::default());
    for _ in 0..3 {
        rig.transport.push_reply(detection_reply(&UNKNOWN));
    }

    let outcomes: Vec<CycleOutcome> = (0..3).map(|_| poller.poll_once().unwrap()).collect();
    assert!(matches!(&outcomes[0], CycleOutcome::Unknown(tag) if tag.as_str() == "01020304"));
    // remembered: later cycles are repeats
    assert!(matches!(outcomes[1], CycleOutcome::Repeat(_)));
    assert!(names(&dispatches).is_empty());
}

#[test]
fn forget_policy_reports_every_cycle() {
    let config = PollerConfig {
        unknown_tag: UnknownTagPolicy::Forget,
        ..PollerConfig::default()
    };
    let (mut poller, rig, dispatches) = recording_poller(catalog_for(SAMPLE_TAG, &["a"]), config);
    for _ in 0..3 {
        rig.transport.push_reply(detection_reply(&UNKNOWN));
    }

    for _ in 0..3 {
        assert!(matches!(poller.poll_once().unwrap(), CycleOutcome::Unknown(_)));
    }
    assert!(poller.session().previous().is_none());
    assert!(names(&dispatches).is_empty());
}

#[test]
fn unknown_tag_does_not_count_against_health() {
    let (mut poller, rig, _) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), PollerConfig::default());
    for _ in 0..20 {
        rig.transport.push_reply(detection_reply(&UNKNOWN));
    }
    for _ in 0..20 {
        poller.poll_once().unwrap();
    }
    assert_eq!(poller.health().unhealthy_count(), 0);
}
