#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SAMPLE_TAG, SAMPLE_UID, catalog_for, names, recording_poller};
use tagplay::poller::{CycleOutcome, PollerConfig};
use tagplay::test_support::{detection_reply, idle_reply};

#[test]
fn same_tag_dispatches_once() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), PollerConfig::default());
    for _ in 0..10 {
        rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    }

    for _ in 0..10 {
        poller.poll_once().unwrap();
    }
    assert_eq!(names(&dispatches), vec!["a"]);
    assert_eq!(poller.session().previous().unwrap().as_str(), SAMPLE_TAG);
}

#[test]
fn removal_then_represent_dispatches_again() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), PollerConfig::default());
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    rig.transport.push_reply(idle_reply());
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));

    let outcomes: Vec<CycleOutcome> = (0..4).map(|_| poller.poll_once().unwrap()).collect();
    assert!(matches!(outcomes[0], CycleOutcome::Dispatched { .. }));
    assert!(matches!(outcomes[1], CycleOutcome::Repeat(_)));
    assert!(matches!(outcomes[2], CycleOutcome::NoTag(s) if s == tagplay::Status::TIMEOUT));
    assert!(matches!(outcomes[3], CycleOutcome::Dispatched { .. }));
    assert_eq!(names(&dispatches).len(), 2);
}

#[test]
fn read_failure_also_ends_presentation() {
    let (mut poller, rig, dispatches) =
        recording_poller(catalog_for(SAMPLE_TAG, &["a"]), PollerConfig::default());
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    rig.transport.push_silence();
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));

    for _ in 0..3 {
        poller.poll_once().unwrap();
    }
    assert_eq!(names(&dispatches).len(), 2);
}

#[test]
fn switching_tags_dispatches_each() {
    let mut catalog = catalog_for(SAMPLE_TAG, &["a"]);
    catalog
        .insert(
            tagplay::TagId::parse("deadbeef").unwrap(),
            tagplay::catalog::TagEntry {
                tracks: vec![common::fixtures::item("b")],
            },
        )
        .unwrap();
    let (mut poller, rig, dispatches) = recording_poller(catalog, PollerConfig::default());
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    rig.transport.push_reply(detection_reply(&[0xde, 0xad, 0xbe, 0xef]));
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));

    for _ in 0..3 {
        poller.poll_once().unwrap();
    }
    assert_eq!(names(&dispatches), vec!["a", "b", "a"]);
}
