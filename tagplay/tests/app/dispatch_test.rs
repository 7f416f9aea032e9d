#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SAMPLE_UID, sample_catalog};
use tagplay::catalog::ItemKind;
use tagplay::playback::{CommandDispatcher, LogDispatcher, PlaybackRequest};
use tagplay::poller::{CycleOutcome, Poller, PollerConfig};
use tagplay::test_support::{detection_reply, mock_reader};

#[test]
fn catalog_items_map_to_requests() {
    let catalog = sample_catalog();
    let entry = catalog.get(&common::fixtures::sample_tag()).unwrap();

    let album = &entry.tracks[0];
    assert_eq!(album.kind(), ItemKind::Album);
    let req = PlaybackRequest::from_item(album);
    assert_eq!(req.context_uri.as_deref(), Some("spotify:album:aaa"));

    let list = &entry.tracks[2];
    assert_eq!(list.kind(), ItemKind::List);
    let req = PlaybackRequest::from_item(list);
    assert_eq!(req.uris.len(), 2);
    assert!(req.context_uri.is_none());
}

#[test]
fn poller_with_log_dispatcher() {
    common::fixtures::init_logger();
    let (reader, rig) = mock_reader();
    let mut poller = Poller::new(reader, sample_catalog(), LogDispatcher, PollerConfig::default());
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    assert!(matches!(
        poller.poll_once().unwrap(),
        CycleOutcome::Dispatched { index: 0, .. }
    ));
}

#[cfg(unix)]
#[serial_test::serial]
#[test]
fn command_dispatcher_passes_json_request() -> anyhow::Result<()> {
    let out = std::env::temp_dir().join("tagplay-dispatch-test.json");
    let _ = std::fs::remove_file(&out);

    let command = vec![
        "sh".to_string(),
        "-c".to_string(),
        format!("printf '%s' \"$1\" > '{}'", out.display()),
        "sh".to_string(),
    ];
    let (reader, rig) = mock_reader();
    let mut poller = Poller::new(
        reader,
        sample_catalog(),
        CommandDispatcher::new(&command)?,
        PollerConfig::default(),
    );
    rig.transport.push_reply(detection_reply(&SAMPLE_UID));
    poller.poll_once()?;

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out)?)?;
    assert_eq!(written["tag"], common::fixtures::SAMPLE_TAG);
    assert_eq!(written["name"], "first");
    assert_eq!(written["context_uri"], "spotify:album:aaa");

    std::fs::remove_file(&out)?;
    Ok(())
}
