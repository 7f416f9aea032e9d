use tagplay::BaudProfile;
use tagplay::status::Status;

use super::common::open_and_reset_reader;

#[test]
#[ignore]
fn firmware_reports_pn532() {
    let Some(mut reader) = open_and_reset_reader().expect("reader setup") else {
        eprintln!("no reader attached, skipping");
        return;
    };
    let fw = reader.get_firmware_version().expect("firmware version");
    assert_eq!(fw.ic, 0x32);
    reader.shutdown();
}

#[test]
#[ignore]
fn idle_detection_times_out_cleanly() {
    // run with no tag on the antenna
    let Some(mut reader) = open_and_reset_reader().expect("reader setup") else {
        return;
    };
    let (status, uid) = reader.detect_tag(BaudProfile::Iso14443A, 1000);
    assert_eq!(status, Status::TIMEOUT);
    assert!(uid.is_none());
    reader.shutdown();
}
