#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use tagplay::Error;
use tagplay::constants::PN532_WAKEUP;
use tagplay::device::{DeviceBuilder, DriverConfig};
use tagplay::test_support::{firmware_reply, mock_reader, sam_reply};
use tagplay::transport::{MockDelay, MockPin, MockTransport};

#[test]
fn reset_device_runs_full_sequence() {
    common::fixtures::init_logger();
    let (mut reader, rig) = mock_reader();
    rig.transport.push_reply(sam_reply());
    rig.transport.push_reply(firmware_reply());

    let fw = reader.reset_device().unwrap();
    assert_eq!(fw.to_string(), "PN532 v1.6 (support 0x07)");

    // reset pulse: high, low, high
    assert_eq!(rig.reset.levels(), vec![true, true, false, true]);
    assert_eq!(rig.delay.total(), Duration::from_millis(700));

    let sent = rig.transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], PN532_WAKEUP.to_vec());
    assert_eq!(rig.transport.pending_replies(), 0);
}

#[test]
fn init_budget_is_configurable() {
    let transport = MockTransport::new();
    let reset = MockPin::new(true);
    let mut reader = DeviceBuilder::new()
        .with_transport(Box::new(transport.clone()))
        .with_reset_pin(Box::new(reset.clone()))
        .with_delay(Box::new(MockDelay::new()))
        .with_config(DriverConfig {
            init_attempts: 2,
            ..DriverConfig::default()
        })
        .build()
        .unwrap();

    match reader.reset_device() {
        Err(Error::DeviceInitFailure { attempts }) => assert_eq!(attempts, 2),
        other => panic!("expected DeviceInitFailure, got {:?}", other),
    }
    assert_eq!(transport.open_calls(), 2);
    assert_eq!(transport.close_calls(), 1);
    // two pulses
    assert_eq!(reset.levels().iter().filter(|&&high| !high).count(), 2);
}

#[test]
fn wake_without_sam_reply_still_probes_firmware() {
    let (mut reader, rig) = mock_reader();
    // SAM configuration goes unanswered, the firmware probe succeeds
    rig.transport.push_silence();
    rig.transport.push_reply(firmware_reply());

    assert!(reader.reset_device().is_ok());
}

#[test]
fn shutdown_closes_transport() {
    let (mut reader, rig) = mock_reader();
    reader.shutdown();
    assert_eq!(rig.transport.close_calls(), 1);
}
