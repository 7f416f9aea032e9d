use tagplay::test_support::{firmware_reply, reply};
use tagplay::transport::{MockPin, MockTransport, ReadPolicy, Transport};
use tagplay::Error;

#[test]
fn replies_are_released_in_order() {
    let mut m = MockTransport::new();
    m.push_reply(firmware_reply());
    m.push_reply(reply(0x14, &[]));

    m.send(&[0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]).unwrap();
    let first = m.receive(64, ReadPolicy::UpTo, 100).unwrap();
    assert_eq!(first, firmware_reply());

    m.send(&[0x00, 0x00, 0xFF, 0x05, 0xFB, 0xD4, 0x14, 0x01, 0x14, 0x01, 0x02, 0x00])
        .unwrap();
    let second = m.receive(64, ReadPolicy::UpTo, 100).unwrap();
    assert_eq!(second, reply(0x14, &[]));
    assert_eq!(m.sent_frames().len(), 2);
}

#[test]
fn clones_share_state() {
    let observer = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(observer.clone());
    boxed.open().unwrap();
    boxed.close();
    assert_eq!(observer.open_calls(), 1);
    assert_eq!(observer.close_calls(), 1);
}

#[test]
fn exact_read_without_data_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(
        m.receive(6, ReadPolicy::Exact, 10),
        Err(Error::Timeout)
    ));
}

#[test]
fn pin_level_history() {
    let pin = MockPin::new(false);
    assert!(!pin.level());
    assert_eq!(pin.levels(), vec![false]);
}
