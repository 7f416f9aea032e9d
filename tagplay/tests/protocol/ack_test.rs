use tagplay::constants::PN532_ACK;
use tagplay::protocol::check_ack;
use tagplay::status::Status;

#[test]
fn exact_ack_is_ok() {
    assert_eq!(check_ack(&PN532_ACK), Status::OK);
}

#[test]
fn every_single_bit_flip_is_ack_error() {
    for byte in 0..PN532_ACK.len() {
        for bit in 0..8 {
            let mut bytes = PN532_ACK;
            bytes[byte] ^= 1 << bit;
            assert_eq!(check_ack(&bytes), Status::ACK_ERROR, "byte {} bit {}", byte, bit);
        }
    }
}

#[test]
fn nack_and_short_reads_are_ack_error() {
    // NACK frame
    assert_eq!(check_ack(&[0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]), Status::ACK_ERROR);
    assert_eq!(check_ack(&PN532_ACK[..5]), Status::ACK_ERROR);
    assert_eq!(check_ack(&[]), Status::ACK_ERROR);
}
