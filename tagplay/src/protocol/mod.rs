// tagplay/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod frame;
pub mod parser;

pub use checksum::{dcs, lcs};
pub use codec::{decode_response_frame, encode_command_frame, encode_response_frame};
pub use frame::{Frame, check_ack};
