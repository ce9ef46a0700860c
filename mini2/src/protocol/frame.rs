//! Command frame encoding.
//!
//! Every command travels as a fixed 16-byte frame: a 14-byte body followed by
//! a CRC-16/XMODEM of that body.
//!
//! ```text
//! [0]      command class
//! [1]      command index
//! [2]      sub-command
//! [3]      0x00
//! [4..8)   parameter 1
//! [8..12)  parameter 2
//! [12..14) 0x0000
//! [14..16) crc16_xmodem(bytes[0..14]), low byte first
//! ```
//!
//! The trailer being little-endian is a property of the camera firmware.

use std::fmt;

use bytes::BufMut;

use super::constants::{CommandClass, CommandIndex, SubCommand};

/// Length of the frame body, before the checksum.
pub const BODY_LEN: usize = 14;

/// Length of a complete frame on the wire.
pub const FRAME_LEN: usize = BODY_LEN + 2;

/// A 4-byte command parameter.
pub type Parameter = [u8; 4];

/// The all-zero parameter.
pub const ZERO_PARAM: Parameter = [0; 4];

const CRC16_POLY: u16 = 0x1021;

/// CRC-16/XMODEM: polynomial 0x1021, initial value 0, no reflection, no final XOR.
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x0000;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Encodes a plain integer parameter, little-endian.
///
/// Range checks belong to the caller.
pub fn encode_u32_param(value: u32) -> Parameter {
    value.to_le_bytes()
}

/// Encodes a single-byte level in byte 1 of the parameter, as used by the
/// zoom and pseudo-color commands.
pub fn level_param(level: u8) -> Parameter {
    [0x00, level, 0x00, 0x00]
}

/// Encodes a point as two little-endian 16-bit coordinates.
pub fn point_param(x: u16, y: u16) -> Parameter {
    let [x0, x1] = x.to_le_bytes();
    let [y0, y1] = y.to_le_bytes();
    [x0, x1, y0, y1]
}

/// Assembles the 14-byte frame body in wire order, reserved bytes zeroed.
pub fn build_body(
    class: CommandClass,
    index: CommandIndex,
    sub: SubCommand,
    param1: Parameter,
    param2: Parameter,
) -> [u8; BODY_LEN] {
    let mut body = [0u8; BODY_LEN];
    let mut buf = &mut body[..];
    buf.put_u8(class.into());
    buf.put_u8(index.into());
    buf.put_u8(sub.code());
    buf.put_u8(0x00);
    buf.put_slice(&param1);
    buf.put_slice(&param2);
    buf.put_u16(0x0000);
    debug_assert!(buf.is_empty());
    body
}

/// Appends the checksum trailer to a body, producing the wire frame.
pub fn seal(body: &[u8; BODY_LEN]) -> CommandFrame {
    let crc = crc16_xmodem(body);
    let mut bytes = [0u8; FRAME_LEN];
    bytes[..BODY_LEN].copy_from_slice(body);
    bytes[BODY_LEN..].copy_from_slice(&crc.to_le_bytes());
    CommandFrame(bytes)
}

/// A sealed, immutable command frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandFrame([u8; FRAME_LEN]);

impl CommandFrame {
    /// The full 16 bytes handed to the transport.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// The body the checksum covers.
    pub fn body(&self) -> &[u8] {
        &self.0[..BODY_LEN]
    }

    /// The checksum stored in the trailer.
    pub fn checksum(&self) -> u16 {
        u16::from_le_bytes([self.0[BODY_LEN], self.0[BODY_LEN + 1]])
    }

    /// Whether the trailer matches the body.
    pub fn is_valid(&self) -> bool {
        self.checksum() == crc16_xmodem(self.body())
    }

    /// Lowercase hex rendering, for logs.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandFrame({})", self.to_hex())
    }
}
