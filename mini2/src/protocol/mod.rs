//! Mini2 command protocol.
//!
//! The camera accepts fixed-size command frames over a vendor control
//! transfer. There is no response channel: the device never acknowledges a
//! command, so frames reach the wire in the order they are sent and nothing
//! confirms one took effect before the next.

mod command;
mod constants;
mod frame;
mod types;

pub use command::*;
pub use constants::*;
pub use frame::*;
pub use types::*;
