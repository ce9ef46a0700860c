//! Command interface for Mini2 USB thermal camera modules.
//!
//! The camera is configured by sending it fixed 16-byte command frames over a
//! vendor control transfer. This crate validates each setting, encodes the
//! frame (including its CRC-16/XMODEM trailer) and sends it.
//!
//! ```no_run
//! use mini2::{Mini2, PseudoColor};
//!
//! let mut camera = Mini2::open()?;
//! camera.set_brightness(50)?;
//! camera.set_pseudo_color(PseudoColor::Ironbow)?;
//! camera.set_zoom_centre(20)?; // 2.0x
//! # Ok::<(), mini2::Error>(())
//! ```
//!
//! The protocol is one-way. Frames go out in call order and the camera sends
//! nothing back, so a caller that needs one setting applied before the next
//! has to pace the calls itself.
//!
//! Frames can also be built without a device, e.g. for logging or for
//! another transport:
//!
//! ```
//! use mini2::Command;
//!
//! let frame = Command::zoom_on_point(40, 100, 200)?.encode();
//! assert_eq!(&frame.as_bytes()[8..12], &[0x64, 0x00, 0xC8, 0x00]);
//! # Ok::<(), mini2::Error>(())
//! ```

mod camera;
pub mod config;
mod error;
pub mod protocol;
pub mod usb;

pub use camera::Mini2;
pub use config::{Config, DeviceId};
pub use error::{Error, Result};
pub use protocol::{
    AnalogVideoFormat, Command, CommandFrame, CoreModel, DigitalFrameRate, DigitalVideoFormat,
    FlipMode, ImageSource, PseudoColor, SceneMode, ShutterPosition, SleepState, YuvFormat,
};
pub use usb::{Transport, UsbCamera};

// Re-export rusb for callers that manage their own context.
pub use rusb;
