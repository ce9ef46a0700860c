//! Command selector bytes and USB request constants.
//!
//! A command is addressed by the triple `(CommandClass, CommandIndex, SubCommand)`.
//! Sub-command bytes are reused across subsystems, so a [`SubCommand`] on its own
//! does not identify an operation.

use rusb::{Direction, Recipient, RequestType};

/// `bmRequestType` for command frames: host to device, vendor, interface (0x41).
pub const REQUEST_TYPE: u8 = 0x41;

/// `bRequest` for command frames.
pub const REQUEST_COMMAND: u8 = 32;

/// `wValue` for command frames.
pub const REQUEST_VALUE: u16 = 0x0000;

/// `wIndex` for command frames.
pub const REQUEST_INDEX: u16 = 0x0000;

/// Builds [`REQUEST_TYPE`] from its parts.
pub fn request_type() -> u8 {
    rusb::request_type(Direction::Out, RequestType::Vendor, Recipient::Interface)
}

/// Command family.
///
/// Most commands are `Basic`; zoom and background correction use `Special`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandClass {
    Basic = 0x10,
    Special = 0x01,
}

impl From<CommandClass> for u8 {
    fn from(class: CommandClass) -> Self {
        class as u8
    }
}

/// Target subsystem of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandIndex {
    ShutterSettings = 0x02,
    ColorVideo = 0x03,
    ImageSettings = 0x04,
    ImageFormat = 0x10,
    Calibration = 0x11,
    ShutterSet = 0x0F,
    /// ASCII `'1'`.
    Zoom = b'1',
}

impl From<CommandIndex> for u8 {
    fn from(index: CommandIndex) -> Self {
        index as u8
    }
}

/// Operation within a subsystem.
///
/// Several variants share a byte value; the duplication is protocol data.
/// A plain `#[repr(u8)]` enum cannot express that, so the value comes from
/// [`SubCommand::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubCommand {
    EdgeEnhancement,
    Gamma,
    Tnr,
    Snr,
    Contrast,
    Brightness,
    DetailEnhancement,
    PseudoColor,
    SceneMode,
    PointZoom,
    Zoom,
    YuvFormat,
    ImageSource,
    ShutterSet,
    DetectorFps,
    SaveVideoFormat,
    AnalogVideo,
    DigitalVideo,
    ParameterSave,
    ParameterRestore,
    BurnProtection,
    AutoShutter,
    Flip,
    ShutterCalibration,
    BackgroundCorrection,
    ModuleSleep,
}

impl SubCommand {
    /// The byte sent on the wire.
    pub const fn code(self) -> u8 {
        match self {
            SubCommand::EdgeEnhancement => b'N',
            SubCommand::Gamma => b'M',
            SubCommand::Tnr => b'L',
            SubCommand::Snr => b'K',
            SubCommand::Contrast => b'J',
            SubCommand::Brightness => b'G',
            SubCommand::DetailEnhancement => b'E',
            SubCommand::PseudoColor => b'E',
            SubCommand::SceneMode => b'B',
            SubCommand::PointZoom => b'Q',
            SubCommand::Zoom => b'B',
            SubCommand::YuvFormat => b'M',
            SubCommand::ImageSource => b'E',
            SubCommand::ShutterSet => b'E',
            SubCommand::DetectorFps => b'D',
            SubCommand::SaveVideoFormat => b'I',
            SubCommand::AnalogVideo => b'J',
            SubCommand::DigitalVideo => b'F',
            SubCommand::ParameterSave => b'Q',
            SubCommand::ParameterRestore => b'R',
            SubCommand::BurnProtection => b'K',
            SubCommand::AutoShutter => b'A',
            SubCommand::Flip => b'C',
            SubCommand::ShutterCalibration => b'C',
            SubCommand::BackgroundCorrection => b'R',
            SubCommand::ModuleSleep => b'H',
        }
    }
}

impl From<SubCommand> for u8 {
    fn from(sub: SubCommand) -> Self {
        sub.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_matches_constant() {
        assert_eq!(request_type(), REQUEST_TYPE);
    }

    #[test]
    fn test_selector_bytes() {
        assert_eq!(u8::from(CommandClass::Basic), 0x10);
        assert_eq!(u8::from(CommandClass::Special), 0x01);
        assert_eq!(u8::from(CommandIndex::Zoom), 0x31);
        assert_eq!(u8::from(CommandIndex::ShutterSet), 0x0F);
        assert_eq!(SubCommand::Brightness.code(), 0x47);
        assert_eq!(SubCommand::Zoom.code(), 0x42);
    }

    #[test]
    fn test_shared_sub_command_bytes() {
        // Same byte, different operations.
        assert_eq!(SubCommand::SceneMode.code(), SubCommand::Zoom.code());
        assert_eq!(SubCommand::PointZoom.code(), SubCommand::ParameterSave.code());
        assert_eq!(SubCommand::Flip.code(), SubCommand::ShutterCalibration.code());
        assert_ne!(SubCommand::SceneMode, SubCommand::Zoom);
    }
}
