//! Device commands.
//!
//! Each constructor checks its inputs and maps one device operation onto its
//! `(class, index, sub-command)` triple and parameters. Nothing here touches
//! USB; a [`Command`] only becomes bytes through [`Command::encode`].

use super::constants::{CommandClass, CommandIndex, SubCommand};
use super::frame::{
    build_body, encode_u32_param, level_param, point_param, seal, CommandFrame, Parameter,
    ZERO_PARAM,
};
use super::types::{
    AnalogVideoFormat, DigitalFrameRate, DigitalVideoFormat, FlipMode, ImageSource, PseudoColor,
    SceneMode, ShutterPosition, SleepState, YuvFormat,
};
use crate::error::{Error, Result};

/// Upper bound for percentage-style settings.
pub const PERCENT_MAX: u8 = 100;

/// Upper bound for the edge enhancement gear.
pub const EDGE_GEAR_MAX: u8 = 2;

/// Smallest zoom level, 1.0x.
pub const ZOOM_MIN: u8 = 10;

/// Largest zoom level, 8.0x.
pub const ZOOM_MAX: u8 = 80;

/// A single device command, ready to be framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    pub class: CommandClass,
    pub index: CommandIndex,
    pub sub: SubCommand,
    pub param1: Parameter,
    pub param2: Parameter,
}

fn check_range(name: &'static str, value: u8, min: u8, max: u8) -> Result<u8> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::out_of_range(name, value, min.into(), max.into()))
    }
}

fn bit(on: bool) -> u8 {
    u8::from(on)
}

impl Command {
    /// Builds a command from its raw parts.
    pub fn new(
        class: CommandClass,
        index: CommandIndex,
        sub: SubCommand,
        param1: Parameter,
        param2: Parameter,
    ) -> Self {
        Command {
            class,
            index,
            sub,
            param1,
            param2,
        }
    }

    fn basic(index: CommandIndex, sub: SubCommand, param1: Parameter) -> Self {
        Self::new(CommandClass::Basic, index, sub, param1, ZERO_PARAM)
    }

    fn image_setting(sub: SubCommand, name: &'static str, value: u8, max: u8) -> Result<Self> {
        let value = check_range(name, value, 0, max)?;
        Ok(Self::basic(
            CommandIndex::ImageSettings,
            sub,
            encode_u32_param(value.into()),
        ))
    }

    /// Produces the sealed wire frame.
    pub fn encode(&self) -> CommandFrame {
        seal(&build_body(
            self.class,
            self.index,
            self.sub,
            self.param1,
            self.param2,
        ))
    }

    /// Brightness, 0..=100.
    pub fn brightness(value: u8) -> Result<Self> {
        Self::image_setting(SubCommand::Brightness, "brightness", value, PERCENT_MAX)
    }

    /// Contrast, 0..=100.
    pub fn contrast(value: u8) -> Result<Self> {
        Self::image_setting(SubCommand::Contrast, "contrast", value, PERCENT_MAX)
    }

    pub fn scene_mode(scene: SceneMode) -> Self {
        Self::basic(
            CommandIndex::ImageSettings,
            SubCommand::SceneMode,
            encode_u32_param(scene.code().into()),
        )
    }

    /// The palette travels in byte 1 of the parameter, unlike most tags.
    pub fn pseudo_color(color: PseudoColor) -> Self {
        Self::basic(
            CommandIndex::ColorVideo,
            SubCommand::PseudoColor,
            level_param(color.code()),
        )
    }

    pub fn flip(mode: FlipMode) -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::Flip,
            encode_u32_param(mode.code().into()),
        )
    }

    /// Edge enhancement gear, 0..=2.
    pub fn edge_enhancement(gear: u8) -> Result<Self> {
        Self::image_setting(
            SubCommand::EdgeEnhancement,
            "edge enhancement gear",
            gear,
            EDGE_GEAR_MAX,
        )
    }

    /// Detail enhancement gear, 0..=100.
    pub fn detail_enhancement(gear: u8) -> Result<Self> {
        Self::image_setting(
            SubCommand::DetailEnhancement,
            "detail enhancement gear",
            gear,
            PERCENT_MAX,
        )
    }

    /// Spatial noise reduction gear, 0..=100.
    pub fn snr(gear: u8) -> Result<Self> {
        Self::image_setting(SubCommand::Snr, "SNR gear", gear, PERCENT_MAX)
    }

    /// Temporal noise reduction gear, 0..=100.
    pub fn tnr(gear: u8) -> Result<Self> {
        Self::image_setting(SubCommand::Tnr, "TNR gear", gear, PERCENT_MAX)
    }

    /// Gamma has a sub-command byte but no known parameter encoding.
    ///
    /// The gear is still range checked so a bad value is reported as such.
    pub fn gamma(gear: u8) -> Result<Self> {
        check_range("gamma gear", gear, 0, PERCENT_MAX)?;
        Err(Error::Unsupported("gamma"))
    }

    pub fn image_source(source: ImageSource) -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::ImageSource,
            encode_u32_param(source.code().into()),
        )
    }

    pub fn shutter_position(position: ShutterPosition) -> Self {
        Self::basic(
            CommandIndex::ShutterSet,
            SubCommand::ShutterSet,
            encode_u32_param(position.code().into()),
        )
    }

    pub fn shutter_calibration() -> Self {
        Self::basic(
            CommandIndex::ShutterSettings,
            SubCommand::ShutterCalibration,
            ZERO_PARAM,
        )
    }

    pub fn background_correction() -> Self {
        Self::new(
            CommandClass::Special,
            CommandIndex::ImageFormat,
            SubCommand::BackgroundCorrection,
            ZERO_PARAM,
            ZERO_PARAM,
        )
    }

    pub fn auto_shutter(enabled: bool) -> Self {
        Self::basic(
            CommandIndex::ShutterSettings,
            SubCommand::AutoShutter,
            encode_u32_param(bit(enabled).into()),
        )
    }

    pub fn burn_protection(enabled: bool) -> Self {
        Self::basic(
            CommandIndex::ColorVideo,
            SubCommand::BurnProtection,
            encode_u32_param(bit(enabled).into()),
        )
    }

    pub fn sleep(state: SleepState) -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::ModuleSleep,
            encode_u32_param(state.code().into()),
        )
    }

    pub fn save_parameters() -> Self {
        Self::basic(CommandIndex::ImageFormat, SubCommand::ParameterSave, ZERO_PARAM)
    }

    pub fn restore_parameters() -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::ParameterRestore,
            ZERO_PARAM,
        )
    }

    /// Digital output: `[enabled, format, fps, 0]`.
    pub fn digital_video_format(
        enabled: bool,
        format: DigitalVideoFormat,
        fps: DigitalFrameRate,
    ) -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::DigitalVideo,
            [bit(enabled), format.code(), fps.code(), 0x00],
        )
    }

    /// Analog output: `[enabled, format, 0, 0]`.
    ///
    /// Disabling analog output is only accepted together with NTSC.
    pub fn analog_video_format(enabled: bool, format: AnalogVideoFormat) -> Result<Self> {
        if !enabled && format != AnalogVideoFormat::Ntsc {
            return Err(Error::InvalidCombination(format!(
                "analog video must be NTSC when disabled, got {:?}",
                format
            )));
        }
        Ok(Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::AnalogVideo,
            [bit(enabled), format.code(), 0x00, 0x00],
        ))
    }

    pub fn save_video_format() -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::SaveVideoFormat,
            ZERO_PARAM,
        )
    }

    pub fn detector_frame_rate(fps: DigitalFrameRate) -> Self {
        Self::basic(
            CommandIndex::ImageFormat,
            SubCommand::DetectorFps,
            encode_u32_param(fps.code().into()),
        )
    }

    pub fn yuv_format(format: YuvFormat) -> Self {
        Self::basic(
            CommandIndex::ColorVideo,
            SubCommand::YuvFormat,
            encode_u32_param(format.code().into()),
        )
    }

    /// Zoom on the image centre. `level` is tenths, 10..=80 (1.0x to 8.0x).
    pub fn zoom_centre(level: u8) -> Result<Self> {
        let level = check_range("zoom level", level, ZOOM_MIN, ZOOM_MAX)?;
        Ok(Self::new(
            CommandClass::Special,
            CommandIndex::Zoom,
            SubCommand::Zoom,
            level_param(level),
            ZERO_PARAM,
        ))
    }

    /// Zoom on a pixel coordinate, same level range as [`Command::zoom_centre`].
    pub fn zoom_on_point(level: u8, x: u16, y: u16) -> Result<Self> {
        let level = check_range("zoom level", level, ZOOM_MIN, ZOOM_MAX)?;
        Ok(Self::new(
            CommandClass::Special,
            CommandIndex::Zoom,
            SubCommand::PointZoom,
            level_param(level),
            point_param(x, y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_range() {
        assert!(Command::brightness(0).is_ok());
        assert!(Command::brightness(100).is_ok());

        let err = Command::brightness(101).unwrap_err();
        assert!(err.is_precondition());
        assert!(matches!(
            err,
            Error::OutOfRange {
                value: 101,
                max: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_brightness_frame() {
        let frame = Command::brightness(50).unwrap().encode();
        assert_eq!(
            frame.as_bytes(),
            &[
                0x10, 0x04, 0x47, 0x00, 0x32, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x40, 0x65
            ]
        );
    }

    #[test]
    fn test_edge_enhancement_gear_limit() {
        assert!(Command::edge_enhancement(2).is_ok());
        assert!(Command::edge_enhancement(3).unwrap_err().is_precondition());
    }

    #[test]
    fn test_gamma_is_unsupported() {
        assert!(matches!(
            Command::gamma(50).unwrap_err(),
            Error::Unsupported("gamma")
        ));
        assert!(Command::gamma(101).unwrap_err().is_precondition());
    }

    #[test]
    fn test_pseudo_color_uses_byte_one() {
        let cmd = Command::pseudo_color(PseudoColor::Ironbow);
        assert_eq!(cmd.param1, [0x00, 0x02, 0x00, 0x00]);
        assert_eq!(cmd.index, CommandIndex::ColorVideo);
    }

    #[test]
    fn test_analog_video_cross_field() {
        assert!(Command::analog_video_format(false, AnalogVideoFormat::Ntsc).is_ok());
        assert!(Command::analog_video_format(true, AnalogVideoFormat::Pal).is_ok());

        let err = Command::analog_video_format(false, AnalogVideoFormat::Pal).unwrap_err();
        assert!(matches!(err, Error::InvalidCombination(_)));
        assert!(err.is_precondition());
    }

    #[test]
    fn test_digital_video_packing() {
        let cmd = Command::digital_video_format(
            true,
            DigitalVideoFormat::Bt656Interlaced,
            DigitalFrameRate::Hz30,
        );
        assert_eq!(cmd.param1, [0x01, 0x12, 0x1E, 0x00]);
        assert_eq!(cmd.param2, ZERO_PARAM);
    }

    #[test]
    fn test_zoom_range() {
        assert!(Command::zoom_centre(9).is_err());
        assert!(Command::zoom_centre(10).is_ok());
        assert!(Command::zoom_centre(80).is_ok());
        assert!(Command::zoom_centre(81).is_err());
        assert!(Command::zoom_on_point(0, 1, 1).is_err());
    }

    #[test]
    fn test_background_correction_is_special() {
        let cmd = Command::background_correction();
        assert_eq!(cmd.class, CommandClass::Special);
        assert_eq!(cmd.sub.code(), b'R');
    }

    #[test]
    fn test_encode_is_repeatable() {
        let cmd = Command::zoom_on_point(25, 320, 240).unwrap();
        assert_eq!(cmd.encode(), cmd.encode());
    }
}
