//! The device-facing operation API.

use log::{debug, warn};
use rusb::Context;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    AnalogVideoFormat, Command, CoreModel, DigitalFrameRate, DigitalVideoFormat, FlipMode,
    ImageSource, PseudoColor, SceneMode, ShutterPosition, SleepState, YuvFormat,
};
use crate::usb::{Transport, UsbCamera};

/// A Mini2 thermal camera module.
///
/// Every setter builds one frame and sends it; the camera never answers, so
/// `Ok(())` means the transfer completed, not that the setting was applied.
/// Methods take `&mut self`: one frame is in flight at a time, and wrapping
/// the value in a `Mutex` is the way to share it between threads.
pub struct Mini2<D: Transport> {
    device: D,
    model: CoreModel,
}

impl Mini2<UsbCamera<Context>> {
    /// Opens the first known camera attached to the host.
    pub fn open() -> Result<Self> {
        Self::open_with(&Config::default())
    }

    pub fn open_with(config: &Config) -> Result<Self> {
        let camera = UsbCamera::open(config)?;
        let model = camera.model();
        Ok(Self::with_model(camera, model))
    }
}

impl<D: Transport> Mini2<D> {
    /// Wraps an already open transport of unknown core size.
    pub fn new(device: D) -> Self {
        Self::with_model(device, CoreModel::Unknown)
    }

    pub fn with_model(device: D, model: CoreModel) -> Self {
        Mini2 { device, model }
    }

    pub fn model(&self) -> CoreModel {
        self.model
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Releases the transport.
    pub fn into_inner(self) -> D {
        self.device
    }

    /// Encodes and sends a single command.
    pub fn send(&mut self, command: Command) -> Result<()> {
        let frame = command.encode();
        debug!(
            "{:?}/{:?}/{:?} -> {}",
            command.class,
            command.index,
            command.sub,
            frame.to_hex()
        );
        self.device.send_frame(&frame)
    }

    fn try_send(&mut self, command: Result<Command>) -> Result<()> {
        match command {
            Ok(command) => self.send(command),
            Err(err) => {
                debug!("rejected: {}", err);
                Err(err)
            }
        }
    }

    fn check_frame_rate(&self, fps: DigitalFrameRate) {
        if !self.model.supports_frame_rate(fps) {
            warn!("{:?} is not a native frame rate for {:?}", fps, self.model);
        }
    }

    pub fn set_brightness(&mut self, value: u8) -> Result<()> {
        self.try_send(Command::brightness(value))
    }

    pub fn set_contrast(&mut self, value: u8) -> Result<()> {
        self.try_send(Command::contrast(value))
    }

    pub fn set_scene(&mut self, scene: SceneMode) -> Result<()> {
        self.send(Command::scene_mode(scene))
    }

    pub fn set_pseudo_color(&mut self, color: PseudoColor) -> Result<()> {
        self.send(Command::pseudo_color(color))
    }

    pub fn set_flip(&mut self, mode: FlipMode) -> Result<()> {
        self.send(Command::flip(mode))
    }

    /// Gear 0..=2.
    pub fn set_edge_enhancement(&mut self, gear: u8) -> Result<()> {
        self.try_send(Command::edge_enhancement(gear))
    }

    pub fn set_detail_enhancement(&mut self, gear: u8) -> Result<()> {
        self.try_send(Command::detail_enhancement(gear))
    }

    pub fn set_snr(&mut self, gear: u8) -> Result<()> {
        self.try_send(Command::snr(gear))
    }

    pub fn set_tnr(&mut self, gear: u8) -> Result<()> {
        self.try_send(Command::tnr(gear))
    }

    /// Always fails: with [`Error::Unsupported`](crate::Error::Unsupported)
    /// for a valid gear, with a range error otherwise. Nothing is sent.
    pub fn set_gamma(&mut self, gear: u8) -> Result<()> {
        self.try_send(Command::gamma(gear))
    }

    pub fn set_image_source(&mut self, source: ImageSource) -> Result<()> {
        self.send(Command::image_source(source))
    }

    pub fn set_shutter_position(&mut self, position: ShutterPosition) -> Result<()> {
        self.send(Command::shutter_position(position))
    }

    pub fn do_shutter_calibration(&mut self) -> Result<()> {
        self.send(Command::shutter_calibration())
    }

    pub fn do_background_correction(&mut self) -> Result<()> {
        self.send(Command::background_correction())
    }

    pub fn set_auto_shutter(&mut self, enabled: bool) -> Result<()> {
        self.send(Command::auto_shutter(enabled))
    }

    pub fn set_burn_protection(&mut self, enabled: bool) -> Result<()> {
        self.send(Command::burn_protection(enabled))
    }

    pub fn set_sleep(&mut self, state: SleepState) -> Result<()> {
        self.send(Command::sleep(state))
    }

    /// Persists the current settings on the module.
    ///
    /// Not everything is kept: zoom always comes back as 1x after a reboot.
    pub fn save_parameters(&mut self) -> Result<()> {
        self.send(Command::save_parameters())
    }

    /// Resets saved settings to factory defaults.
    ///
    /// This can leave the module without a video feed if the defaults do not
    /// match the host's expected output format.
    pub fn restore_parameters(&mut self) -> Result<()> {
        self.send(Command::restore_parameters())
    }

    pub fn set_digital_video_format(
        &mut self,
        enabled: bool,
        format: DigitalVideoFormat,
        fps: DigitalFrameRate,
    ) -> Result<()> {
        self.check_frame_rate(fps);
        self.send(Command::digital_video_format(enabled, format, fps))
    }

    /// Disabling analog output requires `format` to be NTSC.
    pub fn set_analog_video_format(
        &mut self,
        enabled: bool,
        format: AnalogVideoFormat,
    ) -> Result<()> {
        self.try_send(Command::analog_video_format(enabled, format))
    }

    pub fn save_video_format(&mut self) -> Result<()> {
        self.send(Command::save_video_format())
    }

    pub fn set_detector_frame_rate(&mut self, fps: DigitalFrameRate) -> Result<()> {
        self.check_frame_rate(fps);
        self.send(Command::detector_frame_rate(fps))
    }

    pub fn set_yuv_format(&mut self, format: YuvFormat) -> Result<()> {
        self.send(Command::yuv_format(format))
    }

    /// Zoom in on the centre. `level` is in tenths: 10 is 1.0x, 80 is 8.0x.
    pub fn set_zoom_centre(&mut self, level: u8) -> Result<()> {
        self.try_send(Command::zoom_centre(level))
    }

    /// Zoom in on pixel `(x, y)`.
    pub fn set_zoom_on_point(&mut self, level: u8, x: u16, y: u16) -> Result<()> {
        self.try_send(Command::zoom_on_point(level, x, y))
    }
}
