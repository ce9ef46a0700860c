use std::time::Duration;

use log::{debug, trace, warn};
use rusb::{Context, DeviceHandle, UsbContext};

use super::{open_device, Transport};
use crate::config::{Config, DeviceId};
use crate::error::Result;
use crate::protocol::{
    CommandFrame, CoreModel, REQUEST_COMMAND, REQUEST_INDEX, REQUEST_TYPE, REQUEST_VALUE,
};

/// An open Mini2 camera.
///
/// The handle is held for the lifetime of this value and closed on drop.
pub struct UsbCamera<T: UsbContext> {
    handle: DeviceHandle<T>,
    id: DeviceId,
    timeout: Duration,
}

impl UsbCamera<Context> {
    /// Opens a camera on a fresh libusb context.
    pub fn open(config: &Config) -> Result<Self> {
        let context = Context::new()?;
        Self::open_with_context(&context, config)
    }
}

impl<T: UsbContext> UsbCamera<T> {
    /// Opens a camera on an existing context.
    pub fn open_with_context(context: &T, config: &Config) -> Result<Self> {
        let (id, handle) = open_device(context, config)?;
        Ok(UsbCamera {
            handle,
            id,
            timeout: config.timeout,
        })
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn model(&self) -> CoreModel {
        self.id.model
    }

    pub fn handle(&self) -> &DeviceHandle<T> {
        &self.handle
    }
}

impl<T: UsbContext> Transport for UsbCamera<T> {
    fn send_frame(&mut self, frame: &CommandFrame) -> Result<()> {
        trace!("-> {}", frame.to_hex());
        match self.handle.write_control(
            REQUEST_TYPE,
            REQUEST_COMMAND,
            REQUEST_VALUE,
            REQUEST_INDEX,
            frame.as_bytes(),
            self.timeout,
        ) {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!("command transfer to {} failed: {}", self.id, err);
                Err(err.into())
            }
        }
    }
}

impl<T: UsbContext> Drop for UsbCamera<T> {
    fn drop(&mut self) {
        debug!("closing {}", self.id);
    }
}
