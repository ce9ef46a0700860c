mod device;

pub use self::device::UsbCamera;

use log::{debug, info};
use rusb::{Device, DeviceHandle, UsbContext};

use crate::config::{Config, DeviceId};
use crate::error::{Error, Result};
use crate::protocol::CommandFrame;

/// Something that can put a sealed frame on the wire.
///
/// Implementations send exactly the bytes given and report failure; they do
/// not retry.
pub trait Transport {
    fn send_frame(&mut self, frame: &CommandFrame) -> Result<()>;
}

impl<D: Transport + ?Sized> Transport for &mut D {
    fn send_frame(&mut self, frame: &CommandFrame) -> Result<()> {
        (**self).send_frame(frame)
    }
}

impl<D: Transport + ?Sized> Transport for Box<D> {
    fn send_frame(&mut self, frame: &CommandFrame) -> Result<()> {
        (**self).send_frame(frame)
    }
}

/// Opens the first attached device matching `config.devices`, in list order.
pub fn open_device<T: UsbContext>(
    context: &T,
    config: &Config,
) -> Result<(DeviceId, DeviceHandle<T>)> {
    let devices = context.devices()?;

    for id in &config.devices {
        if let Some(device) = devices.iter().find(|device| is_match(device, id)) {
            let handle = device.open()?;
            info!(
                "Opened {} ({:?}) on bus {} address {}",
                id,
                id.model,
                device.bus_number(),
                device.address()
            );
            return Ok((*id, handle));
        }
        debug!("no device for {}", id);
    }

    Err(Error::DeviceNotFound {
        searched: config.describe_devices(),
    })
}

fn is_match<T: UsbContext>(device: &Device<T>, id: &DeviceId) -> bool {
    match device.device_descriptor() {
        Ok(desc) => desc.vendor_id() == id.vendor_id && desc.product_id() == id.product_id,
        Err(_) => false,
    }
}
