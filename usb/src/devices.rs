// This file wraps the USB information needed to relocate the card into a
// 'Plain Old Rust Struct', so other modules don't need to hold rusb types or
// poll USB themselves.

use crate::commands::{PID_XONAR_AE, VID_XONAR_AE};
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XonarDevice {
    pub(crate) bus_number: u8,
    pub(crate) address: u8,
}

impl XonarDevice {
    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

/// Scan the attached USB devices for Xonar AE cards (0b05:180f). A single
/// pass in OS enumeration order; no retrying or polling happens here, a
/// caller that finds nothing simply asks again later.
pub fn find_devices() -> Vec<XonarDevice> {
    let mut found = Vec::new();
    if let Ok(devices) = rusb::devices() {
        for usb_device in devices.iter() {
            if let Ok(descriptor) = usb_device.device_descriptor() {
                if descriptor.vendor_id() == VID_XONAR_AE
                    && descriptor.product_id() == PID_XONAR_AE
                {
                    debug!(
                        "Found Xonar AE on bus {}, address {}",
                        usb_device.bus_number(),
                        usb_device.address()
                    );
                    found.push(XonarDevice {
                        bus_number: usb_device.bus_number(),
                        address: usb_device.address(),
                    });
                }
            }
        }
    }
    found
}
