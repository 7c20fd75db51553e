use crate::device::base::{AttachXonar, FullXonarDevice};
use crate::devices::XonarDevice;
use crate::error::ConnectError;

pub mod base;
mod libusb;

/// Open a located card into a long-lived handle. Everything above this point
/// talks to the hardware through the `FullXonarDevice` trait object, so it
/// stays unaware of the libusb layer underneath.
pub fn from_device(device: XonarDevice) -> Result<Box<dyn FullXonarDevice>, ConnectError> {
    libusb::XonarUSB::from_device(device)
}
