use crate::commands::ControlRequest;
use crate::device::base::{AttachXonar, ExecutableXonar, FullXonarDevice, XonarCommands};
use crate::devices::XonarDevice;
use crate::error::{CommandError, ConnectError};
use log::info;
use rusb::{Device, DeviceHandle, Direction, GlobalContext, Recipient, RequestType};

pub struct XonarUSB {
    handle: DeviceHandle<GlobalContext>,
}

impl XonarUSB {
    fn find_device(device: XonarDevice) -> Result<Device<GlobalContext>, ConnectError> {
        if let Ok(devices) = rusb::devices() {
            for usb_device in devices.iter() {
                if usb_device.bus_number() == device.bus_number()
                    && usb_device.address() == device.address()
                {
                    return Ok(usb_device);
                }
            }
        }
        Err(ConnectError::DeviceNotFound)
    }
}

impl AttachXonar for XonarUSB {
    fn from_device(device: XonarDevice) -> Result<Box<dyn FullXonarDevice>, ConnectError> {
        // Firstly, relocate the USB device based on its reported location. The
        // open handle keeps libusb's device reference alive until we're dropped.
        let usb_device = XonarUSB::find_device(device)?;
        let handle = usb_device.open()?;

        info!("Connected to Xonar AE at {:?}", usb_device);

        // The output selector lives on the default control endpoint, so the
        // streaming interfaces stay with the generic USB audio driver; no
        // interface is claimed here.
        Ok(Box::new(XonarUSB { handle }))
    }
}

impl ExecutableXonar for XonarUSB {
    fn write_class_control(
        &mut self,
        request: ControlRequest,
        data: &[u8],
    ) -> Result<(), CommandError> {
        debug_assert_eq!(data.len(), request.length);
        self.handle.write_control(
            rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface),
            request.request,
            request.value,
            request.index,
            data,
            request.timeout,
        )?;

        Ok(())
    }

    fn read_class_control(&mut self, request: ControlRequest) -> Result<Vec<u8>, CommandError> {
        let mut buf = vec![0; request.length];
        let response_length = self.handle.read_control(
            rusb::request_type(Direction::In, RequestType::Class, Recipient::Interface),
            request.request,
            request.value,
            request.index,
            &mut buf,
            request.timeout,
        )?;
        buf.truncate(response_length);
        Ok(buf)
    }
}

impl XonarCommands for XonarUSB {}
impl FullXonarDevice for XonarUSB {}
