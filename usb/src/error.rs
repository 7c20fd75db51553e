#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No Xonar AE device was found")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("No Xonar AE device is attached")]
    NoDevice,

    #[error("Unrecognised output value: {0:?}")]
    InvalidOutput(String),

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),

    #[error("Malformed connector status response from the Xonar AE")]
    MalformedResponse,
}
