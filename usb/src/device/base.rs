use crate::commands::{self, ControlRequest};
use crate::devices::XonarDevice;
use crate::error::{CommandError, ConnectError};
use xonar_types::OutputSelection;

// This is a basic SuperTrait which defines all the 'Parts' of the Xonar AE for use.
pub trait FullXonarDevice: AttachXonar + XonarCommands + Send {}

pub trait AttachXonar {
    fn from_device(device: XonarDevice) -> Result<Box<dyn FullXonarDevice>, ConnectError>
    where
        Self: Sized;
}

/// The raw transfer seam: one blocking class control transfer in each
/// direction, bounded by the timeout carried in the request. Everything above
/// this trait is pure protocol.
pub trait ExecutableXonar {
    fn write_class_control(
        &mut self,
        request: ControlRequest,
        data: &[u8],
    ) -> Result<(), CommandError>;

    fn read_class_control(&mut self, request: ControlRequest) -> Result<Vec<u8>, CommandError>;
}

// These are the commands the card understands; the raw seam must be implemented.
pub trait XonarCommands: ExecutableXonar {
    /// Route the analog path to the speakers or the headphone jack. The cached
    /// selection is not touched here, that is the switch's job.
    fn select_output(&mut self, speakers: bool) -> Result<(), CommandError> {
        let payload = commands::encode_output_select(speakers);
        self.write_class_control(ControlRequest::output_select(), &payload)
    }

    /// Read the connector status and interpret its channel count. A transfer
    /// failure surfaces as an error, never as `Unknown`; mapping failures to a
    /// fallback value is the caller's policy.
    fn connector_status(&mut self) -> Result<OutputSelection, CommandError> {
        let response = self.read_class_control(ControlRequest::connector_status())?;
        commands::decode_connector_status(&response)
    }
}
