use crate::error::CommandError;
use std::time::Duration;
use xonar_types::OutputSelection;

pub const VID_XONAR_AE: u16 = 0x0b05;
pub const PID_XONAR_AE: u16 = 0x180f;

/// USB Audio Class SET/GET CUR request code.
pub const UAC_CS_CUR: u8 = 0x01;

/// Vendor-specific controls on Output Terminal 7.
pub const OUTPUT_SELECT_CS: u8 = 0x08;
pub const CONNECTOR_STATUS_CS: u8 = 0x02;
pub const OUTPUT_TERMINAL_ID: u8 = 7;

/// The audio control interface sits at interface 0 (low byte of wIndex).
const CONTROL_INTERFACE: u8 = 0;

/// Connector number, the fixed second byte of the output-select payload.
const CONNECTOR_NUMBER: u8 = 0x03;

const SELECT_SPEAKERS: u8 = 0x01;
const SELECT_HEADPHONES: u8 = 0x02;

/// Channel count reported by the connector status while the speaker output
/// is active. The card exposes no explicit "active output" field, so this is
/// the only observable signal: 8 means speakers, anything else headphones.
pub const SPEAKER_CHANNEL_COUNT: u8 = 8;

pub const OUTPUT_SELECT_LEN: usize = 2;
pub const CONNECTOR_STATUS_LEN: usize = 6;

pub const TRANSFER_TIMEOUT: Duration = Duration::from_millis(1000);

/// One class control transfer, fully described. The two constructors below
/// are the only way to build one, so the selector, entity and payload length
/// can never drift from what the hardware expects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlRequest {
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub length: usize,
    pub timeout: Duration,
}

impl ControlRequest {
    /// SET CUR on the output-select control, carrying a 2 byte payload.
    pub fn output_select() -> Self {
        Self {
            request: UAC_CS_CUR,
            value: (OUTPUT_SELECT_CS as u16) << 8,
            index: ((OUTPUT_TERMINAL_ID as u16) << 8) | CONTROL_INTERFACE as u16,
            length: OUTPUT_SELECT_LEN,
            timeout: TRANSFER_TIMEOUT,
        }
    }

    /// GET CUR on the connector-status control, expecting a 6 byte reply.
    pub fn connector_status() -> Self {
        Self {
            request: UAC_CS_CUR,
            value: (CONNECTOR_STATUS_CS as u16) << 8,
            index: ((OUTPUT_TERMINAL_ID as u16) << 8) | CONTROL_INTERFACE as u16,
            length: CONNECTOR_STATUS_LEN,
            timeout: TRANSFER_TIMEOUT,
        }
    }
}

pub fn encode_output_select(speakers: bool) -> [u8; OUTPUT_SELECT_LEN] {
    let select = if speakers {
        SELECT_SPEAKERS
    } else {
        SELECT_HEADPHONES
    };
    [select, CONNECTOR_NUMBER]
}

/// Interpret a connector-status reply. Byte 0 is the channel count; transfer
/// failures never reach this function, so `Unknown` is never produced here.
pub fn decode_connector_status(response: &[u8]) -> Result<OutputSelection, CommandError> {
    let channels = response.first().ok_or(CommandError::MalformedResponse)?;
    if *channels == SPEAKER_CHANNEL_COUNT {
        Ok(OutputSelection::Speakers)
    } else {
        Ok(OutputSelection::Headphones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_select_payloads() {
        assert_eq!(encode_output_select(true), [0x01, 0x03]);
        assert_eq!(encode_output_select(false), [0x02, 0x03]);
    }

    #[test]
    fn output_select_request_addressing() {
        let request = ControlRequest::output_select();
        assert_eq!(request.request, 0x01);
        assert_eq!(request.value, 0x0800);
        assert_eq!(request.index, 0x0700);
        assert_eq!(request.length, 2);
        assert_eq!(request.timeout, Duration::from_millis(1000));
    }

    #[test]
    fn connector_status_request_addressing() {
        let request = ControlRequest::connector_status();
        assert_eq!(request.request, 0x01);
        assert_eq!(request.value, 0x0200);
        assert_eq!(request.index, 0x0700);
        assert_eq!(request.length, 6);
        assert_eq!(request.timeout, Duration::from_millis(1000));
    }

    #[test]
    fn eight_channels_means_speakers() {
        let reply = [8, 0, 0, 0, 0, 0];
        assert_eq!(
            decode_connector_status(&reply).unwrap(),
            OutputSelection::Speakers
        );
    }

    #[test]
    fn any_other_channel_count_means_headphones() {
        for channels in [0u8, 1, 2, 6, 7, 9, 255] {
            let reply = [channels, 0, 0, 0, 0, 0];
            assert_eq!(
                decode_connector_status(&reply).unwrap(),
                OutputSelection::Headphones
            );
        }
    }

    #[test]
    fn empty_status_reply_is_malformed() {
        assert!(matches!(
            decode_connector_status(&[]),
            Err(CommandError::MalformedResponse)
        ));
    }
}
