use crate::device;
use crate::device::base::{FullXonarDevice, XonarCommands};
use crate::devices;
use crate::error::CommandError;
use log::{debug, error, info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use xonar_types::OutputSelection;

/// The single owner of the device handle and the cached output selection.
///
/// Every hardware transfer in the process goes through the mutex held in
/// here, and the lock is held for the full duration of a transfer, timeout
/// included. Nothing else may reach the transfer layer once the switch is
/// running.
pub struct OutputSwitch {
    state: Mutex<SwitchState>,
}

struct SwitchState {
    device: Option<Box<dyn FullXonarDevice>>,
    current: OutputSelection,
}

impl OutputSwitch {
    /// Locate the card, open it and probe the active output. A missing card
    /// is not fatal: the switch stays in a device-absent state, and every
    /// later call reports `NoDevice` or `disconnected`.
    pub fn start() -> Self {
        let device = match devices::find_devices().into_iter().next() {
            Some(descriptor) => match device::from_device(descriptor) {
                Ok(device) => Some(device),
                Err(err) => {
                    error!("Unable to open the Xonar AE: {}", err);
                    None
                }
            },
            None => {
                error!("ASUS Xonar AE (0b05:180f) not found");
                None
            }
        };

        Self::attach(device)
    }

    fn attach(device: Option<Box<dyn FullXonarDevice>>) -> Self {
        let switch = Self {
            state: Mutex::new(SwitchState {
                device,
                current: OutputSelection::Unknown,
            }),
        };

        {
            let mut state = switch.lock();
            if let Some(device) = state.device.as_mut() {
                match device.connector_status() {
                    Ok(selection) => state.current = selection,
                    Err(err) => warn!("Initial status query failed: {}", err),
                }
                info!("Xonar AE ready (current output: {})", state.current);
            }
        }

        switch
    }

    /// Release the device handle. Idempotent, and safe to call when
    /// `start()` never found a card.
    pub fn stop(&self) {
        let mut state = self.lock();
        if state.device.take().is_some() {
            info!("Xonar AE released");
        }
    }

    pub fn has_device(&self) -> bool {
        self.lock().device.is_some()
    }

    /// Select an output. The cache is only updated once the hardware has
    /// acknowledged the transfer; on failure it is left exactly as it was.
    pub fn set(&self, speakers: bool) -> Result<(), CommandError> {
        let mut state = self.lock();
        let device = state.device.as_mut().ok_or(CommandError::NoDevice)?;

        device.select_output(speakers)?;
        state.current = if speakers {
            OutputSelection::Speakers
        } else {
            OutputSelection::Headphones
        };
        info!("Switched to {}", state.current);
        Ok(())
    }

    /// Query the active output. A failed transfer falls back to the last
    /// cached value rather than failing the caller: a stale answer is more
    /// useful to an operator than none.
    pub fn get(&self) -> Result<OutputSelection, CommandError> {
        let mut state = self.lock();
        let device = state.device.as_mut().ok_or(CommandError::NoDevice)?;

        match device.connector_status() {
            Ok(selection) => state.current = selection,
            Err(err) => debug!("Status query failed, serving cached value: {}", err),
        }
        Ok(state.current)
    }

    /// Textual write contract carried over from the original sysfs
    /// attribute: `speakers`/`1` and `headphones`/`0`, case insensitive,
    /// surrounding whitespace ignored. Anything else is rejected before any
    /// I/O is attempted.
    pub fn write_output(&self, value: &str) -> Result<(), CommandError> {
        let token = value.trim();
        let speakers = if token.eq_ignore_ascii_case("speakers") || token == "1" {
            true
        } else if token.eq_ignore_ascii_case("headphones") || token == "0" {
            false
        } else {
            return Err(CommandError::InvalidOutput(value.to_string()));
        };

        self.set(speakers)
    }

    /// Textual read contract: `speakers`, `headphones`, `unknown`, or
    /// `disconnected` when no card is held. The caller owns the line
    /// terminator.
    pub fn read_output(&self) -> String {
        match self.get() {
            Ok(selection) => selection.to_string(),
            Err(_) => "disconnected".to_string(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SwitchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
