use crate::error::{Error, Result};
use crate::types::{Axis, ControllerInfo, DeviceIndex};

/// An opened game controller.
pub trait Controller {
    /// Human readable device name as reported by the backend.
    fn name(&self) -> String;

    /// Current value of `axis` in the backend's native range.
    fn axis(&self, axis: Axis) -> i16;

    /// Whether the button with raw backend index `index` is held.
    /// Indices the backend does not know report `false`.
    fn button(&self, index: u8) -> bool;
}

/// Device enumeration and event queue of an input backend.
pub trait Backend {
    type Controller: Controller;

    /// Number of attached input devices.
    fn num_devices(&self) -> Result<u32>;

    /// Whether the device at `index` matches the game controller abstraction.
    fn is_game_controller(&self, index: DeviceIndex) -> bool;

    /// Opens the device at `index` as a game controller.
    fn open(&self, index: DeviceIndex) -> Result<Self::Controller>;

    /// Reads and discards every pending event.
    ///
    /// Controller state is refreshed by the backend while events are pumped.
    fn drain_events(&mut self);
}

/// Opens the lowest-indexed device that is a game controller.
///
/// Devices that are not game controllers, or that fail to open, are skipped.
pub fn open_first_controller<B: Backend>(
    backend: &B,
) -> Result<(ControllerInfo, B::Controller)> {
    let count = backend.num_devices()?;
    for index in 0..count {
        if !backend.is_game_controller(index) {
            log::debug!("device {index} is not a game controller, skipping");
            continue;
        }
        match backend.open(index) {
            Ok(controller) => {
                let info = ControllerInfo {
                    index,
                    name: controller.name(),
                };
                return Ok((info, controller));
            }
            Err(e) => {
                log::debug!("device {index} failed to open: {e}");
            }
        }
    }
    Err(Error::NoController)
}
