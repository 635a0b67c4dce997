use std::fmt;

use crate::backend::Controller;

/// Index of a device in the backend's enumeration order.
pub type DeviceIndex = u32;

/// Raw button indices reported in every sample, in output order.
///
/// These are the backend's own button numbers. They are device specific and
/// carry no meaning beyond their position.
pub const SAMPLED_BUTTONS: [u8; 3] = [0, 2, 9];

/// Analog axes read by the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftX,
    LeftY,
}

/// Controller meta information used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerInfo {
    pub index: DeviceIndex,
    pub name: String,
}

/// A single reading of the sampled axes and buttons.
///
/// Displays as five space-separated integers: left X, left Y and
/// the state of each button in [`SAMPLED_BUTTONS`] as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    pub left_x: i16,
    pub left_y: i16,
    pub buttons: [u8; 3],
}

impl Sample {
    /// Reads the current state of `controller`.
    pub fn read<C: Controller + ?Sized>(controller: &C) -> Self {
        Self {
            left_x: controller.axis(Axis::LeftX),
            left_y: controller.axis(Axis::LeftY),
            buttons: SAMPLED_BUTTONS.map(|index| u8::from(controller.button(index))),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2] = self.buttons;
        write!(f, "{} {} {b0} {b1} {b2}", self.left_x, self.left_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        x: i16,
        y: i16,
        pressed: &'static [u8],
    }

    impl Controller for Fixed {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn axis(&self, axis: Axis) -> i16 {
            match axis {
                Axis::LeftX => self.x,
                Axis::LeftY => self.y,
            }
        }

        fn button(&self, index: u8) -> bool {
            self.pressed.contains(&index)
        }
    }

    #[test]
    fn test_sample_display_format() {
        let sample = Sample {
            left_x: -32768,
            left_y: 32767,
            buttons: [1, 0, 1],
        };
        assert_eq!(sample.to_string(), "-32768 32767 1 0 1");
    }

    #[test]
    fn test_sample_default_is_centered_and_released() {
        assert_eq!(Sample::default().to_string(), "0 0 0 0 0");
    }

    #[test]
    fn test_sample_read_uses_sampled_buttons_only() {
        let ctrl = Fixed {
            x: 120,
            y: -4000,
            pressed: &[1, 2, 3, 8],
        };
        let sample = Sample::read(&ctrl);
        assert_eq!(sample.left_x, 120);
        assert_eq!(sample.left_y, -4000);
        assert_eq!(sample.buttons, [0, 1, 0]);
    }

    #[test]
    fn test_sample_read_all_pressed() {
        let ctrl = Fixed {
            x: 0,
            y: 0,
            pressed: &SAMPLED_BUTTONS,
        };
        assert_eq!(Sample::read(&ctrl).to_string(), "0 0 1 1 1");
    }
}
