mod backend;
mod error;
#[cfg(feature = "sdl2-backend")]
mod sdl;
mod types;

pub use crate::backend::{open_first_controller, Backend, Controller};
pub use crate::error::{Error, Result};
#[cfg(feature = "sdl2-backend")]
pub use crate::sdl::{SdlBackend, SdlController};
pub use crate::types::{Axis, ControllerInfo, DeviceIndex, Sample, SAMPLED_BUTTONS};

/// Whether this build carries the SDL2 backend.
pub const SDL_BACKEND: bool = cfg!(feature = "sdl2-backend");
