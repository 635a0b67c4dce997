use sdl2::controller::{Axis as SdlAxis, Button as SdlButton, GameController};
use sdl2::{EventPump, GameControllerSubsystem, Sdl, VideoSubsystem};

use crate::backend::{Backend, Controller};
use crate::error::{Error, Result};
use crate::types::{Axis, DeviceIndex};

/// SDL2 backend. Owns the context, the subsystems and the event pump.
///
/// Dropping it shuts SDL down once every opened controller is gone too.
pub struct SdlBackend {
    controllers: GameControllerSubsystem,
    pump: EventPump,
    _video: Option<VideoSubsystem>,
    _sdl: Sdl,
}

impl SdlBackend {
    /// Initializes SDL with the game controller and video subsystems.
    ///
    /// Video is best-effort: headless hosts can still poll controllers.
    pub fn new() -> Result<Self> {
        // Keep default SIGINT/SIGTERM behaviour, the poll loop never reads SDL_QUIT.
        sdl2::hint::set("SDL_NO_SIGNAL_HANDLERS", "1");
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let video = match sdl.video() {
            Ok(video) => Some(video),
            Err(e) => {
                log::warn!("video subsystem unavailable: {e}");
                None
            }
        };
        let controllers = sdl.game_controller().map_err(Error::BackendInit)?;
        let pump = sdl.event_pump().map_err(Error::BackendInit)?;
        Ok(Self {
            controllers,
            pump,
            _video: video,
            _sdl: sdl,
        })
    }
}

impl Backend for SdlBackend {
    type Controller = SdlController;

    fn num_devices(&self) -> Result<u32> {
        self.controllers.num_joysticks().map_err(Error::Backend)
    }

    fn is_game_controller(&self, index: DeviceIndex) -> bool {
        self.controllers.is_game_controller(index)
    }

    fn open(&self, index: DeviceIndex) -> Result<SdlController> {
        self.controllers
            .open(index)
            .map(SdlController)
            .map_err(|e| Error::Backend(e.to_string()))
    }

    fn drain_events(&mut self) {
        for _ in self.pump.poll_iter() {}
    }
}

/// A game controller opened through SDL2.
pub struct SdlController(GameController);

impl Controller for SdlController {
    fn name(&self) -> String {
        self.0.name()
    }

    fn axis(&self, axis: Axis) -> i16 {
        self.0.axis(map_axis(axis))
    }

    fn button(&self, index: u8) -> bool {
        button_from_index(index).is_some_and(|button| self.0.button(button))
    }
}

fn map_axis(axis: Axis) -> SdlAxis {
    match axis {
        Axis::LeftX => SdlAxis::LeftX,
        Axis::LeftY => SdlAxis::LeftY,
    }
}

/// Maps a raw `SDL_GameControllerButton` value to the binding's button.
fn button_from_index(index: u8) -> Option<SdlButton> {
    Some(match index {
        0 => SdlButton::A,
        1 => SdlButton::B,
        2 => SdlButton::X,
        3 => SdlButton::Y,
        4 => SdlButton::Back,
        5 => SdlButton::Guide,
        6 => SdlButton::Start,
        7 => SdlButton::LeftStick,
        8 => SdlButton::RightStick,
        9 => SdlButton::LeftShoulder,
        10 => SdlButton::RightShoulder,
        11 => SdlButton::DPadUp,
        12 => SdlButton::DPadDown,
        13 => SdlButton::DPadLeft,
        14 => SdlButton::DPadRight,
        15 => SdlButton::Misc1,
        16 => SdlButton::Paddle1,
        17 => SdlButton::Paddle2,
        18 => SdlButton::Paddle3,
        19 => SdlButton::Paddle4,
        20 => SdlButton::Touchpad,
        _ => return None,
    })
}
