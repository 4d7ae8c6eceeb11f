use egui::{InputState, Key};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelControl {
    None,
    MoveLeft,
    MoveRight,
}

impl PanelControl {
    /// Both or neither direction held means the panel stays where it is
    pub fn from_held(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => PanelControl::MoveLeft,
            (false, true) => PanelControl::MoveRight,
            _ => PanelControl::None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    pub control: PanelControl,
    pub toggle_pause: bool,
    pub exit: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            control: PanelControl::None,
            toggle_pause: false,
            exit: false,
        }
    }

    pub fn action(control: PanelControl) -> Self {
        Self {
            control,
            ..Self::none()
        }
    }

    pub fn toggle_pause() -> Self {
        Self {
            toggle_pause: true,
            ..Self::none()
        }
    }

    /// Sample the keyboard. Held keys drive the panel; pause is edge triggered.
    pub fn read(input: &InputState) -> Self {
        let left = input.key_down(Key::A) || input.key_down(Key::ArrowLeft);
        let right = input.key_down(Key::D) || input.key_down(Key::ArrowRight);
        Self {
            control: PanelControl::from_held(left, right),
            toggle_pause: input.key_pressed(Key::Space) || input.key_pressed(Key::P),
            exit: input.key_pressed(Key::Escape) || input.key_down(Key::Escape),
        }
    }

    /// Keep one-shot actions of `self` that were not yet consumed by a simulation tick.
    /// The panel control always follows the most recent sample.
    pub fn latch(self, newer: GameInput) -> Self {
        Self {
            control: newer.control,
            toggle_pause: self.toggle_pause ^ newer.toggle_pause,
            exit: self.exit || newer.exit,
        }
    }
}
