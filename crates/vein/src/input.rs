//! Per-frame input sampling
//!
//! The host exposes its mouse and keyboard through [`InputSource`]. A frame takes an
//! [`Input`] snapshot of it when it begins so every widget in the frame observes the
//! same pointer position and button edges.
//!
//! [`InputState`] is an event-fed `InputSource` for hosts that deliver input as
//! events rather than polling queries.

use bitflags::bitflags;
use glam::Vec2;
use std::collections::HashSet;

/// Discrete controls the toolkit queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MouseLeftButton,
    MouseRightButton,
    MouseMiddleButton,
    /// Confirm key (Enter)
    Accept,
    /// Back key (Escape)
    Cancel,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::MouseLeftButton,
        Control::MouseRightButton,
        Control::MouseMiddleButton,
        Control::Accept,
        Control::Cancel,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Host input queries, sampled once per frame
pub trait InputSource {
    /// Pointer position in normalized screen space
    fn mouse_position(&self) -> Vec2;

    /// Control went down this tick
    fn is_control_pressed(&self, control: Control) -> bool;

    /// Control went up this tick
    fn is_control_released(&self, control: Control) -> bool;

    /// Control is currently held
    fn is_control_down(&self, control: Control) -> bool;
}

bitflags! {
    /// Input options for a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputFlags: u8 {
        /// The frame ignores the pointer and all controls
        const DISABLE_INPUT = 1 << 0;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ControlSample {
    pressed: bool,
    released: bool,
    down: bool,
}

/// Snapshot of the host input taken when a frame begins
#[derive(Debug, Clone)]
pub struct Input {
    flags: InputFlags,
    mouse_position: Vec2,
    controls: [ControlSample; Control::ALL.len()],
}

impl Input {
    /// Pointer position reported while input is disabled, outside of any rect on screen
    pub const OFFSCREEN: Vec2 = Vec2::new(-1.0, -1.0);

    /// Sample `source`, or produce an inert snapshot when input is disabled
    pub fn sample(source: &dyn InputSource, flags: InputFlags) -> Self {
        let mut controls = [ControlSample::default(); Control::ALL.len()];

        if flags.contains(InputFlags::DISABLE_INPUT) {
            return Self {
                flags,
                mouse_position: Self::OFFSCREEN,
                controls,
            };
        }

        for control in Control::ALL {
            controls[control.index()] = ControlSample {
                pressed: source.is_control_pressed(control),
                released: source.is_control_released(control),
                down: source.is_control_down(control),
            };
        }

        Self {
            flags,
            mouse_position: source.mouse_position(),
            controls,
        }
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    pub fn is_disabled(&self) -> bool {
        self.flags.contains(InputFlags::DISABLE_INPUT)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    pub fn is_control_pressed(&self, control: Control) -> bool {
        self.controls[control.index()].pressed
    }

    pub fn is_control_released(&self, control: Control) -> bool {
        self.controls[control.index()].released
    }

    pub fn is_control_down(&self, control: Control) -> bool {
        self.controls[control.index()].down
    }
}

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// Backend-agnostic key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// A character key (letters, numbers, symbols)
    Character(char),
}

/// Tracks mouse and keyboard state from host events
///
/// Keeps both the held state and the per-tick edges (just pressed/just released).
/// Call [`InputState::begin_frame`] once per tick after the UI has been built.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current cursor position in normalized screen space, if known
    pub cursor_position: Option<Vec2>,

    pub buttons_down: HashSet<MouseButton>,
    pub buttons_just_pressed: HashSet<MouseButton>,
    pub buttons_just_released: HashSet<MouseButton>,

    pub keys_down: HashSet<Key>,
    pub keys_just_pressed: HashSet<Key>,
    pub keys_just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-tick edges
    pub fn begin_frame(&mut self) {
        self.buttons_just_pressed.clear();
        self.buttons_just_released.clear();
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
        self.buttons_just_pressed.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_down.remove(&button);
        self.buttons_just_released.insert(button);
    }

    /// Record a key press; repeats of a held key do not produce a new edge
    pub fn press_key(&mut self, key: Key) {
        if self.keys_down.insert(key.clone()) {
            self.keys_just_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    pub fn set_cursor_position(&mut self, position: Option<Vec2>) {
        self.cursor_position = position;
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.buttons_just_released.contains(&button)
    }

    fn binding(control: Control) -> Binding {
        match control {
            Control::MouseLeftButton => Binding::Button(MouseButton::Left),
            Control::MouseRightButton => Binding::Button(MouseButton::Right),
            Control::MouseMiddleButton => Binding::Button(MouseButton::Middle),
            Control::Accept => Binding::Key(Key::Enter),
            Control::Cancel => Binding::Key(Key::Escape),
        }
    }
}

enum Binding {
    Button(MouseButton),
    Key(Key),
}

impl InputSource for InputState {
    fn mouse_position(&self) -> Vec2 {
        self.cursor_position.unwrap_or(Input::OFFSCREEN)
    }

    fn is_control_pressed(&self, control: Control) -> bool {
        match Self::binding(control) {
            Binding::Button(button) => self.buttons_just_pressed.contains(&button),
            Binding::Key(key) => self.keys_just_pressed.contains(&key),
        }
    }

    fn is_control_released(&self, control: Control) -> bool {
        match Self::binding(control) {
            Binding::Button(button) => self.buttons_just_released.contains(&button),
            Binding::Key(key) => self.keys_just_released.contains(&key),
        }
    }

    fn is_control_down(&self, control: Control) -> bool {
        match Self::binding(control) {
            Binding::Button(button) => self.buttons_down.contains(&button),
            Binding::Key(key) => self.keys_down.contains(&key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_release() {
        let mut input = InputState::new();

        input.press_button(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));
        assert!(!input.is_button_just_released(MouseButton::Left));

        input.begin_frame();
        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.is_button_just_pressed(MouseButton::Left));

        input.release_button(MouseButton::Left);
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_key_repeat_has_single_edge() {
        let mut input = InputState::new();

        input.press_key(Key::Enter);
        assert!(input.is_control_pressed(Control::Accept));

        input.begin_frame();
        input.press_key(Key::Enter);
        assert!(!input.is_control_pressed(Control::Accept));
        assert!(input.is_control_down(Control::Accept));

        input.release_key(Key::Enter);
        assert!(input.is_control_released(Control::Accept));
        assert!(!input.is_control_down(Control::Accept));
    }

    #[test]
    fn test_snapshot_samples_controls() {
        let mut state = InputState::new();
        state.set_cursor_position(Some(Vec2::new(0.5, 0.25)));
        state.press_button(MouseButton::Left);

        let input = Input::sample(&state, InputFlags::empty());
        assert_eq!(input.mouse_position(), Vec2::new(0.5, 0.25));
        assert!(input.is_control_pressed(Control::MouseLeftButton));
        assert!(input.is_control_down(Control::MouseLeftButton));
        assert!(!input.is_control_down(Control::MouseRightButton));
    }

    #[test]
    fn test_disabled_snapshot_is_inert() {
        let mut state = InputState::new();
        state.set_cursor_position(Some(Vec2::new(0.5, 0.25)));
        state.press_button(MouseButton::Left);

        let input = Input::sample(&state, InputFlags::DISABLE_INPUT);
        assert!(input.is_disabled());
        assert_eq!(input.mouse_position(), Input::OFFSCREEN);
        assert!(!input.is_control_pressed(Control::MouseLeftButton));
        assert!(!input.is_control_down(Control::MouseLeftButton));
    }
}
