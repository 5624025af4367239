//! Customizable keyboard shortcuts
//!
//! Bindings are stored in `Settings` and looked up on every key press that
//! no focused widget captured.

use std::collections::HashMap;

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Playback controls
    PlayPause,
    NextTrack,
    PrevTrack,
    SkipForward,
    SkipBackward,
    VolumeUp,
    VolumeDown,
    VolumeMute,

    // UI controls
    ToggleFullscreen,
    ToggleLibrary,
    OpenFiles,
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    pub modifiers: ModifierSet,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string, e.g. `Ctrl+Shift+P`
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// Letter or digit, stored lowercase
    Char(char),
    Space,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    F11,
    MediaPlayPause,
    MediaNext,
    MediaPrev,
    VolumeUp,
    VolumeDown,
    VolumeMute,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => match self {
                KeyCode::Char(expected) => {
                    let mut chars = c.chars().flat_map(char::to_lowercase);
                    chars.next() == Some(*expected) && chars.next().is_none()
                }
                _ => false,
            },
            Key::Named(named) => matches!(
                (self, named),
                (KeyCode::Space, Named::Space)
                    | (KeyCode::Enter, Named::Enter)
                    | (KeyCode::Escape, Named::Escape)
                    | (KeyCode::Up, Named::ArrowUp)
                    | (KeyCode::Down, Named::ArrowDown)
                    | (KeyCode::Left, Named::ArrowLeft)
                    | (KeyCode::Right, Named::ArrowRight)
                    | (KeyCode::F11, Named::F11)
                    | (KeyCode::MediaPlayPause, Named::MediaPlayPause)
                    | (KeyCode::MediaNext, Named::MediaTrackNext)
                    | (KeyCode::MediaPrev, Named::MediaTrackPrevious)
                    | (KeyCode::VolumeUp, Named::AudioVolumeUp)
                    | (KeyCode::VolumeDown, Named::AudioVolumeDown)
                    | (KeyCode::VolumeMute, Named::AudioVolumeMute)
            ),
            Key::Unidentified => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_uppercase().to_string(),
            KeyCode::Space => "Space".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Escape => "Esc".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::F11 => "F11".into(),
            KeyCode::MediaPlayPause => "Media Play".into(),
            KeyCode::MediaNext => "Media Next".into(),
            KeyCode::MediaPrev => "Media Prev".into(),
            KeyCode::VolumeUp => "Vol+".into(),
            KeyCode::VolumeDown => "Vol-".into(),
            KeyCode::VolumeMute => "Mute".into(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Playback
        bindings.insert(
            Action::PlayPause,
            vec![
                KeyBinding::new(KeyCode::Space),
                KeyBinding::new(KeyCode::MediaPlayPause),
            ],
        );
        bindings.insert(
            Action::NextTrack,
            vec![
                KeyBinding::new(KeyCode::Char('n')).ctrl(),
                KeyBinding::new(KeyCode::MediaNext),
            ],
        );
        bindings.insert(
            Action::PrevTrack,
            vec![
                KeyBinding::new(KeyCode::Char('p')).ctrl(),
                KeyBinding::new(KeyCode::MediaPrev),
            ],
        );
        bindings.insert(Action::SkipForward, vec![KeyBinding::new(KeyCode::Right)]);
        bindings.insert(Action::SkipBackward, vec![KeyBinding::new(KeyCode::Left)]);
        bindings.insert(
            Action::VolumeUp,
            vec![
                KeyBinding::new(KeyCode::Up),
                KeyBinding::new(KeyCode::VolumeUp),
            ],
        );
        bindings.insert(
            Action::VolumeDown,
            vec![
                KeyBinding::new(KeyCode::Down),
                KeyBinding::new(KeyCode::VolumeDown),
            ],
        );
        bindings.insert(
            Action::VolumeMute,
            vec![
                KeyBinding::new(KeyCode::Char('m')),
                KeyBinding::new(KeyCode::VolumeMute),
            ],
        );

        // UI
        bindings.insert(
            Action::ToggleFullscreen,
            vec![
                KeyBinding::new(KeyCode::F11),
                KeyBinding::new(KeyCode::Char('f')),
            ],
        );
        bindings.insert(
            Action::ToggleLibrary,
            vec![KeyBinding::new(KeyCode::Char('l')).ctrl()],
        );
        bindings.insert(
            Action::OpenFiles,
            vec![KeyBinding::new(KeyCode::Char('o')).ctrl()],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Shortcut text for an action's first binding, e.g. `Ctrl+O`
    pub fn hint(&self, action: Action) -> Option<String> {
        self.bindings
            .get(&action)
            .and_then(|b| b.first())
            .map(KeyBinding::display)
    }

    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key, modifiers)))
            .map(|(action, _)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_transport() {
        let bindings = KeyBindings::default();
        assert!(bindings.hint(Action::PlayPause).is_some());
        assert!(bindings.hint(Action::SkipForward).is_some());
        assert!(bindings.hint(Action::OpenFiles).is_some());
    }

    #[test]
    fn keybinding_display() {
        let binding = KeyBinding::new(KeyCode::Char('p')).ctrl().shift();
        assert_eq!(binding.display(), "Ctrl+Shift+P");

        let bindings = KeyBindings::default();
        assert_eq!(bindings.hint(Action::OpenFiles).as_deref(), Some("Ctrl+O"));
        assert_eq!(bindings.hint(Action::PlayPause).as_deref(), Some("Space"));
    }

    #[test]
    fn find_action_respects_modifiers() {
        let bindings = KeyBindings::default();
        let space = Key::Named(Named::Space);
        assert_eq!(
            bindings.find_action(&space, &Modifiers::empty()),
            Some(Action::PlayPause)
        );

        let o = Key::Character("O".into());
        assert_eq!(
            bindings.find_action(&o, &Modifiers::CTRL),
            Some(Action::OpenFiles)
        );
        assert_eq!(bindings.find_action(&o, &Modifiers::empty()), None);
    }

    #[test]
    fn bindings_survive_json() {
        let bindings = KeyBindings::default();
        let json = serde_json::to_string(&bindings).unwrap();
        let restored: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, bindings);
    }
}
