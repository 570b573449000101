//! Global keyboard shortcuts.
//!
//! Maps key combinations and the mouse back button to semantic
//! `Shortcut` variants that the app dispatches based on the current screen.

use iced::Subscription;
use iced::{keyboard, mouse};

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// F5: remount the list and fetch again.
    Refresh,
    /// Ctrl+C: copy the open title to the clipboard.
    CopyTitle,
    /// Escape or mouse back: system back. Ignored on the list.
    Back,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| map_event(event).map(Message::Shortcut))
}

fn map_event(event: iced::Event) -> Option<Shortcut> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            map_shortcut(key, modifiers)
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back)) => {
            Some(Shortcut::Back)
        }
        _ => None,
    }
}

fn map_shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key {
        Key::Named(Named::F5) => Some(Shortcut::Refresh),
        Key::Named(Named::Escape) => Some(Shortcut::Back),
        Key::Character(ref c) if modifiers.control() && c.as_str() == "c" => {
            Some(Shortcut::CopyTitle)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;
    use keyboard::{Key, Modifiers};

    #[test]
    fn test_named_keys() {
        assert_eq!(
            map_shortcut(Key::Named(Named::F5), Modifiers::empty()),
            Some(Shortcut::Refresh)
        );
        assert_eq!(
            map_shortcut(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Shortcut::Back)
        );
    }

    #[test]
    fn test_copy_requires_ctrl() {
        assert_eq!(
            map_shortcut(Key::Character("c".into()), Modifiers::CTRL),
            Some(Shortcut::CopyTitle)
        );
        assert_eq!(map_shortcut(Key::Character("c".into()), Modifiers::empty()), None);
    }

    #[test]
    fn test_mouse_back_is_back() {
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back));
        assert_eq!(map_event(event), Some(Shortcut::Back));

        let left = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(map_event(left), None);
    }
}
