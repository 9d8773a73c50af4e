//! Platform-agnostic keyboard event types.
//!
//! This module provides a unified event type that works with both:
//! - Native: crossterm::event::KeyEvent
//! - Web: ratzilla::event::KeyEvent

/// Key code abstraction that works on both native and web.
/// Re-exports from crossterm on native, from ratzilla on web.
#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(all(feature = "web", not(feature = "native")))]
pub use ratzilla::event::KeyCode;

/// Unified key event that abstracts over platform-specific implementations.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Plain key press without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// Key press with shift held.
    pub fn shifted(code: KeyCode) -> Self {
        Self {
            shift: true,
            ..Self::plain(code)
        }
    }

    /// Key press with control held.
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}
