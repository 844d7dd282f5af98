// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made, kurbo-typed event payload family.
//!
//! ## Feature
//!
//! Enable with `basic_events`.
//!
//! ## Notes
//!
//! Hosts with their own event types should implement
//! [`EventSet`](proscenium_screens::EventSet) over those instead; this module
//! exists so demos, tests, and small hosts do not have to. The shapes follow
//! what windowing layers commonly report: sizes for the viewport, a logical
//! key plus a position-carrying mouse payload for input.

use kurbo::{Point, Size, Vec2};
use proscenium_screens::{EventSet, InputEvent};

/// Marker type grouping the payloads below into one [`EventSet`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BasicEvents;

impl EventSet for BasicEvents {
    type Viewport = ViewportEvent;
    type Key = KeyEvent;
    type Mouse = MouseEvent;
    type MouseMove = MouseMoveEvent;
}

/// Viewport resize payload.
///
/// Window and framebuffer sizes differ on scaled (hi-dpi) displays, so both
/// are carried.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportEvent {
    /// New window size, in logical units.
    pub window_size: Size,
    /// New framebuffer size, in pixels.
    pub framebuffer_size: Size,
}

impl ViewportEvent {
    /// Create a payload where window and framebuffer sizes coincide (no
    /// display scaling).
    pub fn from_size(size: Size) -> Self {
        Self {
            window_size: size,
            framebuffer_size: size,
        }
    }
}

/// A logical key, independent of layout/scan-code concerns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// A printable character, lowercased where applicable.
    Character(char),
    /// The Enter/Return key.
    Enter,
    /// The Escape key.
    Esc,
    /// The Tab key.
    Tab,
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
}

/// Key press/release payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyEvent {
    /// The logical key.
    pub key: Key,
    accepted: bool,
}

impl KeyEvent {
    /// Create an unaccepted payload for `key`.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            accepted: false,
        }
    }
}

impl InputEvent for KeyEvent {
    fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }
    fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// A mouse button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Middle button (wheel).
    Middle,
    /// Right button.
    Right,
}

/// Mouse button press/release payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// The button that changed state.
    pub button: MouseButton,
    /// Cursor position in window coordinates.
    pub position: Point,
    accepted: bool,
}

impl MouseEvent {
    /// Create an unaccepted payload.
    pub fn new(button: MouseButton, position: Point) -> Self {
        Self {
            button,
            position,
            accepted: false,
        }
    }
}

impl InputEvent for MouseEvent {
    fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }
    fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Mouse move payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseMoveEvent {
    /// Cursor position in window coordinates.
    pub position: Point,
    /// Movement since the previous move event.
    pub relative: Vec2,
    accepted: bool,
}

impl MouseMoveEvent {
    /// Create an unaccepted payload.
    pub fn new(position: Point, relative: Vec2) -> Self {
        Self {
            position,
            relative,
            accepted: false,
        }
    }
}

impl InputEvent for MouseMoveEvent {
    fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }
    fn is_accepted(&self) -> bool {
        self.accepted
    }
}
