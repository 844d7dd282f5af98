// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-screen handler trait and its propagation flags.

use crate::events::EventSet;

bitflags::bitflags! {
    /// Event categories a screen opts into.
    ///
    /// Both bits are clear by default: a freshly written screen receives no
    /// draw and no input callbacks until it declares otherwise through
    /// [`Screen::propagated_events`]. Viewport events are exempt — they reach
    /// every linked screen regardless of flags, because a resize can matter to
    /// a screen (internal buffers, cached layouts) even when it neither draws
    /// nor takes input.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropagatedEvents: u8 {
        /// Screen receives `draw_event` during draw dispatch (back-to-front).
        const DRAW  = 0b0000_0001;
        /// Screen receives key/mouse events during input dispatch (front-to-back).
        const INPUT = 0b0000_0010;
    }
}

impl Default for PropagatedEvents {
    fn default() -> Self {
        Self::empty()
    }
}

/// A layered unit of UI logic, dispatched to by the application layer.
///
/// Every handler has an empty default so concrete screens override only the
/// events they participate in. The flag set returned by
/// [`propagated_events`](Screen::propagated_events) is consulted once per
/// dispatch pass, so a screen that changes its answer — commonly from inside
/// [`focus_event`](Screen::focus_event) or [`blur_event`](Screen::blur_event),
/// which take `&mut self` — sees the change take effect on the next dispatch,
/// never retroactively within a pass.
///
/// ## Focus and blur
///
/// `focus_event` fires when a screen becomes the front (topmost) screen:
/// when it is the first screen added to an empty application, or when it is
/// explicitly focused. `blur_event` fires when it ceases to be front: when it
/// is removed, or when another screen is focused over it. A common pattern is
/// to enable input only while focused:
///
/// ```rust
/// use proscenium_screens::{EventSet, PropagatedEvents, Screen};
/// # use proscenium_screens::InputEvent;
/// # struct NoEvents;
/// # #[derive(Default)]
/// # struct Stub(bool);
/// # impl InputEvent for Stub {
/// #     fn set_accepted(&mut self, accepted: bool) { self.0 = accepted; }
/// #     fn is_accepted(&self) -> bool { self.0 }
/// # }
/// # impl EventSet for NoEvents {
/// #     type Viewport = ();
/// #     type Key = Stub;
/// #     type Mouse = Stub;
/// #     type MouseMove = Stub;
/// # }
///
/// struct Menu {
///     flags: PropagatedEvents,
/// }
///
/// impl Screen<NoEvents> for Menu {
///     fn propagated_events(&self) -> PropagatedEvents {
///         self.flags
///     }
///
///     fn focus_event(&mut self) {
///         self.flags = PropagatedEvents::DRAW | PropagatedEvents::INPUT;
///     }
///
///     fn blur_event(&mut self) {
///         self.flags = PropagatedEvents::DRAW;
///     }
/// }
/// ```
pub trait Screen<E: EventSet> {
    /// The event categories this screen currently participates in.
    fn propagated_events(&self) -> PropagatedEvents {
        PropagatedEvents::empty()
    }

    /// Called when this screen becomes the front screen.
    fn focus_event(&mut self) {}

    /// Called when this screen ceases to be the front screen.
    fn blur_event(&mut self) {}

    /// Called on viewport (window resize) dispatch. Reaches every linked
    /// screen, independent of [`propagated_events`](Screen::propagated_events).
    fn viewport_event(&mut self, _event: &mut E::Viewport) {}

    /// Called on draw dispatch for screens with [`PropagatedEvents::DRAW`].
    ///
    /// Screens draw back-to-front, so the front screen paints last and ends up
    /// visually on top.
    fn draw_event(&mut self) {}

    /// Called on key press dispatch for screens with [`PropagatedEvents::INPUT`].
    fn key_press_event(&mut self, _event: &mut E::Key) {}

    /// Called on key release dispatch for screens with [`PropagatedEvents::INPUT`].
    fn key_release_event(&mut self, _event: &mut E::Key) {}

    /// Called on mouse press dispatch for screens with [`PropagatedEvents::INPUT`].
    fn mouse_press_event(&mut self, _event: &mut E::Mouse) {}

    /// Called on mouse release dispatch for screens with [`PropagatedEvents::INPUT`].
    fn mouse_release_event(&mut self, _event: &mut E::Mouse) {}

    /// Called on mouse move dispatch for screens with [`PropagatedEvents::INPUT`].
    fn mouse_move_event(&mut self, _event: &mut E::MouseMove) {}
}
