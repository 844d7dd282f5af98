// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event payload contracts consumed from the host application framework.
//!
//! ## Overview
//!
//! The host — whatever owns the window and the OS event loop — defines the
//! concrete payload types for viewport, key, and mouse events. This crate
//! never constructs those payloads; it only forwards them to screens by
//! mutable reference. The two traits here describe the minimum it needs to
//! know about them:
//!
//! - [`EventSet`] groups the host's payload types into one type-level family,
//!   so [`Screen`](crate::screen::Screen) implementations are written against
//!   a single parameter.
//! - [`InputEvent`] is the "accepted" marker contract on input payloads.
//!   A handler that accepts an event stops it from propagating to farther
//!   (more background) screens.
//!
//! `proscenium_app` ships a ready-made kurbo-based family behind its
//! `basic_events` feature for hosts that do not bring their own.

/// A family of host-defined event payload types.
///
/// Implementations are typically zero-sized marker types; the interesting
/// types are the associated payloads. Key press and key release share one
/// payload type, as do mouse press and mouse release.
pub trait EventSet: 'static {
    /// Viewport (window resize) event payload.
    type Viewport;
    /// Key press/release event payload.
    type Key: InputEvent;
    /// Mouse button press/release event payload.
    type Mouse: InputEvent;
    /// Mouse move event payload.
    type MouseMove: InputEvent;
}

/// The acceptance marker carried by every input event payload.
///
/// Dispatch checks [`is_accepted`](InputEvent::is_accepted) after each
/// screen's handler runs; once set, propagation stops immediately and no
/// farther screen sees the event. Acceptance is a control-flow signal, not an
/// error: an event nobody accepts simply falls through to whatever default
/// handling the host provides.
pub trait InputEvent {
    /// Set or clear the accepted marker.
    fn set_accepted(&mut self, accepted: bool);

    /// Whether a handler has marked this event accepted.
    fn is_accepted(&self) -> bool;

    /// Mark the event accepted, halting propagation after the current handler.
    fn accept(&mut self) {
        self.set_accepted(true);
    }
}
