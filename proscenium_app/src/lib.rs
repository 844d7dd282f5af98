// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=proscenium_app --heading-base-level=0

//! Proscenium App: event dispatch over a stack of layered screens.
//!
//! ## Overview
//!
//! [`ScreenedApp`](crate::app::ScreenedApp) sits between a windowed host (the
//! owner of the window, rendering context, and OS event loop) and a
//! [`ScreenStack`](proscenium_screens::ScreenStack). The host calls one entry
//! point per event; the dispatcher fans the event out to the right screens in
//! the right order:
//!
//! - **Viewport**: the application hook first, then *every* screen
//!   front-to-back, regardless of flags — a resize can matter to a screen that
//!   neither draws nor takes input.
//! - **Draw**: back-to-front over screens with the `DRAW` flag (painter's
//!   algorithm: farthest first, nearest last), then the application hook —
//!   the place to swap buffers or schedule a redraw.
//! - **Input** (key press/release, mouse press/release/move): front-to-back
//!   over screens with the `INPUT` flag; the first handler that marks the
//!   event accepted stops propagation. There is no application-level input
//!   hook — an unaccepted event falls through to whatever the host does by
//!   default.
//!
//! The dispatcher is a concrete type, not a base class: the embedding
//! application customizes it only through [`ApplicationHooks`](crate::app::ApplicationHooks)
//! (a no-op-default viewport hook and a mandatory draw hook), so the dispatch
//! protocol itself cannot be overridden or partially bypassed.
//!
//! ## Focus lifecycle
//!
//! [`ScreenedApp::add_screen`](crate::app::ScreenedApp::add_screen) links at
//! the back and focuses the screen only when it is the first one.
//! [`ScreenedApp::focus_screen`](crate::app::ScreenedApp::focus_screen) blurs
//! the old front, moves the screen to the front, and focuses it — and is a
//! strict no-op when the screen is already front.
//! [`ScreenedApp::remove_screen`](crate::app::ScreenedApp::remove_screen)
//! blurs, unlinks, and returns ownership of the screen.
//!
//! ## Example
//!
//! ```rust
//! use proscenium_app::app::{ApplicationHooks, ScreenedApp};
//! use proscenium_screens::{EventSet, PropagatedEvents, Screen};
//! # use proscenium_screens::InputEvent;
//! #
//! # struct Events;
//! # #[derive(Default)]
//! # struct Input(bool);
//! # impl InputEvent for Input {
//! #     fn set_accepted(&mut self, accepted: bool) { self.0 = accepted; }
//! #     fn is_accepted(&self) -> bool { self.0 }
//! # }
//! # impl EventSet for Events {
//! #     type Viewport = (u32, u32);
//! #     type Key = Input;
//! #     type Mouse = Input;
//! #     type MouseMove = Input;
//! # }
//!
//! struct Game;
//! impl Screen<Events> for Game {
//!     fn propagated_events(&self) -> PropagatedEvents {
//!         PropagatedEvents::DRAW | PropagatedEvents::INPUT
//!     }
//!     fn key_press_event(&mut self, event: &mut Input) {
//!         event.accept();
//!     }
//! }
//!
//! struct Hooks;
//! impl ApplicationHooks<Events> for Hooks {
//!     fn global_draw_event(&mut self) {
//!         // swap buffers, request redraw, ...
//!     }
//! }
//!
//! let mut app = ScreenedApp::new(Hooks);
//! let game = app.add_screen(Box::new(Game)); // first screen: focused
//!
//! // The host's event loop calls straight into the dispatcher.
//! app.viewport_event(&mut (800, 600));
//! app.draw_event();
//! let mut key = Input::default();
//! app.key_press_event(&mut key);
//! assert!(key.is_accepted());
//! # let _ = app.remove_screen(game);
//! ```
//!
//! ## Event payloads
//!
//! Payload types are host-defined through
//! [`EventSet`](proscenium_screens::EventSet). Hosts without their own types
//! can enable the `basic_events` feature for a kurbo-typed family in
//! [`basic_events`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod app;
#[cfg(feature = "basic_events")]
pub mod basic_events;

pub use app::{ApplicationHooks, ScreenedApp};
