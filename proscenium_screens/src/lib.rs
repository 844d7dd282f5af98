// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=proscenium_screens --heading-base-level=0

//! Proscenium Screens: an ordered stack of layered UI screens.
//!
//! ## Overview
//!
//! A *screen* is an independent, layered unit of UI logic: a game level, a HUD,
//! a pause menu, a debug overlay. Screens are stacked front-to-back — front is
//! nearest to the user, back is farthest — and each screen opts into the event
//! categories it wants to receive via [`PropagatedEvents`](crate::screen::PropagatedEvents).
//!
//! This crate provides the two lower layers of that model:
//!
//! - [`Screen`](crate::screen::Screen): the per-screen handler trait, with
//!   empty defaults for every event so concrete screens override only what
//!   they care about.
//! - [`ScreenStack`](crate::stack::ScreenStack): the ordered collection.
//!   Insertion at either end, removal, and move-to-front are all O(1);
//!   iteration is stable in both directions. Handles are generational
//!   ([`ScreenId`](crate::stack::ScreenId)), so a removed screen's id can
//!   never alias a later one.
//!
//! Event *dispatch* — which screens see which event, in which order, and when
//! propagation stops — lives one layer up, in `proscenium_app`.
//!
//! ## Ownership
//!
//! The stack owns a screen only while it is linked. [`ScreenStack::insert_back`](crate::stack::ScreenStack::insert_back)
//! consumes the boxed screen and hands back a [`ScreenId`](crate::stack::ScreenId);
//! [`ScreenStack::remove`](crate::stack::ScreenStack::remove) returns the box
//! to the caller. A screen therefore outlives its membership whenever the
//! caller wants it to.
//!
//! ## Example
//!
//! ```rust
//! use proscenium_screens::{EventSet, Screen, ScreenStack};
//!
//! // The host defines the event payload types; tests and small hosts can use
//! // trivial ones.
//! struct NoEvents;
//! # use proscenium_screens::InputEvent;
//! # #[derive(Default)]
//! # struct Stub(bool);
//! # impl InputEvent for Stub {
//! #     fn set_accepted(&mut self, accepted: bool) { self.0 = accepted; }
//! #     fn is_accepted(&self) -> bool { self.0 }
//! # }
//! impl EventSet for NoEvents {
//!     type Viewport = ();
//!     type Key = Stub;
//!     type Mouse = Stub;
//!     type MouseMove = Stub;
//! }
//!
//! struct Overlay;
//! impl Screen<NoEvents> for Overlay {}
//!
//! let mut stack: ScreenStack<NoEvents> = ScreenStack::new();
//! let back = stack.insert_back(Box::new(Overlay));
//! let front = stack.insert_front(Box::new(Overlay));
//!
//! assert_eq!(stack.front(), Some(front));
//! assert_eq!(stack.next_farther(front), Some(back));
//! assert_eq!(stack.next_farther(back), None);
//!
//! // Move-to-front is how focus changes are implemented upstairs.
//! stack.move_to_front(back);
//! assert_eq!(stack.front(), Some(back));
//!
//! // Removal returns ownership.
//! let screen: Box<dyn Screen<NoEvents>> = stack.remove(front).unwrap();
//! # let _ = screen;
//! assert!(!stack.is_linked(front));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod events;
pub mod screen;
pub mod stack;

pub use events::{EventSet, InputEvent};
pub use screen::{PropagatedEvents, Screen};
pub use stack::{ScreenId, ScreenStack};
