// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen stack basics.
//!
//! Three layered screens — a world, a HUD, and a debug overlay — receive a
//! simulated frame's worth of host events, printing the order in which the
//! dispatch protocol visits them.
//!
//! Run:
//! - `cargo run -p proscenium_demos --example screen_stack_basics`

use kurbo::{Point, Size};
use proscenium_app::app::{ApplicationHooks, ScreenedApp};
use proscenium_app::basic_events::{BasicEvents, MouseButton, MouseEvent, ViewportEvent};
use proscenium_screens::{InputEvent, PropagatedEvents, Screen};

/// Prints every callback it receives; accepts mouse presses when asked to.
struct Layer {
    name: &'static str,
    flags: PropagatedEvents,
    accepts_clicks: bool,
}

impl Screen<BasicEvents> for Layer {
    fn propagated_events(&self) -> PropagatedEvents {
        self.flags
    }
    fn focus_event(&mut self) {
        println!("  {:>8}  focus", self.name);
    }
    fn blur_event(&mut self) {
        println!("  {:>8}  blur", self.name);
    }
    fn viewport_event(&mut self, event: &mut ViewportEvent) {
        println!("  {:>8}  viewport {:?}", self.name, event.window_size);
    }
    fn draw_event(&mut self) {
        println!("  {:>8}  draw", self.name);
    }
    fn mouse_press_event(&mut self, event: &mut MouseEvent) {
        println!("  {:>8}  mouse press at {:?}", self.name, event.position);
        if self.accepts_clicks {
            event.accept();
        }
    }
}

struct Hooks;

impl ApplicationHooks<BasicEvents> for Hooks {
    fn global_viewport_event(&mut self, event: &mut ViewportEvent) {
        println!("  {:>8}  global viewport {:?}", "app", event.window_size);
    }
    fn global_draw_event(&mut self) {
        println!("  {:>8}  global draw (swap buffers)", "app");
    }
}

fn main() {
    let mut app = ScreenedApp::new(Hooks);

    // add_screen links at the back, so insertion order is front-to-back
    // order: world nearest, overlay farthest.
    println!("== Adding screens (first one gets focus) ==");
    app.add_screen(Box::new(Layer {
        name: "world",
        flags: PropagatedEvents::DRAW | PropagatedEvents::INPUT,
        accepts_clicks: false,
    }));
    app.add_screen(Box::new(Layer {
        name: "hud",
        flags: PropagatedEvents::DRAW | PropagatedEvents::INPUT,
        accepts_clicks: true,
    }));
    app.add_screen(Box::new(Layer {
        name: "overlay",
        flags: PropagatedEvents::DRAW,
        accepts_clicks: false,
    }));

    println!("== Viewport (global hook first, then every screen) ==");
    app.viewport_event(&mut ViewportEvent::from_size(Size::new(1280.0, 720.0)));

    println!("== Draw (back-to-front, global hook last) ==");
    app.draw_event();

    println!("== Mouse press (front-to-back; the hud accepts it) ==");
    let mut click = MouseEvent::new(MouseButton::Left, Point::new(64.0, 32.0));
    app.mouse_press_event(&mut click);
    println!("  accepted: {}", click.is_accepted());
}
