// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A modal pause menu over a game screen.
//!
//! The game screen takes input while focused. Pressing Escape focuses the
//! pause menu, which then swallows every key until Escape is pressed again,
//! at which point the application hands focus back. The menu keeps drawing
//! (dimmed background, say) whether or not it is focused; it takes input only
//! while focused — the flag flip happens inside its own focus/blur handlers.
//!
//! Run:
//! - `cargo run -p proscenium_demos --example modal_pause_menu`

use proscenium_app::app::{ApplicationHooks, ScreenedApp};
use proscenium_app::basic_events::{BasicEvents, Key, KeyEvent};
use proscenium_screens::{InputEvent, PropagatedEvents, Screen};

struct GameScreen;

impl Screen<BasicEvents> for GameScreen {
    fn propagated_events(&self) -> PropagatedEvents {
        PropagatedEvents::DRAW | PropagatedEvents::INPUT
    }
    fn focus_event(&mut self) {
        println!("  game: resumed");
    }
    fn blur_event(&mut self) {
        println!("  game: paused");
    }
    fn draw_event(&mut self) {
        println!("  game: draw");
    }
    fn key_press_event(&mut self, event: &mut KeyEvent) {
        // Escape falls through to the host; everything else is gameplay.
        if event.key != Key::Esc {
            println!("  game: handling {:?}", event.key);
            event.accept();
        }
    }
}

struct PauseMenu {
    flags: PropagatedEvents,
}

impl PauseMenu {
    fn new() -> Self {
        Self {
            flags: PropagatedEvents::DRAW,
        }
    }
}

impl Screen<BasicEvents> for PauseMenu {
    fn propagated_events(&self) -> PropagatedEvents {
        self.flags
    }
    fn focus_event(&mut self) {
        self.flags = PropagatedEvents::DRAW | PropagatedEvents::INPUT;
        println!("  menu: opened");
    }
    fn blur_event(&mut self) {
        self.flags = PropagatedEvents::DRAW;
        println!("  menu: closed");
    }
    fn draw_event(&mut self) {
        println!("  menu: draw");
    }
    fn key_press_event(&mut self, event: &mut KeyEvent) {
        // Modal: swallow everything except Escape, which the host uses to
        // leave the menu.
        if event.key != Key::Esc {
            println!("  menu: navigating with {:?}", event.key);
            event.accept();
        }
    }
}

struct Hooks;

impl ApplicationHooks<BasicEvents> for Hooks {
    fn global_draw_event(&mut self) {
        println!("  app: swap buffers");
    }
}

fn main() {
    let mut app = ScreenedApp::new(Hooks);
    let game = app.add_screen(Box::new(GameScreen));
    let menu = app.add_screen(Box::new(PauseMenu::new()));

    // A tiny stand-in for the host's event loop: feed keys, toggle the menu
    // whenever Escape falls through unaccepted.
    let script = [
        Key::Character('w'),
        Key::Esc,
        Key::Down,
        Key::Enter,
        Key::Esc,
        Key::Character('d'),
    ];

    let mut paused = false;
    for key in script {
        println!("== key {key:?} ==");
        let mut event = KeyEvent::new(key);
        app.key_press_event(&mut event);
        if !event.is_accepted() && key == Key::Esc {
            paused = !paused;
            app.focus_screen(if paused { menu } else { game });
        }
        app.draw_event();
    }
}
