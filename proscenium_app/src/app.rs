// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The screened application dispatcher and its extension hooks.
//!
//! ## Overview
//!
//! [`ScreenedApp`] implements the ordering, propagation, and lifecycle
//! contract over a [`ScreenStack`]; [`ApplicationHooks`] is the embedding
//! application's only customization surface. Everything here is synchronous:
//! each entry point runs every relevant handler to completion before
//! returning to the host, and handlers receive only `&mut self` plus the
//! event payload, so the stack cannot be restructured from inside a pass.
//!
//! ## Contract violations
//!
//! Screen-management operations check their preconditions and panic on
//! misuse: removing or focusing a screen that is not linked in this
//! application is a programming error, not a recoverable condition. The
//! collection-level operations behind them stay tolerant (see
//! [`ScreenStack`]); the contract is enforced here, at the protocol layer.

use alloc::boxed::Box;

use proscenium_screens::{EventSet, InputEvent, PropagatedEvents, Screen, ScreenId, ScreenStack};

/// Extension points for the embedding application.
///
/// These are the only two places application-global behavior participates in
/// dispatch. Input events deliberately have no global hook: when no screen
/// accepts an input event, it falls through to the host's own default
/// handling, the same as any event the host defines outside this protocol.
pub trait ApplicationHooks<E: EventSet> {
    /// Called on viewport dispatch, *before* any screen's `viewport_event`.
    fn global_viewport_event(&mut self, _event: &mut E::Viewport) {}

    /// Called on draw dispatch, *after* every participating screen has drawn.
    ///
    /// This is where the application swaps buffers, draws global overlays, or
    /// schedules the next redraw.
    fn global_draw_event(&mut self);
}

/// An application base with screen management.
///
/// Composes a [`ScreenStack`] with a user-supplied [`ApplicationHooks`]
/// value. The host's event loop calls the `*_event` entry points; user code
/// manages membership and focus through [`add_screen`](ScreenedApp::add_screen),
/// [`remove_screen`](ScreenedApp::remove_screen), and
/// [`focus_screen`](ScreenedApp::focus_screen). See the
/// [crate docs](crate) for the full dispatch protocol.
pub struct ScreenedApp<E: EventSet, H: ApplicationHooks<E>> {
    screens: ScreenStack<E>,
    hooks: H,
}

impl<E: EventSet, H: ApplicationHooks<E>> core::fmt::Debug for ScreenedApp<E, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenedApp")
            .field("screens", &self.screens)
            .finish_non_exhaustive()
    }
}

impl<E: EventSet, H: ApplicationHooks<E>> ScreenedApp<E, H> {
    /// Create a dispatcher with no screens and the given hooks.
    pub fn new(hooks: H) -> Self {
        Self {
            screens: ScreenStack::new(),
            hooks,
        }
    }

    /// Add a screen as the backmost.
    ///
    /// If this is the first screen added, its `focus_event` is invoked; an
    /// application with exactly one screen treats it as focused. Otherwise
    /// neither `focus_event` nor `blur_event` runs — the screen keeps its
    /// default (blurred) state until focused explicitly.
    pub fn add_screen(&mut self, screen: Box<dyn Screen<E>>) -> ScreenId {
        let first = self.screens.is_empty();
        let id = self.screens.insert_back(screen);
        if first {
            self.screens
                .get_mut(id)
                .expect("dangling ScreenId")
                .focus_event();
        }
        id
    }

    /// Remove a screen, returning ownership of it.
    ///
    /// The screen is blurred before it is unlinked. Panics when `id` is not
    /// linked in this application (a contract violation, not a runtime
    /// fault).
    pub fn remove_screen(&mut self, id: ScreenId) -> Box<dyn Screen<E>> {
        self.screens
            .get_mut(id)
            .expect("remove_screen: dangling ScreenId")
            .blur_event();
        // Handlers cannot restructure the stack, so the id is still live.
        self.screens.remove(id).expect("dangling ScreenId")
    }

    /// Move a screen to the front, transferring focus to it.
    ///
    /// The previously focused (front) screen is blurred, then `id` moves to
    /// the front and is focused. When `id` is already the front screen this
    /// is a complete no-op: no blur, no focus. Panics when `id` is not
    /// linked in this application.
    pub fn focus_screen(&mut self, id: ScreenId) {
        assert!(
            self.screens.is_linked(id),
            "focus_screen: dangling ScreenId"
        );
        let front = self.screens.front().expect("linked id implies non-empty");
        if front == id {
            return;
        }
        self.screens
            .get_mut(front)
            .expect("dangling ScreenId")
            .blur_event();
        self.screens.move_to_front(id);
        self.screens
            .get_mut(id)
            .expect("dangling ScreenId")
            .focus_event();
    }

    /// The application's screens, front-to-back.
    pub fn screens(&self) -> &ScreenStack<E> {
        &self.screens
    }

    /// Mutable access to the screens, front-to-back.
    ///
    /// Intended for reaching into screen state and for reordering outside the
    /// focus protocol; ordering changes made here do not emit focus/blur
    /// notifications.
    pub fn screens_mut(&mut self) -> &mut ScreenStack<E> {
        &mut self.screens
    }

    /// The embedded hooks value.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the embedded hooks value.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Consume the dispatcher, dropping any remaining screens and returning
    /// the hooks value.
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    // --- event entry points, called by the host ---

    /// Viewport dispatch: the global hook, then every screen front-to-back.
    ///
    /// All screens receive this event, independent of their propagation
    /// flags.
    pub fn viewport_event(&mut self, event: &mut E::Viewport) {
        self.hooks.global_viewport_event(event);
        let mut cur = self.screens.front();
        while let Some(id) = cur {
            cur = self.screens.next_farther(id);
            self.screens
                .get_mut(id)
                .expect("dangling ScreenId")
                .viewport_event(event);
        }
    }

    /// Draw dispatch: participating screens back-to-front, then the global
    /// hook.
    pub fn draw_event(&mut self) {
        let mut cur = self.screens.back();
        while let Some(id) = cur {
            cur = self.screens.next_nearer(id);
            let screen = self.screens.get_mut(id).expect("dangling ScreenId");
            if screen.propagated_events().contains(PropagatedEvents::DRAW) {
                screen.draw_event();
            }
        }
        self.hooks.global_draw_event();
    }

    /// Key press dispatch (front-to-back, stops on acceptance).
    pub fn key_press_event(&mut self, event: &mut E::Key) {
        self.propagate_input(event, |screen, event| screen.key_press_event(event));
    }

    /// Key release dispatch (front-to-back, stops on acceptance).
    pub fn key_release_event(&mut self, event: &mut E::Key) {
        self.propagate_input(event, |screen, event| screen.key_release_event(event));
    }

    /// Mouse press dispatch (front-to-back, stops on acceptance).
    pub fn mouse_press_event(&mut self, event: &mut E::Mouse) {
        self.propagate_input(event, |screen, event| screen.mouse_press_event(event));
    }

    /// Mouse release dispatch (front-to-back, stops on acceptance).
    pub fn mouse_release_event(&mut self, event: &mut E::Mouse) {
        self.propagate_input(event, |screen, event| screen.mouse_release_event(event));
    }

    /// Mouse move dispatch (front-to-back, stops on acceptance).
    pub fn mouse_move_event(&mut self, event: &mut E::MouseMove) {
        self.propagate_input(event, |screen, event| screen.mouse_move_event(event));
    }

    /// Shared input walk: front-to-back over screens with the `INPUT` flag;
    /// the acceptance check runs after each delivery, so the accepting
    /// screen's own handler always completes.
    fn propagate_input<P: InputEvent>(
        &mut self,
        event: &mut P,
        mut deliver: impl FnMut(&mut dyn Screen<E>, &mut P),
    ) {
        let mut cur = self.screens.front();
        while let Some(id) = cur {
            cur = self.screens.next_farther(id);
            let screen = self.screens.get_mut(id).expect("dangling ScreenId");
            if !screen.propagated_events().contains(PropagatedEvents::INPUT) {
                continue;
            }
            deliver(screen, &mut *event);
            if event.is_accepted() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<(&'static str, &'static str)>>>;

    struct TestEvents;

    #[derive(Default)]
    struct Input(bool);

    impl InputEvent for Input {
        fn set_accepted(&mut self, accepted: bool) {
            self.0 = accepted;
        }
        fn is_accepted(&self) -> bool {
            self.0
        }
    }

    impl EventSet for TestEvents {
        type Viewport = (u32, u32);
        type Key = Input;
        type Mouse = Input;
        type MouseMove = Input;
    }

    /// Records every callback into a shared log; optionally accepts one kind
    /// of input event.
    struct Probe {
        name: &'static str,
        flags: PropagatedEvents,
        accepts: Option<&'static str>,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, flags: PropagatedEvents, log: &Log) -> Self {
            Self {
                name,
                flags,
                accepts: None,
                log: log.clone(),
            }
        }

        fn accepting(name: &'static str, kind: &'static str, log: &Log) -> Self {
            Self {
                name,
                flags: PropagatedEvents::INPUT,
                accepts: Some(kind),
                log: log.clone(),
            }
        }

        fn hit(&self, what: &'static str) {
            self.log.borrow_mut().push((self.name, what));
        }

        fn input(&self, what: &'static str, event: &mut Input) {
            self.hit(what);
            if self.accepts == Some(what) {
                event.accept();
            }
        }
    }

    impl Screen<TestEvents> for Probe {
        fn propagated_events(&self) -> PropagatedEvents {
            self.flags
        }
        fn focus_event(&mut self) {
            self.hit("focus");
        }
        fn blur_event(&mut self) {
            self.hit("blur");
        }
        fn viewport_event(&mut self, _event: &mut (u32, u32)) {
            self.hit("viewport");
        }
        fn draw_event(&mut self) {
            self.hit("draw");
        }
        fn key_press_event(&mut self, event: &mut Input) {
            self.input("key_press", event);
        }
        fn key_release_event(&mut self, event: &mut Input) {
            self.input("key_release", event);
        }
        fn mouse_press_event(&mut self, event: &mut Input) {
            self.input("mouse_press", event);
        }
        fn mouse_release_event(&mut self, event: &mut Input) {
            self.input("mouse_release", event);
        }
        fn mouse_move_event(&mut self, event: &mut Input) {
            self.input("mouse_move", event);
        }
    }

    struct Hooks {
        log: Log,
    }

    impl ApplicationHooks<TestEvents> for Hooks {
        fn global_viewport_event(&mut self, _event: &mut (u32, u32)) {
            self.log.borrow_mut().push(("app", "global_viewport"));
        }
        fn global_draw_event(&mut self) {
            self.log.borrow_mut().push(("app", "global_draw"));
        }
    }

    fn new_app(log: &Log) -> ScreenedApp<TestEvents, Hooks> {
        ScreenedApp::new(Hooks { log: log.clone() })
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    const BOTH: PropagatedEvents = PropagatedEvents::DRAW.union(PropagatedEvents::INPUT);

    #[test]
    fn first_screen_added_is_focused() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        assert_eq!(*log.borrow(), vec![("a", "focus")]);
    }

    #[test]
    fn later_screens_are_added_without_focus_or_blur() {
        let log = new_log();
        let mut app = new_app(&log);
        let a = app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        log.borrow_mut().clear();
        let b = app.add_screen(Box::new(Probe::new("b", BOTH, &log)));
        assert!(log.borrow().is_empty(), "no focus/blur on subsequent adds");
        // Added at the back: a stays in front.
        assert_eq!(app.screens().front(), Some(a));
        assert_eq!(app.screens().back(), Some(b));
    }

    #[test]
    fn remove_screen_blurs_then_unlinks() {
        let log = new_log();
        let mut app = new_app(&log);
        let a = app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        log.borrow_mut().clear();
        let screen = app.remove_screen(a);
        assert_eq!(*log.borrow(), vec![("a", "blur")]);
        assert!(!app.screens().is_linked(a));
        assert!(app.screens().is_empty());
        // Ownership came back; the object is still alive and usable.
        assert_eq!(screen.propagated_events(), BOTH);
    }

    #[test]
    fn focus_screen_swaps_blur_then_focus() {
        let log = new_log();
        let mut app = new_app(&log);
        let a = app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        let b = app.add_screen(Box::new(Probe::new("b", BOTH, &log)));
        log.borrow_mut().clear();

        app.focus_screen(b);
        assert_eq!(*log.borrow(), vec![("a", "blur"), ("b", "focus")]);
        let order: Vec<ScreenId> = app.screens().ids().collect();
        assert_eq!(order, vec![b, a]);

        // Focusing the front screen again is a complete no-op.
        log.borrow_mut().clear();
        app.focus_screen(b);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn draw_runs_back_to_front_then_global_hook() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::new("a", PropagatedEvents::DRAW, &log)));
        app.add_screen(Box::new(Probe::new("b", PropagatedEvents::DRAW, &log)));
        app.add_screen(Box::new(Probe::new("c", PropagatedEvents::DRAW, &log)));
        log.borrow_mut().clear();

        app.draw_event();
        assert_eq!(
            *log.borrow(),
            vec![
                ("c", "draw"),
                ("b", "draw"),
                ("a", "draw"),
                ("app", "global_draw"),
            ]
        );
    }

    #[test]
    fn draw_skips_screens_without_the_draw_flag() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::new("a", PropagatedEvents::DRAW, &log)));
        app.add_screen(Box::new(Probe::new("b", PropagatedEvents::INPUT, &log)));
        log.borrow_mut().clear();

        app.draw_event();
        assert_eq!(*log.borrow(), vec![("a", "draw"), ("app", "global_draw")]);
    }

    #[test]
    fn accepted_input_stops_at_the_accepting_screen() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::new("a", PropagatedEvents::INPUT, &log)));
        app.add_screen(Box::new(Probe::accepting("b", "mouse_press", &log)));
        app.add_screen(Box::new(Probe::new("c", PropagatedEvents::INPUT, &log)));
        log.borrow_mut().clear();

        let mut event = Input::default();
        app.mouse_press_event(&mut event);
        assert!(event.is_accepted());
        // Front-to-back through the acceptor; c never sees the event.
        assert_eq!(
            *log.borrow(),
            vec![("a", "mouse_press"), ("b", "mouse_press")]
        );
    }

    #[test]
    fn unaccepted_input_reaches_every_input_screen() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::new("a", PropagatedEvents::INPUT, &log)));
        app.add_screen(Box::new(Probe::new("b", PropagatedEvents::DRAW, &log)));
        app.add_screen(Box::new(Probe::new("c", PropagatedEvents::INPUT, &log)));
        log.borrow_mut().clear();

        let mut event = Input::default();
        app.key_press_event(&mut event);
        assert!(!event.is_accepted());
        // b lacks the INPUT flag and is skipped.
        assert_eq!(*log.borrow(), vec![("a", "key_press"), ("c", "key_press")]);
    }

    #[test]
    fn each_input_kind_follows_the_same_protocol() {
        let log = new_log();
        let mut app = new_app(&log);
        app.add_screen(Box::new(Probe::accepting("a", "mouse_move", &log)));
        app.add_screen(Box::new(Probe::new("b", PropagatedEvents::INPUT, &log)));
        log.borrow_mut().clear();

        app.key_release_event(&mut Input::default());
        app.mouse_release_event(&mut Input::default());
        app.mouse_move_event(&mut Input::default());
        assert_eq!(
            *log.borrow(),
            vec![
                ("a", "key_release"),
                ("b", "key_release"),
                ("a", "mouse_release"),
                ("b", "mouse_release"),
                // a accepts mouse_move, so b never sees it.
                ("a", "mouse_move"),
            ]
        );
    }

    #[test]
    fn viewport_hits_global_hook_then_all_screens_front_to_back() {
        let log = new_log();
        let mut app = new_app(&log);
        // Neither DRAW nor INPUT: viewport must still arrive.
        app.add_screen(Box::new(Probe::new("a", PropagatedEvents::empty(), &log)));
        app.add_screen(Box::new(Probe::new("b", PropagatedEvents::empty(), &log)));
        log.borrow_mut().clear();

        app.viewport_event(&mut (1024, 768));
        assert_eq!(
            *log.borrow(),
            vec![
                ("app", "global_viewport"),
                ("a", "viewport"),
                ("b", "viewport"),
            ]
        );
    }

    /// A screen that takes input only while focused, the way pause menus and
    /// modal overlays usually behave.
    struct FocusGated {
        flags: PropagatedEvents,
        log: Log,
    }

    impl Screen<TestEvents> for FocusGated {
        fn propagated_events(&self) -> PropagatedEvents {
            self.flags
        }
        fn focus_event(&mut self) {
            self.flags = BOTH;
        }
        fn blur_event(&mut self) {
            self.flags = PropagatedEvents::DRAW;
        }
        fn key_press_event(&mut self, event: &mut Input) {
            self.log.borrow_mut().push(("gated", "key_press"));
            event.accept();
        }
    }

    #[test]
    fn flag_changes_take_effect_on_the_next_dispatch() {
        let log = new_log();
        let mut app = new_app(&log);
        let _base = app.add_screen(Box::new(Probe::new("base", PropagatedEvents::INPUT, &log)));
        let gated = app.add_screen(Box::new(FocusGated {
            flags: PropagatedEvents::DRAW,
            log: log.clone(),
        }));
        log.borrow_mut().clear();

        // Blurred: the gated screen has no INPUT flag, so base sees the key.
        app.key_press_event(&mut Input::default());
        assert_eq!(*log.borrow(), vec![("base", "key_press")]);
        log.borrow_mut().clear();

        // Focused: the gated screen moves to the front and now takes input.
        app.focus_screen(gated);
        app.key_press_event(&mut Input::default());
        assert_eq!(
            *log.borrow(),
            vec![("base", "blur"), ("gated", "key_press")]
        );
    }

    #[test]
    #[should_panic(expected = "dangling ScreenId")]
    fn remove_screen_panics_on_stale_id() {
        let log = new_log();
        let mut app = new_app(&log);
        let a = app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        let _ = app.remove_screen(a);
        let _ = app.remove_screen(a);
    }

    #[test]
    #[should_panic(expected = "dangling ScreenId")]
    fn focus_screen_panics_on_stale_id() {
        let log = new_log();
        let mut app = new_app(&log);
        let a = app.add_screen(Box::new(Probe::new("a", BOTH, &log)));
        let _ = app.remove_screen(a);
        app.focus_screen(a);
    }

    #[test]
    fn hooks_accessors_reach_the_embedded_value() {
        let log = new_log();
        let mut app = new_app(&log);
        app.hooks_mut().log.borrow_mut().push(("app", "poke"));
        assert_eq!(app.hooks().log.borrow().last(), Some(&("app", "poke")));
        let hooks = app.into_hooks();
        assert_eq!(hooks.log.borrow().last(), Some(&("app", "poke")));
    }
}
