// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered screen collection: generational slots plus intrusive links.
//!
//! ## Overview
//!
//! [`ScreenStack`] keeps screens in a strict front-to-back total order. Front
//! is nearest to the user (first to see input, last to draw), back is farthest.
//! Entries live in generational slots; each entry carries the ids of its
//! `nearer` and `farther` neighbors, so insertion at either end, removal, and
//! repositioning are pointer surgery on ids — O(1), no reallocation, and the
//! ids of untouched screens stay valid.
//!
//! ## Ordering operations
//!
//! - [`ScreenStack::insert_front`] / [`ScreenStack::insert_back`]
//! - [`ScreenStack::remove`] (no-op `None` when the id is stale)
//! - [`ScreenStack::move_before`] / [`ScreenStack::move_to_front`]
//!
//! ## Traversal
//!
//! [`ScreenStack::iter`] walks front-to-back, [`ScreenStack::iter_back_to_front`]
//! the reverse; both are lazy and restartable. [`ScreenStack::next_farther`]
//! and [`ScreenStack::next_nearer`] navigate stepwise from a given screen,
//! returning `None` at the boundaries or for stale ids. Structural mutation
//! cannot happen mid-traversal: the iterators hold a shared borrow of the
//! stack for their whole pass.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::events::EventSet;
use crate::screen::Screen;

/// Identifier for a screen linked into a [`ScreenStack`].
///
/// This is a small, copyable handle that stays stable while the screen is
/// linked and becomes stale the moment the screen is removed. It consists of a
/// slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a slot is allocated and its generation incremented; fresh
///   slots start at generation `1`.
/// - On remove, the slot is freed; any existing `ScreenId` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, the generation increments again, producing a
///   new, distinct `ScreenId`. A stale id therefore never aliases a live
///   screen.
///
/// Use [`ScreenStack::is_linked`] to check liveness. The stale state plays the
/// role a null back-reference plays in pointer-based designs: every read
/// through a stale id yields `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScreenId(u32, u32);

impl ScreenId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct Entry<E: EventSet> {
    generation: u32,
    /// Neighbor toward the front, `None` when this entry is the front.
    nearer: Option<ScreenId>,
    /// Neighbor toward the back, `None` when this entry is the back.
    farther: Option<ScreenId>,
    screen: Box<dyn Screen<E>>,
}

/// An ordered, front-to-back stack of screens.
///
/// The stack owns each screen only while it is linked: insertion consumes the
/// boxed screen, removal hands it back. See the [crate docs](crate) for the
/// ownership rationale. Dropping the stack drops whatever is still linked, so
/// callers that need a screen to survive teardown remove or
/// [`drain`](ScreenStack::drain) it first.
pub struct ScreenStack<E: EventSet> {
    entries: Vec<Option<Entry<E>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    front: Option<ScreenId>,
    back: Option<ScreenId>,
    len: usize,
}

impl<E: EventSet> core::fmt::Debug for ScreenStack<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenStack")
            .field("len", &self.len)
            .field("slots", &self.entries.len())
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<E: EventSet> Default for ScreenStack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventSet> ScreenStack<E> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Number of screens currently linked.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no screens are linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The nearest (topmost) screen, or `None` when empty.
    pub fn front(&self) -> Option<ScreenId> {
        self.front
    }

    /// The farthest (bottommost) screen, or `None` when empty.
    pub fn back(&self) -> Option<ScreenId> {
        self.back
    }

    /// Whether `id` refers to a screen currently linked into this stack.
    pub fn is_linked(&self, id: ScreenId) -> bool {
        self.entry_opt(id).is_some()
    }

    /// Shared access to a linked screen, or `None` for a stale id.
    pub fn get(&self, id: ScreenId) -> Option<&dyn Screen<E>> {
        self.entry_opt(id).map(|e| e.screen.as_ref())
    }

    /// Exclusive access to a linked screen, or `None` for a stale id.
    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut (dyn Screen<E> + 'static)> {
        self.entry_opt_mut(id).map(|e| e.screen.as_mut())
    }

    /// The next screen toward the back, or `None` at the back boundary or for
    /// a stale id.
    pub fn next_farther(&self, id: ScreenId) -> Option<ScreenId> {
        self.entry_opt(id)?.farther
    }

    /// The next screen toward the front, or `None` at the front boundary or
    /// for a stale id.
    pub fn next_nearer(&self, id: ScreenId) -> Option<ScreenId> {
        self.entry_opt(id)?.nearer
    }

    /// Link `screen` as the new front (nearest) screen.
    pub fn insert_front(&mut self, screen: Box<dyn Screen<E>>) -> ScreenId {
        let id = self.alloc(screen);
        let at = self.front;
        self.link_before(id, at);
        self.len += 1;
        id
    }

    /// Link `screen` as the new back (farthest) screen.
    pub fn insert_back(&mut self, screen: Box<dyn Screen<E>>) -> ScreenId {
        let id = self.alloc(screen);
        self.link_before(id, None);
        self.len += 1;
        id
    }

    /// Unlink a screen and return ownership of it.
    ///
    /// Returns `None` for a stale id (already unlinked). Head and tail are
    /// updated when the removed screen was a boundary.
    pub fn remove(&mut self, id: ScreenId) -> Option<Box<dyn Screen<E>>> {
        if !self.is_linked(id) {
            return None;
        }
        self.unlink(id);
        let entry = self.entries[id.idx()].take().expect("dangling ScreenId");
        self.free_list.push(id.idx());
        self.len -= 1;
        Some(entry.screen)
    }

    /// Reposition `id` so it sits immediately nearer than `before`, without
    /// reallocation. `before = None` moves it to the back.
    ///
    /// No-op when `id` is stale, when `before` is stale, when both name the
    /// same screen, or when `id` already occupies the requested position.
    pub fn move_before(&mut self, id: ScreenId, before: Option<ScreenId>) {
        if !self.is_linked(id) {
            return;
        }
        match before {
            Some(b) => {
                if b == id || !self.is_linked(b) || self.entry(b).nearer == Some(id) {
                    return;
                }
            }
            None => {
                if self.back == Some(id) {
                    return;
                }
            }
        }
        self.unlink(id);
        self.link_before(id, before);
    }

    /// Reposition `id` to the front. This is the focus primitive: the
    /// application layer wraps it with blur/focus notifications.
    pub fn move_to_front(&mut self, id: ScreenId) {
        let at = self.front;
        self.move_before(id, at);
    }

    /// Iterate screens front-to-back.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            stack: self,
            cur: self.front,
            toward_back: true,
        }
    }

    /// Iterate screens back-to-front (draw order).
    pub fn iter_back_to_front(&self) -> Iter<'_, E> {
        Iter {
            stack: self,
            cur: self.back,
            toward_back: false,
        }
    }

    /// Iterate ids front-to-back.
    pub fn ids(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Iterate ids back-to-front (draw order).
    pub fn ids_back_to_front(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.iter_back_to_front().map(|(id, _)| id)
    }

    /// Unlink every screen, front-to-back, yielding ownership of each.
    ///
    /// The stack is empty afterward even when the iterator is dropped early.
    pub fn drain(&mut self) -> Drain<'_, E> {
        Drain { stack: self }
    }

    // --- internals ---

    fn alloc(&mut self, screen: Box<dyn Screen<E>>) -> ScreenId {
        let idx = if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            self.entries.push(None);
            self.generations.push(0);
            self.entries.len() - 1
        };
        let generation = self.generations[idx] + 1;
        self.generations[idx] = generation;
        self.entries[idx] = Some(Entry {
            generation,
            nearer: None,
            farther: None,
            screen,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ScreenId uses 32-bit indices by design."
        )]
        ScreenId::new(idx as u32, generation)
    }

    /// Splice `id` out of the chain, fixing up neighbors and head/tail.
    /// The slot itself is untouched so the entry can be relinked or freed.
    fn unlink(&mut self, id: ScreenId) {
        let (nearer, farther) = {
            let e = self.entry(id);
            (e.nearer, e.farther)
        };
        match nearer {
            Some(n) => self.entry_mut(n).farther = farther,
            None => self.front = farther,
        }
        match farther {
            Some(f) => self.entry_mut(f).nearer = nearer,
            None => self.back = nearer,
        }
        let e = self.entry_mut(id);
        e.nearer = None;
        e.farther = None;
    }

    /// Splice an unlinked `id` into the chain immediately nearer than
    /// `before`; `None` links at the back.
    fn link_before(&mut self, id: ScreenId, before: Option<ScreenId>) {
        match before {
            None => {
                let old_back = self.back;
                {
                    let e = self.entry_mut(id);
                    e.nearer = old_back;
                    e.farther = None;
                }
                match old_back {
                    Some(b) => self.entry_mut(b).farther = Some(id),
                    None => self.front = Some(id),
                }
                self.back = Some(id);
            }
            Some(b) => {
                let nearer = self.entry(b).nearer;
                {
                    let e = self.entry_mut(id);
                    e.nearer = nearer;
                    e.farther = Some(b);
                }
                match nearer {
                    Some(n) => self.entry_mut(n).farther = Some(id),
                    None => self.front = Some(id),
                }
                self.entry_mut(b).nearer = Some(id);
            }
        }
    }

    fn entry(&self, id: ScreenId) -> &Entry<E> {
        self.entries[id.idx()].as_ref().expect("dangling ScreenId")
    }

    fn entry_mut(&mut self, id: ScreenId) -> &mut Entry<E> {
        self.entries[id.idx()].as_mut().expect("dangling ScreenId")
    }

    fn entry_opt(&self, id: ScreenId) -> Option<&Entry<E>> {
        let e = self.entries.get(id.idx())?.as_ref()?;
        if e.generation != id.1 {
            return None;
        }
        Some(e)
    }

    fn entry_opt_mut(&mut self, id: ScreenId) -> Option<&mut Entry<E>> {
        let e = self.entries.get_mut(id.idx())?.as_mut()?;
        if e.generation != id.1 {
            return None;
        }
        Some(e)
    }
}

/// Lazy traversal over a [`ScreenStack`], in either direction.
///
/// Produced by [`ScreenStack::iter`] and [`ScreenStack::iter_back_to_front`].
pub struct Iter<'a, E: EventSet> {
    stack: &'a ScreenStack<E>,
    cur: Option<ScreenId>,
    toward_back: bool,
}

impl<E: EventSet> core::fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("cur", &self.cur)
            .field("toward_back", &self.toward_back)
            .finish_non_exhaustive()
    }
}

impl<'a, E: EventSet> Iterator for Iter<'a, E> {
    type Item = (ScreenId, &'a dyn Screen<E>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let entry = self.stack.entry(id);
        self.cur = if self.toward_back {
            entry.farther
        } else {
            entry.nearer
        };
        Some((id, entry.screen.as_ref()))
    }
}

/// Draining traversal that unlinks front-to-back and yields ownership.
///
/// Produced by [`ScreenStack::drain`]. Any screens not yet yielded are still
/// unlinked (and dropped) when the iterator is dropped.
pub struct Drain<'a, E: EventSet> {
    stack: &'a mut ScreenStack<E>,
}

impl<E: EventSet> core::fmt::Debug for Drain<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Drain")
            .field("remaining", &self.stack.len)
            .finish_non_exhaustive()
    }
}

impl<E: EventSet> Iterator for Drain<'_, E> {
    type Item = Box<dyn Screen<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.front()?;
        self.stack.remove(id)
    }
}

impl<E: EventSet> Drop for Drain<'_, E> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
