// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Listener registry for inventory notifications.
//!
//! Each notification kind keeps its own list; listeners run synchronously in registration
//! order on the caller's thread.

use crate::item::Item;
use grid_alloc_core::{GridCoord, position::Position};
use std::fmt::Display;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Added,
    Removed,
    Moved,
    Cleared,
}

type PlacementListener<C> = Box<dyn FnMut(&Item<C>, Position<C>)>;
type ClearListener = Box<dyn FnMut()>;

pub(crate) struct Listeners<C: GridCoord> {
    next_id: u64,
    added: Vec<(ListenerId, PlacementListener<C>)>,
    removed: Vec<(ListenerId, PlacementListener<C>)>,
    moved: Vec<(ListenerId, PlacementListener<C>)>,
    cleared: Vec<(ListenerId, ClearListener)>,
}

impl<C: GridCoord> Default for Listeners<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            added: Vec::new(),
            removed: Vec::new(),
            moved: Vec::new(),
            cleared: Vec::new(),
        }
    }
}

impl<C: GridCoord> Listeners<C> {
    #[inline]
    fn allocate(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn register_placement(
        &mut self,
        kind: EventKind,
        listener: PlacementListener<C>,
    ) -> ListenerId {
        let id = self.allocate();
        match kind {
            EventKind::Added => self.added.push((id, listener)),
            EventKind::Removed => self.removed.push((id, listener)),
            EventKind::Moved => self.moved.push((id, listener)),
            EventKind::Cleared => unreachable!("cleared listeners take no arguments"),
        }
        id
    }

    pub(crate) fn register_cleared(&mut self, listener: ClearListener) -> ListenerId {
        let id = self.allocate();
        self.cleared.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        fn drop_from<L>(list: &mut Vec<(ListenerId, L)>, id: ListenerId) -> bool {
            match list.iter().position(|(lid, _)| *lid == id) {
                Some(idx) => {
                    list.remove(idx);
                    true
                }
                None => false,
            }
        }
        drop_from(&mut self.added, id)
            || drop_from(&mut self.removed, id)
            || drop_from(&mut self.moved, id)
            || drop_from(&mut self.cleared, id)
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Added => self.added.len(),
            EventKind::Removed => self.removed.len(),
            EventKind::Moved => self.moved.len(),
            EventKind::Cleared => self.cleared.len(),
        }
    }

    pub(crate) fn emit_added(&mut self, item: &Item<C>, anchor: Position<C>) {
        for (_, listener) in self.added.iter_mut() {
            listener(item, anchor);
        }
    }

    pub(crate) fn emit_removed(&mut self, item: &Item<C>, anchor: Position<C>) {
        for (_, listener) in self.removed.iter_mut() {
            listener(item, anchor);
        }
    }

    pub(crate) fn emit_moved(&mut self, item: &Item<C>, anchor: Position<C>) {
        for (_, listener) in self.moved.iter_mut() {
            listener(item, anchor);
        }
    }

    pub(crate) fn emit_cleared(&mut self) {
        for (_, listener) in self.cleared.iter_mut() {
            listener();
        }
    }
}
