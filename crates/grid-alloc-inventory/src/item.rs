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


use grid_alloc_core::{GridCoord, position::Size};
use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// The identity handle of an [`Item`].
///
/// Handles are allocated from a process-wide counter and are never reused, so two items
/// constructed independently never share a handle.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// An immutable rectangular item.
///
/// Equality and hashing use the identity handle only: a clone of an item *is* the same
/// item, while two items with equal name and size are still distinct. The size is not
/// validated here; every inventory entry point rejects non-positive sizes.
#[derive(Debug, Clone)]
pub struct Item<C = i32> {
    id: ItemId,
    name: Option<Arc<str>>,
    size: Size<C>,
}

impl<C: GridCoord> Item<C> {
    pub fn new(name: Option<&str>, size: Size<C>) -> Self {
        Self {
            id: ItemId::next(),
            name: name.map(Arc::from),
            size,
        }
    }

    #[inline]
    pub fn named(name: &str, width: C, height: C) -> Self {
        Self::new(Some(name), Size::new(width, height))
    }

    #[inline]
    pub fn unnamed(width: C, height: C) -> Self {
        Self::new(None, Size::new(width, height))
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn size(&self) -> Size<C> {
        self.size
    }

    #[inline]
    pub fn width(&self) -> C {
        self.size.width()
    }

    #[inline]
    pub fn height(&self) -> C {
        self.size.height()
    }
}

impl<C> PartialEq for Item<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Item<C> {}

impl<C> Hash for Item<C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<C: GridCoord> Display for Item<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Item({:?}, {}, {})", name, self.size, self.id),
            None => write!(f, "Item({}, {})", self.size, self.id),
        }
    }
}
