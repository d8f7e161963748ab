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


//! # Grid Inventory (`grid-alloc-inventory`)
//!
//! A deterministic allocator for axis-aligned rectangular items on a fixed-size 2D grid.
//! It guarantees collision-free occupancy and supports first-fit free-space search, in-place
//! relocation and a defragmentation pass that repacks every item.
//!
//! ## Key Types
//!
//! - **`Item<C>`**: an immutable item with an identity handle (`ItemId`), an optional name and
//!   a size. Equality is by handle.
//! - **`Inventory<C>`**: the facade. Places, removes, moves and queries items and notifies
//!   registered listeners (`Added`, `Removed`, `Moved`, `Cleared`) synchronously.
//! - **`GridIndex<C>`**: dense occupancy table plus the insertion-ordered position map.
//! - **`PlacementValidator`** and **`FreePositionSearch`**: side-effect free feasibility checks
//!   and the raster-order first-fit scan.
//! - **`SpaceOptimizer`**: the greedy sort-and-repack [`optimize::Repacker`].
//! - **`LayoutGenerator`**: seeded random layouts for tests, demos and benchmarks.
//!
//! ## Determinism
//!
//! Free-position search always scans rows top to bottom and, within a row, left to right.
//! Repacking orders items by area descending, height ascending, insertion order ascending.
//! Both orders are part of the observable behaviour.

pub mod config;
pub mod err;
pub mod events;
pub mod generator;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod optimize;
pub mod search;
pub mod stats;
pub mod validate;

pub mod prelude {
    pub use crate::config::{ConstructionPolicy, InventoryConfig, InventoryConfigBuilder};
    pub use crate::err::{
        ErrorKind, InitialPlacementError, InvalidGridDimensionsError, InvalidSizeError,
        InventoryConfigBuildError, InventoryError, ItemNotFoundError, MatrixShapeError,
        LayoutBoundsMismatchError, LayoutItemsMismatchError, NoFreePositionError,
        PositionOutOfRangeError, RepackError,
    };
    pub use crate::events::{EventKind, ListenerId};
    pub use crate::generator::{
        LayoutGenConfig, LayoutGenConfigBuildError, LayoutGenConfigBuilder, LayoutGenerator,
    };
    pub use crate::grid::{CellRead, GridIndex, PlacedItem};
    pub use crate::inventory::Inventory;
    pub use crate::item::{Item, ItemId};
    pub use crate::optimize::{Repacker, SpaceOptimizer};
    pub use crate::search::FreePositionSearch;
    pub use crate::stats::InventoryStats;
    pub use crate::validate::PlacementValidator;
}
