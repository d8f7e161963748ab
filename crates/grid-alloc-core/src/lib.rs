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


//! # Grid Allocation Core (`grid-alloc-core`)
//!
//! Strongly typed coordinate primitives shared by the grid allocation crates.
//!
//! - **`Position<C>`**: a cell coordinate `(x, y)`. Used both for single cells and for the
//!   anchor (minimum-x, minimum-y corner) of a placed item.
//! - **`Size<C>`**: the `(width, height)` extent of an item or a grid.
//! - **`Footprint<C>`**: an anchored rectangle, i.e. the set of cells an item covers.
//! - **`MaybeIter<T>`**: an optional iterator that yields nothing when absent.
//!
//! All primitives are generic over a signed primitive integer (`GridCoord`), so that negative
//! candidate anchors and degenerate sizes can be expressed and rejected by validation instead of
//! being ruled out by the type system.

pub mod footprint;
pub mod iter;
pub mod position;

use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The numeric type used for grid coordinates and extents.
pub trait GridCoord: PrimInt + Signed + Hash + Default + Send + Sync + Debug + Display {}
impl<T> GridCoord for T where T: PrimInt + Signed + Hash + Default + Send + Sync + Debug + Display {}

pub mod prelude {
    pub use crate::GridCoord;
    pub use crate::footprint::{Footprint, FootprintCells};
    pub use crate::iter::MaybeIter;
    pub use crate::position::{Position, Size};
}
