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


//! # Space optimization
//!
//! A [`Repacker`] computes a fresh layout for every item of a grid. [`SpaceOptimizer`] is the
//! greedy sort-and-repack strategy: items are ordered by area descending, then height
//! ascending, then insertion order, and placed one by one at their first free anchor on an
//! empty grid, with the same primitive that first-fit insertion uses.
//!
//! A repacked layout is only accepted when it has the bounds of the original and holds
//! exactly its items. The moves to report are derived from the accepted layout.

use crate::{
    err::{
        LayoutBoundsMismatchError, LayoutItemsMismatchError, NoFreePositionError, RepackError,
    },
    grid::{CellRead, GridIndex, PlacedItem},
    item::Item,
};
use grid_alloc_core::{GridCoord, position::Position};
use std::cmp::Ordering;

pub trait Repacker<C: GridCoord> {
    /// Computes a new layout for every item of `grid` without touching `grid`.
    ///
    /// The returned layout must have the bounds of `grid` and hold exactly its items.
    fn repack(&self, grid: &GridIndex<C>) -> Result<GridIndex<C>, RepackError<C>>;
}

/// Checks that `packed` may replace `original`.
///
/// Returns the items whose anchor changed, with their new anchor, in the placement order of
/// `packed`.
pub(crate) fn verified_moves<C: GridCoord>(
    original: &GridIndex<C>,
    packed: &GridIndex<C>,
) -> Result<Vec<(Item<C>, Position<C>)>, RepackError<C>> {
    if packed.bounds() != original.bounds() {
        return Err(LayoutBoundsMismatchError::new(original.bounds(), packed.bounds()).into());
    }
    if let Some(missing) = original
        .iter()
        .find(|placed| !packed.contains_item(placed.item().id()))
    {
        return Err(LayoutItemsMismatchError::missing(missing.item().id()).into());
    }

    let mut moves = Vec::new();
    for placed in packed {
        let item = placed.item();
        let before = original
            .placement(item.id())
            .ok_or_else(|| LayoutItemsMismatchError::unexpected(item.id()))?;
        if before.anchor() != placed.anchor() {
            moves.push((item.clone(), placed.anchor()));
        }
    }
    Ok(moves)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpaceOptimizer;

impl SpaceOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Area descending, height ascending, insertion order ascending.
    #[inline]
    fn placement_order<C: GridCoord>(a: &PlacedItem<C>, b: &PlacedItem<C>) -> Ordering {
        let (sa, sb) = (a.item().size(), b.item().size());
        sb.area()
            .cmp(&sa.area())
            .then_with(|| sa.height().cmp(&sb.height()))
            .then_with(|| a.sequence().cmp(&b.sequence()))
    }
}

impl<C: GridCoord> Repacker<C> for SpaceOptimizer {
    fn repack(&self, grid: &GridIndex<C>) -> Result<GridIndex<C>, RepackError<C>> {
        let mut order: Vec<&PlacedItem<C>> = grid.iter().collect();
        order.sort_by(|a, b| Self::placement_order(a, b));

        let mut packed = GridIndex::new(grid.bounds());
        for placed in order {
            let item = placed.item();
            packed
                .place_first_fit(item)
                .ok_or_else(|| NoFreePositionError::new(item.id(), item.size()))?;
        }
        Ok(packed)
    }
}
