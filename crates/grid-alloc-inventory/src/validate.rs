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


//! # Placement validation
//!
//! Side-effect free feasibility checks. For a fresh placement they run in this order:
//!
//! 1. size: both components positive, otherwise an [`InvalidSizeError`] is returned no
//!    matter what the other checks would say;
//! 2. bounds: the footprint lies inside `[0, width) x [0, height)`;
//! 3. identity: the item is not placed yet;
//! 4. overlap: every footprint cell is free.
//!
//! Relocation skips the identity check and treats the item's own cells as free.

use crate::{err::InvalidSizeError, grid::CellRead, item::Item};
use grid_alloc_core::{
    footprint::Footprint,
    position::{Position, Size},
};

pub struct PlacementValidator<'a, G: CellRead> {
    grid: &'a G,
}

impl<'a, G: CellRead> PlacementValidator<'a, G> {
    #[inline]
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn check_size(
        &self,
        size: Size<G::Coord>,
    ) -> Result<(), InvalidSizeError<G::Coord>> {
        if size.is_valid() {
            Ok(())
        } else {
            Err(InvalidSizeError::new(size))
        }
    }

    #[inline]
    pub fn is_within_bounds(&self, footprint: &Footprint<G::Coord>) -> bool {
        footprint.is_within(self.grid.bounds())
    }

    pub fn can_place(
        &self,
        item: &Item<G::Coord>,
        anchor: Position<G::Coord>,
    ) -> Result<bool, InvalidSizeError<G::Coord>> {
        self.check_size(item.size())?;
        let footprint = Footprint::new(anchor, item.size());
        Ok(self.is_within_bounds(&footprint)
            && !self.grid.contains_item(item.id())
            && self.grid.is_region_free(&footprint, None))
    }

    /// Checks whether an already placed item may shift to `anchor`.
    pub fn can_relocate(
        &self,
        item: &Item<G::Coord>,
        anchor: Position<G::Coord>,
    ) -> Result<bool, InvalidSizeError<G::Coord>> {
        self.check_size(item.size())?;
        let footprint = Footprint::new(anchor, item.size());
        Ok(self.is_within_bounds(&footprint)
            && self.grid.is_region_free(&footprint, Some(item.id())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridIndex;

    #[inline]
    fn pos(x: i32, y: i32) -> Position<i32> {
        Position::new(x, y)
    }

    fn grid_with(w: i32, h: i32, items: &[(Item<i32>, Position<i32>)]) -> GridIndex<i32> {
        let mut g = GridIndex::new(Size::new(w, h));
        for (item, anchor) in items {
            g.insert(item.clone(), *anchor);
        }
        g
    }

    #[test]
    fn test_size_check_precedes_everything() {
        let placed = Item::named("X", 1, 1);
        let g = grid_with(5, 5, &[(placed, pos(0, 0))]);
        let v = PlacementValidator::new(&g);
        for (w, h) in [(0, 0), (-1, 10), (10, -2), (-2, -2), (0, 10), (5, 0)] {
            let bad = Item::unnamed(w, h);
            assert!(v.can_place(&bad, pos(0, 0)).is_err());
            assert!(v.can_place(&bad, pos(-3, 9)).is_err());
            assert!(v.can_relocate(&bad, pos(1, 1)).is_err());
        }
    }

    #[test]
    fn test_bounds() {
        let g = grid_with(5, 5, &[]);
        let v = PlacementValidator::new(&g);
        let two = Item::named("A", 2, 2);
        assert_eq!(v.can_place(&two, pos(3, 3)), Ok(true));
        assert_eq!(v.can_place(&two, pos(4, 0)), Ok(false));
        assert_eq!(v.can_place(&two, pos(0, 4)), Ok(false));

        let one = Item::named("A", 1, 1);
        assert_eq!(v.can_place(&one, pos(-1, 0)), Ok(false));
        assert_eq!(v.can_place(&one, pos(0, -1)), Ok(false));

        let wide = Item::named("A", 6, 1);
        assert_eq!(v.can_place(&wide, pos(0, 0)), Ok(false));

        let column = Item::named("A", 1, 5);
        assert_eq!(v.can_place(&column, pos(4, 0)), Ok(true));
    }

    #[test]
    fn test_identity() {
        let placed = Item::named("X", 1, 1);
        let g = grid_with(5, 5, &[(placed.clone(), pos(3, 3))]);
        let v = PlacementValidator::new(&g);
        assert_eq!(v.can_place(&placed, pos(0, 0)), Ok(false));

        let twin = Item::named("X", 1, 1);
        assert_eq!(v.can_place(&twin, pos(0, 0)), Ok(true));
    }

    #[test]
    fn test_overlap_and_contact() {
        let g = grid_with(5, 5, &[(Item::named("X", 2, 2), pos(1, 1))]);
        let v = PlacementValidator::new(&g);
        assert_eq!(v.can_place(&Item::named("A", 2, 1), pos(2, 1)), Ok(false));
        assert_eq!(v.can_place(&Item::named("A", 3, 3), pos(1, 1)), Ok(false));
        assert_eq!(v.can_place(&Item::named("A", 1, 1), pos(3, 3)), Ok(true));
        assert_eq!(v.can_place(&Item::named("A", 2, 2), pos(3, 1)), Ok(true));
    }

    #[test]
    fn test_relocate_ignores_own_cells_only() {
        let x = Item::named("X", 2, 2);
        let z = Item::named("Z", 2, 1);
        let g = grid_with(3, 3, &[(x.clone(), pos(0, 0)), (z.clone(), pos(0, 2))]);
        let v = PlacementValidator::new(&g);

        assert_eq!(v.can_relocate(&x, pos(1, 0)), Ok(true));
        assert_eq!(v.can_relocate(&z, pos(1, 1)), Ok(false));
        assert_eq!(v.can_relocate(&z, pos(1, 2)), Ok(true));
        assert_eq!(v.can_relocate(&x, pos(2, 2)), Ok(false));
    }
}
