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


//! # First-fit free position search
//!
//! Candidate anchors are scanned in raster order: rows top to bottom (`y` ascending), and
//! within a row left to right (`x` ascending). The first anchor whose whole footprint is free
//! wins. Callers depend on this order, so it must not change.

use crate::{err::InvalidSizeError, grid::CellRead};
use grid_alloc_core::{
    footprint::Footprint,
    position::{Position, Size},
};
use num_traits::{One, Zero};

pub struct FreePositionSearch<'a, G: CellRead> {
    grid: &'a G,
}

impl<'a, G: CellRead> FreePositionSearch<'a, G> {
    #[inline]
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }

    /// Finds the first free anchor for an item of `size`.
    ///
    /// Returns `Ok(None)` when the size exceeds the grid or no candidate is free.
    pub fn find(
        &self,
        size: Size<G::Coord>,
    ) -> Result<Option<Position<G::Coord>>, InvalidSizeError<G::Coord>> {
        if !size.is_valid() {
            return Err(InvalidSizeError::new(size));
        }
        Ok(self.first_fit(size))
    }

    /// Same scan as [`find`](Self::find) for a size that is already known to be valid.
    pub fn first_fit(&self, size: Size<G::Coord>) -> Option<Position<G::Coord>> {
        let bounds = self.grid.bounds();
        if !size.is_valid() || !size.fits_within(bounds) {
            return None;
        }
        let max_x = bounds.width() - size.width();
        let max_y = bounds.height() - size.height();

        let mut y = G::Coord::zero();
        while y <= max_y {
            let mut x = G::Coord::zero();
            while x <= max_x {
                let anchor = Position::new(x, y);
                if self
                    .grid
                    .is_region_free(&Footprint::new(anchor, size), None)
                {
                    return Some(anchor);
                }
                x = x + G::Coord::one();
            }
            y = y + G::Coord::one();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::GridIndex, item::Item};

    #[inline]
    fn pos(x: i32, y: i32) -> Position<i32> {
        Position::new(x, y)
    }

    #[inline]
    fn size(w: i32, h: i32) -> Size<i32> {
        Size::new(w, h)
    }

    fn grid_with(w: i32, h: i32, items: &[(i32, i32, i32, i32)]) -> GridIndex<i32> {
        let mut g = GridIndex::new(size(w, h));
        for &(x, y, iw, ih) in items {
            g.insert(Item::named("X", iw, ih), pos(x, y));
        }
        g
    }

    #[test]
    fn test_empty_grid_returns_origin() {
        let g = grid_with(5, 5, &[]);
        let s = FreePositionSearch::new(&g);
        assert_eq!(s.find(size(2, 2)), Ok(Some(pos(0, 0))));
        assert_eq!(s.find(size(5, 5)), Ok(Some(pos(0, 0))));
    }

    #[test]
    fn test_row_before_column_order() {
        let g = grid_with(5, 5, &[(1, 1, 1, 1)]);
        let s = FreePositionSearch::new(&g);
        assert_eq!(s.find(size(3, 3)), Ok(Some(pos(2, 0))));
    }

    #[test]
    fn test_blocked_centre_leaves_no_room() {
        let g = grid_with(5, 5, &[(1, 1, 3, 3)]);
        let s = FreePositionSearch::new(&g);
        assert_eq!(s.find(size(2, 2)), Ok(None));
    }

    #[test]
    fn test_finds_remaining_corner() {
        let g = grid_with(5, 5, &[(0, 0, 3, 5), (3, 0, 2, 3)]);
        let s = FreePositionSearch::new(&g);
        assert_eq!(s.find(size(2, 2)), Ok(Some(pos(3, 3))));
    }

    #[test]
    fn test_oversized_is_not_found() {
        let g = grid_with(5, 5, &[]);
        let s = FreePositionSearch::new(&g);
        assert_eq!(s.find(size(6, 6)), Ok(None));
        assert_eq!(s.find(size(6, 1)), Ok(None));
        assert_eq!(s.find(size(1, 6)), Ok(None));
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let g = grid_with(5, 5, &[]);
        let s = FreePositionSearch::new(&g);
        for (w, h) in [(0, 0), (-1, 10), (10, -2), (-2, -2), (0, 10), (5, 0)] {
            assert_eq!(
                s.find(size(w, h)),
                Err(InvalidSizeError::new(size(w, h)))
            );
        }
    }
}
