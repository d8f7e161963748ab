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


//! # Footprints
//!
//! A [`Footprint`] is an anchored rectangle: the set of grid cells
//! `{(anchor.x + i, anchor.y + j) : 0 <= i < width, 0 <= j < height}`.
//!
//! Cells are always enumerated column-major (increasing `x`, and for each `x` increasing `y`),
//! which is the order callers observe when asking for the positions of a placed item.

use crate::{
    GridCoord,
    position::{Position, Size},
};
use std::iter::FusedIterator;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Footprint<C = i32> {
    anchor: Position<C>,
    size: Size<C>,
}

impl<C: GridCoord> std::fmt::Display for Footprint<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.size, self.anchor)
    }
}

impl<C: GridCoord> Footprint<C> {
    #[inline]
    pub const fn new(anchor: Position<C>, size: Size<C>) -> Self {
        Self { anchor, size }
    }

    #[inline]
    pub const fn anchor(&self) -> Position<C> {
        self.anchor
    }

    #[inline]
    pub const fn size(&self) -> Size<C> {
        self.size
    }

    /// The exclusive end corner `anchor + size`, or `None` on overflow.
    #[inline]
    pub fn end(&self) -> Option<Position<C>> {
        self.anchor.checked_add(self.size)
    }

    /// Returns `true` if every cell lies inside a grid of the given bounds.
    ///
    /// Degenerate sizes are never within bounds.
    #[inline]
    pub fn is_within(&self, bounds: Size<C>) -> bool {
        if !self.size.is_valid() || !self.anchor.is_non_negative() {
            return false;
        }
        match self.end() {
            Some(end) => end.x() <= bounds.width() && end.y() <= bounds.height(),
            None => false,
        }
    }

    /// Number of cells in the footprint.
    #[inline]
    pub fn cell_count(&self) -> usize {
        usize::try_from(self.size.area()).unwrap_or(usize::MAX)
    }

    #[inline]
    pub fn cells(&self) -> FootprintCells<C> {
        FootprintCells::new(*self)
    }
}

impl<C: GridCoord> IntoIterator for Footprint<C> {
    type Item = Position<C>;
    type IntoIter = FootprintCells<C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Column-major iterator over the cells of a [`Footprint`].
#[derive(Clone, Debug)]
pub struct FootprintCells<C = i32> {
    x: C,
    y: C,
    origin_y: C,
    end_y: C,
    remaining: usize,
}

impl<C: GridCoord> FootprintCells<C> {
    fn new(footprint: Footprint<C>) -> Self {
        let anchor = footprint.anchor();
        let remaining = match footprint.end() {
            Some(_) => footprint.cell_count(),
            None => 0,
        };
        let end_y = footprint
            .end()
            .map_or(anchor.y(), |end| end.y());
        Self {
            x: anchor.x(),
            y: anchor.y(),
            origin_y: anchor.y(),
            end_y,
            remaining,
        }
    }
}

impl<C: GridCoord> Iterator for FootprintCells<C> {
    type Item = Position<C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = Position::new(self.x, self.y);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.y = self.y + C::one();
            if self.y == self.end_y {
                self.y = self.origin_y;
                self.x = self.x + C::one();
            }
        }
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: GridCoord> ExactSizeIterator for FootprintCells<C> {}
impl<C: GridCoord> FusedIterator for FootprintCells<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn pos(x: i32, y: i32) -> Position<i32> {
        Position::new(x, y)
    }

    #[inline]
    fn fp(x: i32, y: i32, w: i32, h: i32) -> Footprint<i32> {
        Footprint::new(pos(x, y), Size::new(w, h))
    }

    #[test]
    fn test_cells_are_column_major() {
        let cells: Vec<_> = fp(1, 2, 3, 2).cells().collect();
        assert_eq!(
            cells,
            vec![pos(1, 2), pos(1, 3), pos(2, 2), pos(2, 3), pos(3, 2), pos(3, 3)]
        );
    }

    #[test]
    fn test_cells_len_matches_area() {
        let it = fp(0, 0, 4, 3).cells();
        assert_eq!(it.len(), 12);
        assert_eq!(it.count(), 12);
    }

    #[test]
    fn test_degenerate_footprint_has_no_cells() {
        assert_eq!(fp(0, 0, 0, 3).cells().count(), 0);
        assert_eq!(fp(0, 0, 3, -1).cells().count(), 0);
    }

    #[test]
    fn test_is_within_bounds() {
        let bounds = Size::new(5, 5);
        assert!(fp(3, 3, 2, 2).is_within(bounds));
        assert!(fp(4, 0, 1, 5).is_within(bounds));
        assert!(!fp(4, 0, 2, 2).is_within(bounds));
        assert!(!fp(0, 4, 2, 2).is_within(bounds));
        assert!(!fp(-1, 0, 1, 1).is_within(bounds));
        assert!(!fp(0, 0, 6, 1).is_within(bounds));
        assert!(!fp(i32::MAX, 0, 2, 1).is_within(bounds));
    }
}
