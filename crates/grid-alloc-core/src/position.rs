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


use crate::GridCoord;
use std::ops::{Add, Sub};

/// A cell coordinate on the grid.
///
/// The derived ordering compares `x` first and `y` second, which is the column-major order
/// in which footprint cells are reported.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Position<C = i32> {
    x: C,
    y: C,
}

impl<C: GridCoord> std::fmt::Display for Position<C> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<C: GridCoord> From<(C, C)> for Position<C> {
    #[inline]
    fn from((x, y): (C, C)) -> Self {
        Position::new(x, y)
    }
}

impl<C: GridCoord> From<Position<C>> for (C, C) {
    #[inline]
    fn from(value: Position<C>) -> Self {
        (value.x, value.y)
    }
}

impl<C: GridCoord> Position<C> {
    #[inline]
    pub const fn new(x: C, y: C) -> Self {
        Position { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Position::new(C::zero(), C::zero())
    }

    #[inline]
    pub const fn x(self) -> C {
        self.x
    }

    #[inline]
    pub const fn y(self) -> C {
        self.y
    }

    #[inline]
    pub fn is_non_negative(self) -> bool {
        self.x >= C::zero() && self.y >= C::zero()
    }

    /// Returns `true` if the cell lies inside a `bounds.width() x bounds.height()` grid.
    #[inline]
    pub fn is_within(self, bounds: Size<C>) -> bool {
        self.is_non_negative() && self.x < bounds.width() && self.y < bounds.height()
    }

    #[inline]
    pub fn checked_add(self, size: Size<C>) -> Option<Self> {
        let x = self.x.checked_add(&size.width())?;
        let y = self.y.checked_add(&size.height())?;
        Some(Position::new(x, y))
    }

    /// Row-major linear index of the cell in a grid of the given bounds.
    ///
    /// Returns `None` if the cell lies outside of the grid.
    #[inline]
    pub fn row_major_index(self, bounds: Size<C>) -> Option<usize> {
        if !self.is_within(bounds) {
            return None;
        }
        let x = self.x.to_usize()?;
        let y = self.y.to_usize()?;
        let w = bounds.width().to_usize()?;
        y.checked_mul(w)?.checked_add(x)
    }
}

impl<C: GridCoord> Add<Size<C>> for Position<C> {
    type Output = Position<C>;

    #[inline]
    fn add(self, rhs: Size<C>) -> Self::Output {
        self.checked_add(rhs)
            .expect("overflow in Position + Size")
    }
}

impl<C: GridCoord> Sub<Position<C>> for Position<C> {
    type Output = Size<C>;

    #[inline]
    fn sub(self, rhs: Position<C>) -> Self::Output {
        Size::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The `(width, height)` extent of an item or grid.
///
/// A size is not required to be valid on construction; engine entry points reject sizes
/// with a non-positive component.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Size<C = i32> {
    width: C,
    height: C,
}

impl<C: GridCoord> std::fmt::Display for Size<C> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl<C: GridCoord> From<(C, C)> for Size<C> {
    #[inline]
    fn from((width, height): (C, C)) -> Self {
        Size::new(width, height)
    }
}

impl<C: GridCoord> Size<C> {
    #[inline]
    pub const fn new(width: C, height: C) -> Self {
        Size { width, height }
    }

    #[inline]
    pub const fn width(self) -> C {
        self.width
    }

    #[inline]
    pub const fn height(self) -> C {
        self.height
    }

    /// Both components are strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > C::zero() && self.height > C::zero()
    }

    /// Number of cells covered, or `0` for an invalid size.
    #[inline]
    pub fn area(self) -> u128 {
        if !self.is_valid() {
            return 0;
        }
        match (self.width.to_u128(), self.height.to_u128()) {
            (Some(w), Some(h)) => w.saturating_mul(h),
            _ => 0,
        }
    }

    /// Returns `true` if `self` fits inside `outer` without rotation.
    #[inline]
    pub fn fits_within(self, outer: Size<C>) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Position<i32>: Send, Sync, Copy, Ord);
    assert_impl_all!(Size<i64>: Send, Sync, Copy);

    #[test]
    fn test_ordering_is_column_major() {
        let mut cells = vec![
            Position::new(2, 0),
            Position::new(1, 1),
            Position::new(1, 0),
            Position::new(0, 3),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 3),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_is_within_rejects_negative_and_edge() {
        let bounds = Size::new(5, 4);
        assert!(Position::new(0, 0).is_within(bounds));
        assert!(Position::new(4, 3).is_within(bounds));
        assert!(!Position::new(5, 0).is_within(bounds));
        assert!(!Position::new(0, 4).is_within(bounds));
        assert!(!Position::new(-1, 0).is_within(bounds));
        assert!(!Position::new(0, -1).is_within(bounds));
    }

    #[test]
    fn test_row_major_index() {
        let bounds = Size::new(3, 2);
        assert_eq!(Position::new(0, 0).row_major_index(bounds), Some(0));
        assert_eq!(Position::new(2, 0).row_major_index(bounds), Some(2));
        assert_eq!(Position::new(0, 1).row_major_index(bounds), Some(3));
        assert_eq!(Position::new(2, 1).row_major_index(bounds), Some(5));
        assert_eq!(Position::new(3, 1).row_major_index(bounds), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        let p = Position::new(i32::MAX, 0);
        assert_eq!(p.checked_add(Size::new(1, 1)), None);
        assert_eq!(
            Position::new(1, 2).checked_add(Size::new(3, 4)),
            Some(Position::new(4, 6))
        );
    }

    #[test]
    fn test_size_validity_and_area() {
        assert!(Size::new(1, 1).is_valid());
        assert!(!Size::new(0, 0).is_valid());
        assert!(!Size::new(-1, 10).is_valid());
        assert!(!Size::new(10, -2).is_valid());
        assert_eq!(Size::new(3, 2).area(), 6);
        assert_eq!(Size::new(-3, 2).area(), 0);
    }

    #[test]
    fn test_fits_within() {
        let grid = Size::new(5, 5);
        assert!(Size::new(5, 5).fits_within(grid));
        assert!(!Size::new(6, 1).fits_within(grid));
        assert!(!Size::new(1, 6).fits_within(grid));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, -1).to_string(), "(3, -1)");
        assert_eq!(Size::new(2, 3).to_string(), "2x3");
    }
}
