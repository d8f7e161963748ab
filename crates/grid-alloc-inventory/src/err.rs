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


use crate::item::ItemId;
use grid_alloc_core::{
    GridCoord,
    position::{Position, Size},
};
use std::fmt::Display;

/// Coarse classification of every error the inventory can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A contract violation on an argument other than an item size.
    InvalidArgument,
    /// An item or search size with a non-positive component.
    InvalidSize,
    /// A cell query outside of the grid.
    PositionOutOfRange,
    /// The item is not placed in the inventory.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSizeError<C: GridCoord = i32> {
    size: Size<C>,
}

impl<C: GridCoord> InvalidSizeError<C> {
    #[inline]
    pub fn new(size: Size<C>) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> Size<C> {
        self.size
    }
}

impl<C: GridCoord> Display for InvalidSizeError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Size {} is invalid: width and height must be greater than zero",
            self.size
        )
    }
}

impl<C: GridCoord> std::error::Error for InvalidSizeError<C> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidGridDimensionsError<C: GridCoord = i32> {
    width: C,
    height: C,
}

impl<C: GridCoord> InvalidGridDimensionsError<C> {
    #[inline]
    pub fn new(width: C, height: C) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> C {
        self.width
    }

    #[inline]
    pub fn height(&self) -> C {
        self.height
    }
}

impl<C: GridCoord> Display for InvalidGridDimensionsError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid dimensions {}x{} are invalid: width and height must be greater than zero \
             and the grid may span at most {} cells",
            self.width,
            self.height,
            crate::config::InventoryConfig::<C>::MAX_CELLS
        )
    }
}

impl<C: GridCoord> std::error::Error for InvalidGridDimensionsError<C> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionOutOfRangeError<C: GridCoord = i32> {
    position: Position<C>,
    bounds: Size<C>,
}

impl<C: GridCoord> PositionOutOfRangeError<C> {
    #[inline]
    pub fn new(position: Position<C>, bounds: Size<C>) -> Self {
        Self { position, bounds }
    }

    #[inline]
    pub fn position(&self) -> Position<C> {
        self.position
    }

    #[inline]
    pub fn bounds(&self) -> Size<C> {
        self.bounds
    }
}

impl<C: GridCoord> Display for PositionOutOfRangeError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside of the {} grid",
            self.position, self.bounds
        )
    }
}

impl<C: GridCoord> std::error::Error for PositionOutOfRangeError<C> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemNotFoundError {
    id: ItemId,
}

impl ItemNotFoundError {
    #[inline]
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }
}

impl Display for ItemNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item {} is not placed in the inventory", self.id)
    }
}

impl std::error::Error for ItemNotFoundError {}

/// A matrix handed to `copy_to` does not have `width` columns of `height` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixShapeError {
    expected_columns: usize,
    expected_rows: usize,
    actual_columns: usize,
    actual_rows: usize,
}

impl MatrixShapeError {
    #[inline]
    pub fn new(
        expected_columns: usize,
        expected_rows: usize,
        actual_columns: usize,
        actual_rows: usize,
    ) -> Self {
        Self {
            expected_columns,
            expected_rows,
            actual_columns,
            actual_rows,
        }
    }

    #[inline]
    pub fn expected(&self) -> (usize, usize) {
        (self.expected_columns, self.expected_rows)
    }

    #[inline]
    pub fn actual(&self) -> (usize, usize) {
        (self.actual_columns, self.actual_rows)
    }
}

impl Display for MatrixShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Matrix has shape {}x{} but the inventory is {}x{}",
            self.actual_columns, self.actual_rows, self.expected_columns, self.expected_rows
        )
    }
}

impl std::error::Error for MatrixShapeError {}

/// An entry of an initial layout could not be placed during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitialPlacementError<C: GridCoord = i32> {
    id: ItemId,
    size: Size<C>,
    anchor: Option<Position<C>>,
}

impl<C: GridCoord> InitialPlacementError<C> {
    #[inline]
    pub fn new(id: ItemId, size: Size<C>, anchor: Option<Position<C>>) -> Self {
        Self { id, size, anchor }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> Size<C> {
        self.size
    }

    /// The requested anchor, or `None` if the entry asked for any free position.
    #[inline]
    pub fn anchor(&self) -> Option<Position<C>> {
        self.anchor
    }
}

impl<C: GridCoord> Display for InitialPlacementError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.anchor {
            Some(anchor) => write!(
                f,
                "Initial item {} of size {} cannot be placed at {}",
                self.id, self.size, anchor
            ),
            None => write!(
                f,
                "Initial item {} of size {} does not fit into any free position",
                self.id, self.size
            ),
        }
    }
}

impl<C: GridCoord> std::error::Error for InitialPlacementError<C> {}

/// A repacking strategy could not find a slot for an item that was placed before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoFreePositionError<C: GridCoord = i32> {
    id: ItemId,
    size: Size<C>,
}

impl<C: GridCoord> NoFreePositionError<C> {
    #[inline]
    pub fn new(id: ItemId, size: Size<C>) -> Self {
        Self { id, size }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> Size<C> {
        self.size
    }
}

impl<C: GridCoord> Display for NoFreePositionError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No free position left for item {} of size {} while repacking",
            self.id, self.size
        )
    }
}

impl<C: GridCoord> std::error::Error for NoFreePositionError<C> {}

/// A repacked layout has other bounds than the layout it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutBoundsMismatchError<C: GridCoord = i32> {
    expected: Size<C>,
    actual: Size<C>,
}

impl<C: GridCoord> LayoutBoundsMismatchError<C> {
    #[inline]
    pub fn new(expected: Size<C>, actual: Size<C>) -> Self {
        Self { expected, actual }
    }

    #[inline]
    pub fn expected(&self) -> Size<C> {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> Size<C> {
        self.actual
    }
}

impl<C: GridCoord> Display for LayoutBoundsMismatchError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repacked layout has bounds {} but the inventory has bounds {}",
            self.actual, self.expected
        )
    }
}

impl<C: GridCoord> std::error::Error for LayoutBoundsMismatchError<C> {}

/// A repacked layout does not hold exactly the items of the layout it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutItemsMismatchError {
    id: ItemId,
    missing: bool,
}

impl LayoutItemsMismatchError {
    /// The item was placed before but is absent from the repacked layout.
    #[inline]
    pub fn missing(id: ItemId) -> Self {
        Self { id, missing: true }
    }

    /// The item appears in the repacked layout but was never placed in the inventory.
    #[inline]
    pub fn unexpected(id: ItemId) -> Self {
        Self { id, missing: false }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.missing
    }
}

impl Display for LayoutItemsMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.missing {
            write!(f, "Repacked layout is missing item {}", self.id)
        } else {
            write!(f, "Repacked layout contains unknown item {}", self.id)
        }
    }
}

impl std::error::Error for LayoutItemsMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepackError<C: GridCoord = i32> {
    NoFreePosition(NoFreePositionError<C>),
    BoundsMismatch(LayoutBoundsMismatchError<C>),
    ItemsMismatch(LayoutItemsMismatchError),
}

impl<C: GridCoord> Display for RepackError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepackError::NoFreePosition(e) => write!(f, "{e}"),
            RepackError::BoundsMismatch(e) => write!(f, "{e}"),
            RepackError::ItemsMismatch(e) => write!(f, "{e}"),
        }
    }
}

impl<C: GridCoord> std::error::Error for RepackError<C> {}

impl<C: GridCoord> From<NoFreePositionError<C>> for RepackError<C> {
    fn from(e: NoFreePositionError<C>) -> Self {
        RepackError::NoFreePosition(e)
    }
}

impl<C: GridCoord> From<LayoutBoundsMismatchError<C>> for RepackError<C> {
    fn from(e: LayoutBoundsMismatchError<C>) -> Self {
        RepackError::BoundsMismatch(e)
    }
}

impl<C: GridCoord> From<LayoutItemsMismatchError> for RepackError<C> {
    fn from(e: LayoutItemsMismatchError) -> Self {
        RepackError::ItemsMismatch(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryError<C: GridCoord = i32> {
    InvalidSize(InvalidSizeError<C>),
    InvalidGridDimensions(InvalidGridDimensionsError<C>),
    MatrixShape(MatrixShapeError),
    InitialPlacement(InitialPlacementError<C>),
    PositionOutOfRange(PositionOutOfRangeError<C>),
    NotFound(ItemNotFoundError),
}

impl<C: GridCoord> InventoryError<C> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::InvalidSize(_) => ErrorKind::InvalidSize,
            InventoryError::InvalidGridDimensions(_)
            | InventoryError::MatrixShape(_)
            | InventoryError::InitialPlacement(_) => ErrorKind::InvalidArgument,
            InventoryError::PositionOutOfRange(_) => ErrorKind::PositionOutOfRange,
            InventoryError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl<C: GridCoord> Display for InventoryError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::InvalidSize(e) => write!(f, "{e}"),
            InventoryError::InvalidGridDimensions(e) => write!(f, "{e}"),
            InventoryError::MatrixShape(e) => write!(f, "{e}"),
            InventoryError::InitialPlacement(e) => write!(f, "{e}"),
            InventoryError::PositionOutOfRange(e) => write!(f, "{e}"),
            InventoryError::NotFound(e) => write!(f, "{e}"),
        }
    }
}

impl<C: GridCoord> std::error::Error for InventoryError<C> {}

impl<C: GridCoord> From<InvalidSizeError<C>> for InventoryError<C> {
    fn from(value: InvalidSizeError<C>) -> Self {
        InventoryError::InvalidSize(value)
    }
}

impl<C: GridCoord> From<InvalidGridDimensionsError<C>> for InventoryError<C> {
    fn from(value: InvalidGridDimensionsError<C>) -> Self {
        InventoryError::InvalidGridDimensions(value)
    }
}

impl<C: GridCoord> From<MatrixShapeError> for InventoryError<C> {
    fn from(value: MatrixShapeError) -> Self {
        InventoryError::MatrixShape(value)
    }
}

impl<C: GridCoord> From<InitialPlacementError<C>> for InventoryError<C> {
    fn from(value: InitialPlacementError<C>) -> Self {
        InventoryError::InitialPlacement(value)
    }
}

impl<C: GridCoord> From<PositionOutOfRangeError<C>> for InventoryError<C> {
    fn from(value: PositionOutOfRangeError<C>) -> Self {
        InventoryError::PositionOutOfRange(value)
    }
}

impl<C: GridCoord> From<ItemNotFoundError> for InventoryError<C> {
    fn from(value: ItemNotFoundError) -> Self {
        InventoryError::NotFound(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryConfigBuildError<C: GridCoord = i32> {
    MissingWidth,
    MissingHeight,
    InvalidGridDimensions(InvalidGridDimensionsError<C>),
}

impl<C: GridCoord> Display for InventoryConfigBuildError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InventoryConfigBuildError::*;
        match self {
            MissingWidth => write!(f, "Missing width"),
            MissingHeight => write!(f, "Missing height"),
            InvalidGridDimensions(e) => write!(f, "{e}"),
        }
    }
}

impl<C: GridCoord> From<InvalidGridDimensionsError<C>> for InventoryConfigBuildError<C> {
    fn from(value: InvalidGridDimensionsError<C>) -> Self {
        InventoryConfigBuildError::InvalidGridDimensions(value)
    }
}

impl<C: GridCoord> std::error::Error for InventoryConfigBuildError<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_kinds_are_distinguishable() {
        let item: Item<i32> = Item::unnamed(1, 1);
        let not_found: InventoryError<i32> = ItemNotFoundError::new(item.id()).into();
        let size: InventoryError<i32> = InvalidSizeError::new(Size::new(0, 1)).into();
        let range: InventoryError<i32> =
            PositionOutOfRangeError::new(Position::new(5, 0), Size::new(5, 5)).into();
        let dims: InventoryError<i32> = InvalidGridDimensionsError::new(0, 3).into();

        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(size.kind(), ErrorKind::InvalidSize);
        assert_eq!(range.kind(), ErrorKind::PositionOutOfRange);
        assert_eq!(dims.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_display_mentions_offending_values() {
        let e = PositionOutOfRangeError::new(Position::new(-1, 2), Size::new(3, 3));
        assert_eq!(e.to_string(), "Position (-1, 2) is outside of the 3x3 grid");

        let e = InvalidSizeError::new(Size::new(10, -2));
        assert!(e.to_string().contains("10x-2"));

        let e: RepackError<i32> =
            LayoutBoundsMismatchError::new(Size::new(4, 4), Size::new(1, 1)).into();
        assert_eq!(
            e.to_string(),
            "Repacked layout has bounds 1x1 but the inventory has bounds 4x4"
        );
    }
}
