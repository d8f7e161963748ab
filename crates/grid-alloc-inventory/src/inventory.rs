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


//! # Inventory facade
//!
//! [`Inventory`] owns a [`GridIndex`] and the listener registry. Feasibility goes through
//! [`PlacementValidator`], free-slot discovery through [`FreePositionSearch`] and
//! defragmentation through a [`Repacker`]. Every mutating operation either fully applies and
//! then notifies, or leaves the inventory untouched and stays silent.

use crate::{
    config::{ConstructionPolicy, InventoryConfig},
    err::{
        InitialPlacementError, InvalidSizeError, InventoryError, ItemNotFoundError,
        MatrixShapeError, PositionOutOfRangeError, RepackError,
    },
    events::{EventKind, ListenerId, Listeners},
    grid::{CellRead, GridIndex, PlacedItem},
    item::{Item, ItemId},
    optimize::{Repacker, SpaceOptimizer, verified_moves},
    search::FreePositionSearch,
    stats::InventoryStats,
    validate::PlacementValidator,
};
use grid_alloc_core::{
    GridCoord,
    footprint::{Footprint, FootprintCells},
    iter::MaybeIter,
    position::{Position, Size},
};
use std::{collections::btree_map, fmt::Display, iter::FusedIterator};
use tracing::{debug, instrument, trace, warn};

pub struct Inventory<C: GridCoord = i32> {
    grid: GridIndex<C>,
    listeners: Listeners<C>,
}

impl<C: GridCoord> std::fmt::Debug for Inventory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("bounds", &self.grid.bounds())
            .field("items", &self.grid.len())
            .finish_non_exhaustive()
    }
}

impl<C: GridCoord> Inventory<C> {
    /// Creates an empty inventory.
    pub fn new(width: C, height: C) -> Result<Self, InventoryError<C>> {
        Ok(Self::from_config(InventoryConfig::new(width, height)?))
    }

    /// Creates an inventory pre-populated with items at explicit anchors.
    pub fn with_items<I>(width: C, height: C, items: I) -> Result<Self, InventoryError<C>>
    where
        I: IntoIterator<Item = (Item<C>, Position<C>)>,
    {
        Self::from_config_with_items(InventoryConfig::new(width, height)?, items)
    }

    /// Creates an inventory and places each item at its first free position.
    pub fn with_unplaced_items<I>(width: C, height: C, items: I) -> Result<Self, InventoryError<C>>
    where
        I: IntoIterator<Item = Item<C>>,
    {
        Self::from_config_with_unplaced_items(InventoryConfig::new(width, height)?, items)
    }

    #[inline]
    pub fn from_config(config: InventoryConfig<C>) -> Self {
        Self {
            grid: GridIndex::new(config.bounds()),
            listeners: Listeners::default(),
        }
    }

    /// Builds an inventory from `(item, anchor)` entries.
    ///
    /// Entries go through the same validation as [`add_item_at`](Self::add_item_at). An
    /// invalid item size always fails; an infeasible entry fails under
    /// [`ConstructionPolicy::Strict`] and is skipped under [`ConstructionPolicy::SkipInvalid`].
    #[instrument(level = "debug", skip_all, fields(bounds = %config.bounds(), policy = %config.construction()))]
    pub fn from_config_with_items<I>(
        config: InventoryConfig<C>,
        items: I,
    ) -> Result<Self, InventoryError<C>>
    where
        I: IntoIterator<Item = (Item<C>, Position<C>)>,
    {
        let mut inventory = Self::from_config(config);
        let mut skipped = 0usize;
        for (item, anchor) in items {
            if !PlacementValidator::new(&inventory.grid).can_place(&item, anchor)? {
                let err = InitialPlacementError::new(item.id(), item.size(), Some(anchor));
                match config.construction() {
                    ConstructionPolicy::Strict => return Err(err.into()),
                    ConstructionPolicy::SkipInvalid => {
                        warn!(error = %err, "Skipping initial item");
                        skipped += 1;
                        continue;
                    }
                }
            }
            inventory.grid.insert(item, anchor);
        }
        debug!(placed = inventory.len(), skipped, "Inventory constructed");
        Ok(inventory)
    }

    /// Builds an inventory by first-fit placing each item in iteration order.
    #[instrument(level = "debug", skip_all, fields(bounds = %config.bounds(), policy = %config.construction()))]
    pub fn from_config_with_unplaced_items<I>(
        config: InventoryConfig<C>,
        items: I,
    ) -> Result<Self, InventoryError<C>>
    where
        I: IntoIterator<Item = Item<C>>,
    {
        let mut inventory = Self::from_config(config);
        let mut skipped = 0usize;
        for item in items {
            PlacementValidator::new(&inventory.grid).check_size(item.size())?;
            let placed = !inventory.grid.contains_item(item.id())
                && inventory.grid.place_first_fit(&item).is_some();
            if !placed {
                let err = InitialPlacementError::new(item.id(), item.size(), None);
                match config.construction() {
                    ConstructionPolicy::Strict => return Err(err.into()),
                    ConstructionPolicy::SkipInvalid => {
                        warn!(error = %err, "Skipping initial item");
                        skipped += 1;
                    }
                }
            }
        }
        debug!(placed = inventory.len(), skipped, "Inventory constructed");
        Ok(inventory)
    }

    /// Copies the layout. Listeners are not carried over.
    pub fn fork(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            listeners: Listeners::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> C {
        self.grid.bounds().width()
    }

    #[inline]
    pub fn height(&self) -> C {
        self.grid.bounds().height()
    }

    #[inline]
    pub fn bounds(&self) -> Size<C> {
        self.grid.bounds()
    }

    /// Number of placed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    #[inline]
    pub fn grid(&self) -> &GridIndex<C> {
        &self.grid
    }

    #[inline]
    pub fn can_add_item_at(
        &self,
        item: &Item<C>,
        anchor: Position<C>,
    ) -> Result<bool, InvalidSizeError<C>> {
        PlacementValidator::new(&self.grid).can_place(item, anchor)
    }

    /// Places `item` with its anchor at `anchor`.
    ///
    /// Returns `Ok(false)` without side effects if the footprint leaves the grid, overlaps
    /// another item, or the item is already placed.
    pub fn add_item_at(
        &mut self,
        item: &Item<C>,
        anchor: Position<C>,
    ) -> Result<bool, InvalidSizeError<C>> {
        if !self.can_add_item_at(item, anchor)? {
            trace!(item = %item.id(), %anchor, "Rejected placement");
            return Ok(false);
        }
        self.grid.insert(item.clone(), anchor);
        trace!(item = %item.id(), %anchor, "Placed item");
        self.listeners.emit_added(item, anchor);
        Ok(true)
    }

    /// Whether [`add_item`](Self::add_item) would succeed.
    pub fn can_add_item(&self, item: &Item<C>) -> Result<bool, InvalidSizeError<C>> {
        PlacementValidator::new(&self.grid).check_size(item.size())?;
        Ok(!self.grid.contains_item(item.id())
            && FreePositionSearch::new(&self.grid)
                .first_fit(item.size())
                .is_some())
    }

    /// Places `item` at the first free anchor in raster order.
    ///
    /// Returns the chosen anchor, or `None` if the item is already placed or nothing fits.
    pub fn add_item(&mut self, item: &Item<C>) -> Result<Option<Position<C>>, InvalidSizeError<C>> {
        PlacementValidator::new(&self.grid).check_size(item.size())?;
        if self.grid.contains_item(item.id()) {
            return Ok(None);
        }
        let Some(anchor) = self.grid.place_first_fit(item) else {
            trace!(item = %item.id(), size = %item.size(), "No free position");
            return Ok(None);
        };
        trace!(item = %item.id(), %anchor, "Placed item at first fit");
        self.listeners.emit_added(item, anchor);
        Ok(Some(anchor))
    }

    #[inline]
    pub fn find_free_position(
        &self,
        size: Size<C>,
    ) -> Result<Option<Position<C>>, InvalidSizeError<C>> {
        FreePositionSearch::new(&self.grid).find(size)
    }

    #[inline]
    pub fn find_free_position_for(
        &self,
        item: &Item<C>,
    ) -> Result<Option<Position<C>>, InvalidSizeError<C>> {
        self.find_free_position(item.size())
    }

    #[inline]
    pub fn contains(&self, item: &Item<C>) -> bool {
        self.grid.contains_item(item.id())
    }

    #[inline]
    pub fn contains_id(&self, id: ItemId) -> bool {
        self.grid.contains_item(id)
    }

    /// `false` for cells outside of the grid.
    #[inline]
    pub fn is_occupied(&self, cell: Position<C>) -> bool {
        self.grid.occupant(cell).is_some()
    }

    /// `false` for cells outside of the grid.
    #[inline]
    pub fn is_free(&self, cell: Position<C>) -> bool {
        cell.is_within(self.grid.bounds()) && self.grid.occupant(cell).is_none()
    }

    #[inline]
    pub fn anchor_of(&self, item: &Item<C>) -> Option<Position<C>> {
        self.grid.placement(item.id()).map(PlacedItem::anchor)
    }

    /// Removes `item` and returns the anchor it held.
    pub fn remove_item(&mut self, item: &Item<C>) -> Option<Position<C>> {
        let placed = self.grid.remove(item.id())?;
        let anchor = placed.anchor();
        trace!(item = %item.id(), %anchor, "Removed item");
        self.listeners.emit_removed(placed.item(), anchor);
        Some(anchor)
    }

    /// Moves a placed item so that its anchor becomes `anchor`.
    ///
    /// The item's own cells do not block the move, so shifting onto a partly overlapping
    /// region and moving to the current anchor both succeed.
    pub fn move_item(
        &mut self,
        item: &Item<C>,
        anchor: Position<C>,
    ) -> Result<bool, InvalidSizeError<C>> {
        let validator = PlacementValidator::new(&self.grid);
        validator.check_size(item.size())?;
        if !self.grid.contains_item(item.id()) || !validator.can_relocate(item, anchor)? {
            trace!(item = %item.id(), %anchor, "Rejected move");
            return Ok(false);
        }
        let Some(from) = self.grid.relocate(item.id(), anchor) else {
            return Ok(false);
        };
        trace!(item = %item.id(), %from, to = %anchor, "Moved item");
        self.listeners.emit_moved(item, anchor);
        Ok(true)
    }

    /// The item covering `cell`.
    pub fn get_item(&self, cell: Position<C>) -> Result<Option<&Item<C>>, PositionOutOfRangeError<C>> {
        if !cell.is_within(self.grid.bounds()) {
            return Err(PositionOutOfRangeError::new(cell, self.grid.bounds()));
        }
        Ok(self.grid.item_at(cell))
    }

    #[inline]
    pub fn try_get_item(&self, cell: Position<C>) -> Option<&Item<C>> {
        self.grid.item_at(cell)
    }

    /// Cells covered by `item`, ordered by `x` then `y`.
    pub fn get_positions(&self, item: &Item<C>) -> Result<Vec<Position<C>>, ItemNotFoundError> {
        self.try_get_positions(item)
            .ok_or_else(|| ItemNotFoundError::new(item.id()))
    }

    #[inline]
    pub fn try_get_positions(&self, item: &Item<C>) -> Option<Vec<Position<C>>> {
        self.grid
            .placement(item.id())
            .map(|p| p.footprint().cells().collect())
    }

    /// Lazily iterates the cells of `item`; empty if the item is not placed.
    #[inline]
    pub fn cells_of(&self, item: &Item<C>) -> MaybeIter<FootprintCells<C>> {
        MaybeIter::new(
            self.grid
                .placement(item.id())
                .map(|p| p.footprint().cells()),
        )
    }

    #[inline]
    pub fn footprint_of(&self, item: &Item<C>) -> Option<Footprint<C>> {
        self.grid.placement(item.id()).map(PlacedItem::footprint)
    }

    /// Counts placed items whose name equals `name`. `None` only matches unnamed items.
    pub fn get_item_count(&self, name: Option<&str>) -> usize {
        self.iter().filter(|item| item.name() == name).count()
    }

    /// Removes every item. `Cleared` is only emitted if something was placed.
    pub fn clear(&mut self) {
        let removed = self.grid.clear();
        if removed > 0 {
            debug!(removed, "Cleared inventory");
            self.listeners.emit_cleared();
        }
    }

    /// Writes the occupant of every cell into `matrix[x][y]`.
    ///
    /// The matrix must have exactly `width` columns of `height` entries each.
    pub fn copy_to(&self, matrix: &mut [Vec<Option<Item<C>>>]) -> Result<(), MatrixShapeError> {
        let (columns, rows) = (self.grid.columns(), self.grid.rows());
        let bad_column = matrix.iter().find(|column| column.len() != rows);
        if matrix.len() != columns || bad_column.is_some() {
            let actual_rows = bad_column
                .or(matrix.first())
                .map_or(0, Vec::len);
            return Err(MatrixShapeError::new(
                columns,
                rows,
                matrix.len(),
                actual_rows,
            ));
        }
        self.write_cells(matrix);
        Ok(())
    }

    /// Returns a fresh `width x height` matrix indexed `[x][y]`.
    pub fn to_matrix(&self) -> Vec<Vec<Option<Item<C>>>> {
        let mut matrix = vec![vec![None; self.grid.rows()]; self.grid.columns()];
        self.write_cells(&mut matrix);
        matrix
    }

    fn write_cells(&self, matrix: &mut [Vec<Option<Item<C>>>]) {
        let columns = self.grid.columns();
        for (slot, occupant) in self.grid.cell_slots().iter().enumerate() {
            let (x, y) = (slot % columns, slot / columns);
            matrix[x][y] = occupant
                .and_then(|id| self.grid.placement(id))
                .map(|p| p.item().clone());
        }
    }

    /// Placed items in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, C> {
        Iter {
            inner: self.grid.iter(),
        }
    }

    /// Placed items together with their anchors, in insertion order.
    #[inline]
    pub fn iter_placements(&self) -> btree_map::Values<'_, u64, PlacedItem<C>> {
        self.grid.iter()
    }

    #[inline]
    pub fn stats(&self) -> InventoryStats<C> {
        InventoryStats::collect(&self.grid)
    }

    /// Repacks all items with `repacker`.
    ///
    /// The repack is planned on a copy of the layout. The new layout is accepted only if it
    /// has the same bounds and holds exactly the same items. On success it replaces the
    /// layout and `Moved` is emitted for every item whose anchor changed, in placement order.
    /// On failure nothing changes. Returns the number of moved items.
    #[instrument(level = "debug", skip_all, fields(items = self.grid.len()), err(Display))]
    pub fn try_optimize_with<R>(&mut self, repacker: &R) -> Result<usize, RepackError<C>>
    where
        R: Repacker<C> + ?Sized,
    {
        let packed = repacker.repack(&self.grid)?;
        let moves = verified_moves(&self.grid, &packed)?;
        self.grid = packed;
        for (item, anchor) in &moves {
            self.listeners.emit_moved(item, *anchor);
        }
        debug!(moved = moves.len(), "Repacked inventory");
        Ok(moves.len())
    }

    /// Defragments the inventory with [`SpaceOptimizer`].
    ///
    /// # Panics
    ///
    /// Panics if an item that was placed before cannot be placed again. The greedy repack
    /// does not always find room for every item, for example when a tight hand-made layout
    /// leaves no sorted placement, so this can happen on a valid inventory. Use
    /// [`try_optimize_with`](Self::try_optimize_with) to handle that case.
    pub fn optimize_space(&mut self) -> usize {
        self.try_optimize_with(&SpaceOptimizer)
            .expect("every placed item fits again after repacking")
    }

    pub fn on_added<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Item<C>, Position<C>) + 'static,
    {
        self.listeners
            .register_placement(EventKind::Added, Box::new(listener))
    }

    pub fn on_removed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Item<C>, Position<C>) + 'static,
    {
        self.listeners
            .register_placement(EventKind::Removed, Box::new(listener))
    }

    pub fn on_moved<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Item<C>, Position<C>) + 'static,
    {
        self.listeners
            .register_placement(EventKind::Moved, Box::new(listener))
    }

    pub fn on_cleared<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.listeners.register_cleared(Box::new(listener))
    }

    /// Unregisters a listener. Returns `false` if the id is unknown.
    #[inline]
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[inline]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.count(kind)
    }
}

/// Renders one line per row; a cell shows the first letter of its item's name, `#` for an
/// item without a usable name and `.` when free.
impl<C: GridCoord> Display for Inventory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns = self.grid.columns();
        for (slot, occupant) in self.grid.cell_slots().iter().enumerate() {
            if slot > 0 && slot % columns == 0 {
                writeln!(f)?;
            }
            let glyph = match occupant.and_then(|id| self.grid.placement(id)) {
                None => '.',
                Some(p) => p
                    .item()
                    .name()
                    .and_then(|n| n.chars().next())
                    .unwrap_or('#'),
            };
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

/// Iterator over the placed items of an [`Inventory`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, C: GridCoord> {
    inner: btree_map::Values<'a, u64, PlacedItem<C>>,
}

impl<'a, C: GridCoord> Iterator for Iter<'a, C> {
    type Item = &'a Item<C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(PlacedItem::item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: GridCoord> DoubleEndedIterator for Iter<'_, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(PlacedItem::item)
    }
}

impl<C: GridCoord> ExactSizeIterator for Iter<'_, C> {}
impl<C: GridCoord> FusedIterator for Iter<'_, C> {}

impl<'a, C: GridCoord> IntoIterator for &'a Inventory<C> {
    type Item = &'a Item<C>;
    type IntoIter = Iter<'a, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
