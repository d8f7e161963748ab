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


//! # Grid index
//!
//! Occupancy bookkeeping for an inventory: a dense row-major cell table mapping every cell
//! to the handle of the item covering it, plus an insertion-ordered position map from item
//! to anchor.
//!
//! The raw mutators are crate-private and perform no validation. Callers establish bounds and
//! overlap freedom first (see [`crate::validate::PlacementValidator`]); the index only asserts
//! them in debug builds. [`GridIndex::place_first_fit`] is the public way to build a layout.

use crate::{item::Item, item::ItemId, search::FreePositionSearch};
use grid_alloc_core::{
    GridCoord,
    footprint::Footprint,
    position::{Position, Size},
};
use std::collections::{BTreeMap, HashMap, btree_map};

/// Read access to cell occupancy.
pub trait CellRead {
    type Coord: GridCoord;

    fn bounds(&self) -> Size<Self::Coord>;

    /// The handle occupying `cell`, or `None` for a free or out-of-range cell.
    fn occupant(&self, cell: Position<Self::Coord>) -> Option<ItemId>;

    fn contains_item(&self, id: ItemId) -> bool;

    /// Returns `true` if every cell of `footprint` is free or held by `ignore`.
    ///
    /// Cells outside of the grid count as free; bounds are checked separately.
    fn is_region_free(&self, footprint: &Footprint<Self::Coord>, ignore: Option<ItemId>) -> bool {
        footprint.cells().all(|cell| match self.occupant(cell) {
            None => true,
            Some(id) => Some(id) == ignore,
        })
    }
}

/// An item together with the anchor it currently occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedItem<C: GridCoord = i32> {
    item: Item<C>,
    anchor: Position<C>,
    sequence: u64,
}

impl<C: GridCoord> PlacedItem<C> {
    #[inline]
    pub fn item(&self) -> &Item<C> {
        &self.item
    }

    #[inline]
    pub fn anchor(&self) -> Position<C> {
        self.anchor
    }

    /// Insertion sequence number; smaller numbers were placed earlier.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[inline]
    pub fn footprint(&self) -> Footprint<C> {
        Footprint::new(self.anchor, self.item.size())
    }
}

#[derive(Debug, Clone)]
pub struct GridIndex<C: GridCoord = i32> {
    bounds: Size<C>,
    columns: usize,
    rows: usize,
    cells: Vec<Option<ItemId>>,
    placements: BTreeMap<u64, PlacedItem<C>>,
    sequence_of: HashMap<ItemId, u64>,
    next_sequence: u64,
}

impl<C: GridCoord> GridIndex<C> {
    /// Creates an empty index.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not a valid size or the cell table cannot be addressed.
    pub fn new(bounds: Size<C>) -> Self {
        assert!(bounds.is_valid(), "grid bounds must be positive");
        let columns = bounds
            .width()
            .to_usize()
            .expect("grid width fits in usize");
        let rows = bounds
            .height()
            .to_usize()
            .expect("grid height fits in usize");
        let area = columns
            .checked_mul(rows)
            .expect("grid area fits in usize");
        Self {
            bounds,
            columns,
            rows,
            cells: vec![None; area],
            placements: BTreeMap::new(),
            sequence_of: HashMap::new(),
            next_sequence: 0,
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of placed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Row-major cell table.
    #[inline]
    pub fn cell_slots(&self) -> &[Option<ItemId>] {
        &self.cells
    }

    #[inline]
    pub fn placement(&self, id: ItemId) -> Option<&PlacedItem<C>> {
        let seq = self.sequence_of.get(&id)?;
        self.placements.get(seq)
    }

    #[inline]
    pub fn item_at(&self, cell: Position<C>) -> Option<&Item<C>> {
        let id = self.occupant(cell)?;
        self.placement(id).map(PlacedItem::item)
    }

    /// Placed items in insertion order.
    #[inline]
    pub fn iter(&self) -> btree_map::Values<'_, u64, PlacedItem<C>> {
        self.placements.values()
    }

    /// Records `item` at `anchor` and marks its footprint as occupied.
    pub(crate) fn insert(&mut self, item: Item<C>, anchor: Position<C>) {
        let footprint = Footprint::new(anchor, item.size());
        debug_assert!(footprint.is_within(self.bounds), "footprint out of bounds");
        debug_assert!(!self.sequence_of.contains_key(&item.id()), "item already placed");
        debug_assert!(self.is_region_free(&footprint, None), "footprint overlaps");

        self.fill(&footprint, Some(item.id()));
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.sequence_of.insert(item.id(), sequence);
        self.placements.insert(
            sequence,
            PlacedItem {
                item,
                anchor,
                sequence,
            },
        );
    }

    /// Places `item` at the first free anchor in raster order.
    ///
    /// This is the free-slot placement primitive shared by first-fit insertion and repacking.
    /// Returns `None` without placing anything when the item is already placed or no anchor
    /// is free.
    pub fn place_first_fit(&mut self, item: &Item<C>) -> Option<Position<C>> {
        if self.contains_item(item.id()) {
            return None;
        }
        let anchor = FreePositionSearch::new(self).first_fit(item.size())?;
        self.insert(item.clone(), anchor);
        Some(anchor)
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Option<PlacedItem<C>> {
        let sequence = self.sequence_of.remove(&id)?;
        let placed = self
            .placements
            .remove(&sequence)
            .expect("sequence index and placements are consistent");
        self.fill(&placed.footprint(), None);
        Some(placed)
    }

    /// Moves a placed item to `anchor`, keeping its insertion sequence.
    ///
    /// Returns the previous anchor, or `None` if the item is not placed.
    pub(crate) fn relocate(&mut self, id: ItemId, anchor: Position<C>) -> Option<Position<C>> {
        let sequence = *self.sequence_of.get(&id)?;
        let (old, size) = {
            let placed = self.placements.get(&sequence)?;
            (placed.footprint(), placed.item.size())
        };
        let new = Footprint::new(anchor, size);
        debug_assert!(new.is_within(self.bounds), "footprint out of bounds");
        debug_assert!(self.is_region_free(&new, Some(id)), "footprint overlaps");

        self.fill(&old, None);
        self.fill(&new, Some(id));
        if let Some(placed) = self.placements.get_mut(&sequence) {
            placed.anchor = anchor;
        }
        Some(old.anchor())
    }

    /// Removes every item. Returns how many were placed.
    pub(crate) fn clear(&mut self) -> usize {
        let count = self.placements.len();
        self.cells.fill(None);
        self.placements.clear();
        self.sequence_of.clear();
        count
    }

    #[inline]
    fn fill(&mut self, footprint: &Footprint<C>, value: Option<ItemId>) {
        for cell in footprint.cells() {
            if let Some(slot) = cell.row_major_index(self.bounds) {
                self.cells[slot] = value;
            }
        }
    }
}

impl<C: GridCoord> CellRead for GridIndex<C> {
    type Coord = C;

    #[inline]
    fn bounds(&self) -> Size<C> {
        self.bounds
    }

    #[inline]
    fn occupant(&self, cell: Position<C>) -> Option<ItemId> {
        let slot = cell.row_major_index(self.bounds)?;
        self.cells[slot]
    }

    #[inline]
    fn contains_item(&self, id: ItemId) -> bool {
        self.sequence_of.contains_key(&id)
    }
}

impl<'a, C: GridCoord> IntoIterator for &'a GridIndex<C> {
    type Item = &'a PlacedItem<C>;
    type IntoIter = btree_map::Values<'a, u64, PlacedItem<C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn pos(x: i32, y: i32) -> Position<i32> {
        Position::new(x, y)
    }

    #[inline]
    fn item(w: i32, h: i32) -> Item<i32> {
        Item::unnamed(w, h)
    }

    fn occupied_cells(g: &GridIndex<i32>) -> usize {
        g.cell_slots().iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_new_index_is_empty() {
        let g = GridIndex::new(Size::new(3, 4));
        assert_eq!(g.columns(), 3);
        assert_eq!(g.rows(), 4);
        assert!(g.is_empty());
        assert_eq!(g.cell_slots().len(), 12);
        assert_eq!(occupied_cells(&g), 0);
    }

    #[test]
    fn test_insert_marks_footprint() {
        let mut g = GridIndex::new(Size::new(5, 5));
        let a = item(2, 3);
        g.insert(a.clone(), pos(1, 1));

        assert_eq!(occupied_cells(&g), 6);
        for x in 1..3 {
            for y in 1..4 {
                assert_eq!(g.occupant(pos(x, y)), Some(a.id()));
            }
        }
        assert_eq!(g.occupant(pos(0, 0)), None);
        assert_eq!(g.item_at(pos(2, 3)), Some(&a));
        assert_eq!(g.placement(a.id()).map(|p| p.anchor()), Some(pos(1, 1)));
    }

    #[test]
    fn test_remove_clears_footprint() {
        let mut g = GridIndex::new(Size::new(5, 5));
        let a = item(2, 2);
        let b = item(1, 1);
        g.insert(a.clone(), pos(0, 0));
        g.insert(b.clone(), pos(4, 4));

        let removed = g.remove(a.id()).unwrap();
        assert_eq!(removed.anchor(), pos(0, 0));
        assert_eq!(occupied_cells(&g), 1);
        assert!(!g.contains_item(a.id()));
        assert!(g.contains_item(b.id()));
        assert!(g.remove(a.id()).is_none());
    }

    #[test]
    fn test_relocate_overlapping_itself() {
        let mut g = GridIndex::new(Size::new(5, 5));
        let a = item(2, 2);
        g.insert(a.clone(), pos(0, 0));

        assert_eq!(g.relocate(a.id(), pos(1, 1)), Some(pos(0, 0)));
        assert_eq!(occupied_cells(&g), 4);
        assert_eq!(g.occupant(pos(0, 0)), None);
        assert_eq!(g.occupant(pos(1, 1)), Some(a.id()));
        assert_eq!(g.occupant(pos(2, 2)), Some(a.id()));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut g = GridIndex::new(Size::new(4, 4));
        let items: Vec<_> = (0..4).map(|_| item(1, 1)).collect();
        for (i, it) in items.iter().enumerate() {
            g.insert(it.clone(), pos(3 - i as i32, 0));
        }
        let order: Vec<_> = g.iter().map(|p| p.item().id()).collect();
        let expected: Vec<_> = items.iter().map(|i| i.id()).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_relocate_keeps_sequence() {
        let mut g = GridIndex::new(Size::new(4, 4));
        let a = item(1, 1);
        let b = item(1, 1);
        g.insert(a.clone(), pos(0, 0));
        g.insert(b.clone(), pos(1, 0));
        g.relocate(a.id(), pos(3, 3));

        let order: Vec<_> = g.iter().map(|p| p.item().id()).collect();
        assert_eq!(order, vec![a.id(), b.id()]);
    }

    #[test]
    fn test_place_first_fit_uses_raster_order() {
        let mut g = GridIndex::new(Size::new(5, 5));
        g.insert(item(1, 1), pos(1, 1));
        let big = item(3, 3);
        assert_eq!(g.place_first_fit(&big), Some(pos(2, 0)));
        assert!(g.contains_item(big.id()));
    }

    #[test]
    fn test_place_first_fit_refuses_placed_item() {
        let mut g = GridIndex::new(Size::new(4, 4));
        let a = item(1, 1);
        assert_eq!(g.place_first_fit(&a), Some(pos(0, 0)));
        assert_eq!(g.place_first_fit(&a), None);
        assert_eq!(g.len(), 1);
        assert_eq!(occupied_cells(&g), 1);
    }

    #[test]
    fn test_clear_resets_cells_and_positions() {
        let mut g = GridIndex::new(Size::new(3, 3));
        g.insert(item(2, 2), pos(0, 0));
        g.insert(item(1, 3), pos(2, 0));
        assert_eq!(g.clear(), 2);
        assert!(g.is_empty());
        assert_eq!(occupied_cells(&g), 0);
        assert_eq!(g.clear(), 0);
    }

    #[test]
    fn test_region_free_ignores_designated_item() {
        let mut g = GridIndex::new(Size::new(4, 4));
        let a = item(2, 2);
        g.insert(a.clone(), pos(0, 0));
        let shifted = Footprint::new(pos(1, 1), Size::new(2, 2));
        assert!(!g.is_region_free(&shifted, None));
        assert!(g.is_region_free(&shifted, Some(a.id())));
    }
}
