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


//! Occupancy and fragmentation statistics of a grid.

use crate::grid::{CellRead, GridIndex};
use grid_alloc_core::{GridCoord, footprint::Footprint, position::Position};
use std::{collections::VecDeque, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryStats<C: GridCoord = i32> {
    item_count: usize,
    occupied_cells: usize,
    free_cells: usize,
    free_regions: usize,
    largest_free_region: usize,
    largest_free_square: usize,
    occupied_bounds: Option<Footprint<C>>,
}

impl<C: GridCoord> InventoryStats<C> {
    pub fn collect(grid: &GridIndex<C>) -> Self {
        let cells = grid.cell_slots();
        let occupied_cells = cells.iter().filter(|c| c.is_some()).count();
        let (free_regions, largest_free_region) = free_regions(cells, grid.columns(), grid.rows());

        Self {
            item_count: grid.len(),
            occupied_cells,
            free_cells: cells.len() - occupied_cells,
            free_regions,
            largest_free_region,
            largest_free_square: largest_free_square(cells, grid.columns()),
            occupied_bounds: occupied_bounds(grid),
        }
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.occupied_cells
    }

    #[inline]
    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// Number of 4-connected components of free cells.
    #[inline]
    pub fn free_regions(&self) -> usize {
        self.free_regions
    }

    /// Cell count of the largest 4-connected free component.
    #[inline]
    pub fn largest_free_region(&self) -> usize {
        self.largest_free_region
    }

    /// Side length of the largest all-free square.
    #[inline]
    pub fn largest_free_square(&self) -> usize {
        self.largest_free_square
    }

    /// Smallest rectangle covering every placed item, or `None` when empty.
    #[inline]
    pub fn occupied_bounds(&self) -> Option<Footprint<C>> {
        self.occupied_bounds
    }

    /// Share of free cells outside of the largest free region, in `[0, 1]`.
    ///
    /// `0.0` means all free space is one connected region (or there is none).
    pub fn fragmentation(&self) -> f64 {
        if self.free_cells == 0 {
            return 0.0;
        }
        1.0 - self.largest_free_region as f64 / self.free_cells as f64
    }
}

impl<C: GridCoord> Display for InventoryStats<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InventoryStats {{ items: {}, occupied: {}, free: {}, free regions: {}, largest free square: {} }}",
            self.item_count,
            self.occupied_cells,
            self.free_cells,
            self.free_regions,
            self.largest_free_square
        )
    }
}

fn free_regions<T>(cells: &[Option<T>], columns: usize, rows: usize) -> (usize, usize) {
    let mut seen = vec![false; cells.len()];
    let mut queue = VecDeque::new();
    let (mut regions, mut largest) = (0, 0);

    for start in 0..cells.len() {
        if seen[start] || cells[start].is_some() {
            continue;
        }
        regions += 1;
        seen[start] = true;
        queue.push_back(start);
        let mut size = 0;
        while let Some(slot) = queue.pop_front() {
            size += 1;
            let (x, y) = (slot % columns, slot / columns);
            let neighbours = [
                (x > 0).then(|| slot - 1),
                (x + 1 < columns).then(|| slot + 1),
                (y > 0).then(|| slot - columns),
                (y + 1 < rows).then(|| slot + columns),
            ];
            for next in neighbours.into_iter().flatten() {
                if !seen[next] && cells[next].is_none() {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        largest = largest.max(size);
    }
    (regions, largest)
}

fn largest_free_square<T>(cells: &[Option<T>], columns: usize) -> usize {
    // side[slot]: largest free square with its bottom-right corner at slot
    let mut side = vec![0usize; cells.len()];
    let mut best = 0;
    for (slot, cell) in cells.iter().enumerate() {
        if cell.is_some() {
            continue;
        }
        let (x, y) = (slot % columns, slot / columns);
        side[slot] = if x == 0 || y == 0 {
            1
        } else {
            1 + side[slot - 1]
                .min(side[slot - columns])
                .min(side[slot - columns - 1])
        };
        best = best.max(side[slot]);
    }
    best
}

fn occupied_bounds<C: GridCoord>(grid: &GridIndex<C>) -> Option<Footprint<C>> {
    let mut placed = grid.iter().filter_map(|p| {
        let fp = p.footprint();
        Some((fp.anchor(), fp.end()?))
    });
    let (mut min, mut max) = placed.next()?;
    for (lo, hi) in placed {
        min = Position::new(min.x().min(lo.x()), min.y().min(lo.y()));
        max = Position::new(max.x().max(hi.x()), max.y().max(hi.y()));
    }
    debug_assert!(Footprint::new(min, max - min).is_within(grid.bounds()));
    Some(Footprint::new(min, max - min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{inventory::Inventory, item::Item};
    use grid_alloc_core::position::Size;

    #[inline]
    fn pos(x: i32, y: i32) -> Position<i32> {
        Position::new(x, y)
    }

    #[test]
    fn test_empty_grid() {
        let stats = Inventory::<i32>::new(4, 3).expect("valid").stats();
        assert_eq!(stats.item_count(), 0);
        assert_eq!(stats.occupied_cells(), 0);
        assert_eq!(stats.free_cells(), 12);
        assert_eq!(stats.free_regions(), 1);
        assert_eq!(stats.largest_free_region(), 12);
        assert_eq!(stats.largest_free_square(), 3);
        assert_eq!(stats.occupied_bounds(), None);
        assert_eq!(stats.fragmentation(), 0.0);
    }

    #[test]
    fn test_split_free_space() {
        // a wall down column 2 splits the free space in two
        let inventory = Inventory::with_items(
            5,
            3,
            [(Item::named("wall", 1, 3), pos(2, 0)), (Item::named("box", 1, 1), pos(4, 2))],
        )
        .expect("feasible layout");
        let stats = inventory.stats();
        assert_eq!(stats.item_count(), 2);
        assert_eq!(stats.occupied_cells(), 4);
        assert_eq!(stats.free_cells(), 11);
        assert_eq!(stats.free_regions(), 2);
        assert_eq!(stats.largest_free_region(), 6);
        assert_eq!(stats.largest_free_square(), 2);
        assert_eq!(
            stats.occupied_bounds(),
            Some(Footprint::new(pos(2, 0), Size::new(3, 3)))
        );
        assert!((stats.fragmentation() - 5.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_grid() {
        let inventory = Inventory::with_items(2, 2, [(Item::unnamed(2, 2), pos(0, 0))])
            .expect("feasible layout");
        let stats = inventory.stats();
        assert_eq!(stats.free_cells(), 0);
        assert_eq!(stats.free_regions(), 0);
        assert_eq!(stats.largest_free_square(), 0);
        assert_eq!(stats.fragmentation(), 0.0);
    }

    #[test]
    fn test_optimizing_consolidates_free_space() {
        let mut inventory = Inventory::with_items(
            4,
            4,
            [
                (Item::unnamed(1, 1), pos(0, 0)),
                (Item::unnamed(1, 1), pos(3, 3)),
                (Item::unnamed(1, 1), pos(0, 3)),
                (Item::unnamed(1, 1), pos(3, 0)),
                (Item::unnamed(2, 2), pos(1, 1)),
            ],
        )
        .expect("feasible layout");
        assert_eq!(inventory.stats().largest_free_square(), 1);
        inventory.optimize_space();
        let stats = inventory.stats();
        assert_eq!(stats.largest_free_square(), 2);
        assert_eq!(stats.free_regions(), 1);
        assert_eq!(
            stats.occupied_bounds(),
            Some(Footprint::new(pos(0, 0), Size::new(4, 2)))
        );
    }
}
