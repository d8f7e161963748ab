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


//! # Seeded layout generation
//!
//! Produces reproducible inventories for benchmarks, demos and randomized tests. Item sides
//! are drawn uniformly from the configured range; each item first tries a few random anchors
//! and then, if enabled, falls back to first fit. Items that fit nowhere are skipped.

mod config;
mod err;

pub use config::{LayoutGenConfig, LayoutGenConfigBuilder};
pub use err::{LayoutGenConfigBuildError, SideRangeError};

use crate::{inventory::Inventory, item::Item};
use grid_alloc_core::{
    GridCoord,
    position::{Position, Size},
};
use rand::{Rng, SeedableRng, distr::uniform::SampleUniform};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

pub struct LayoutGenerator<C: GridCoord + SampleUniform = i32> {
    config: LayoutGenConfig<C>,
    rng: ChaCha8Rng,
}

impl<C: GridCoord + SampleUniform> From<LayoutGenConfig<C>> for LayoutGenerator<C> {
    fn from(config: LayoutGenConfig<C>) -> Self {
        Self::new(config)
    }
}

impl<C: GridCoord + SampleUniform> LayoutGenerator<C> {
    pub fn new(config: LayoutGenConfig<C>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed()),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &LayoutGenConfig<C> {
        &self.config
    }

    /// Draws one item with a random size and name.
    pub fn sample_item(&mut self) -> Item<C> {
        let (min, max) = (self.config.min_side, self.config.max_side);
        let size = Size::new(
            self.rng.random_range(min..=max),
            self.rng.random_range(min..=max),
        );
        let unnamed =
            self.config.names.is_empty() || self.rng.random_bool(self.config.unnamed_ratio);
        if unnamed {
            return Item::new(None, size);
        }
        let idx = self.rng.random_range(0..self.config.names.len());
        Item::new(Some(self.config.names[idx].as_str()), size)
    }

    /// Draws `item_count` items without placing them.
    pub fn sample_items(&mut self) -> Vec<Item<C>> {
        (0..self.config.item_count)
            .map(|_| self.sample_item())
            .collect()
    }

    fn sample_anchor(&mut self, size: Size<C>) -> Option<Position<C>> {
        let bounds = self.config.inventory.bounds();
        if !size.fits_within(bounds) {
            return None;
        }
        let x = self
            .rng
            .random_range(C::zero()..=bounds.width() - size.width());
        let y = self
            .rng
            .random_range(C::zero()..=bounds.height() - size.height());
        Some(Position::new(x, y))
    }

    /// Generates a populated inventory.
    #[instrument(level = "debug", skip_all, fields(seed = self.config.seed(), items = self.config.item_count))]
    pub fn generate(&mut self) -> Inventory<C> {
        let mut inventory = Inventory::from_config(self.config.inventory);
        let mut skipped = 0usize;

        for _ in 0..self.config.item_count {
            let item = self.sample_item();
            let mut placed = false;
            for _ in 0..self.config.placement_attempts {
                let Some(anchor) = self.sample_anchor(item.size()) else {
                    break;
                };
                if matches!(inventory.add_item_at(&item, anchor), Ok(true)) {
                    placed = true;
                    break;
                }
            }
            if !placed && self.config.first_fit_fallback {
                placed = matches!(inventory.add_item(&item), Ok(Some(_)));
            }
            if !placed {
                trace!(item = %item, "Skipping item without free position");
                skipped += 1;
            }
        }

        debug!(placed = inventory.len(), skipped, "Generated layout");
        inventory
    }
}
