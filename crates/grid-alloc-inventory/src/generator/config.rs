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


use super::err::{LayoutGenConfigBuildError, SideRangeError};
use crate::config::InventoryConfig;
use grid_alloc_core::GridCoord;
use num_traits::NumCast;
use rand::Rng;
use std::fmt::Display;

/// Configuration for generating a random but reproducible inventory layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGenConfig<C: GridCoord = i32> {
    pub(crate) inventory: InventoryConfig<C>,
    /// How many items are drawn. Items that do not fit are skipped.
    pub(crate) item_count: usize,
    pub(crate) min_side: C,
    pub(crate) max_side: C,
    /// Random anchors tried per item before falling back to first fit.
    pub(crate) placement_attempts: usize,
    pub(crate) first_fit_fallback: bool,
    pub(crate) names: Vec<String>,
    /// Probability that an item is drawn without a name.
    pub(crate) unnamed_ratio: f64,
    pub(crate) seed: u64,
}

#[inline]
fn coord<C: GridCoord>(v: i64) -> C {
    <C as NumCast>::from(v).expect("default value fits into the coordinate type")
}

impl<C: GridCoord> Default for LayoutGenConfig<C> {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::new(coord(12), coord(8))
                .expect("default grid dimensions are positive"),
            item_count: 40,
            min_side: coord(1),
            max_side: coord(3),
            placement_attempts: 4,
            first_fit_fallback: true,
            names: ["Sword", "Shield", "Potion", "Ring", "Arrow", "Bow"]
                .into_iter()
                .map(String::from)
                .collect(),
            unnamed_ratio: 0.1,
            seed: 42,
        }
    }
}

impl<C: GridCoord> LayoutGenConfig<C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        inventory: InventoryConfig<C>,
        item_count: usize,
        min_side: C,
        max_side: C,
        placement_attempts: usize,
        first_fit_fallback: bool,
        names: Vec<String>,
        unnamed_ratio: f64,
        seed: u64,
    ) -> Result<Self, LayoutGenConfigBuildError<C>> {
        if min_side <= C::zero() || min_side > max_side {
            return Err(SideRangeError::new(min_side, max_side).into());
        }
        if !(0.0..=1.0).contains(&unnamed_ratio) {
            return Err(LayoutGenConfigBuildError::InvalidUnnamedRatio(unnamed_ratio));
        }
        Ok(Self {
            inventory,
            item_count,
            min_side,
            max_side,
            placement_attempts,
            first_fit_fallback,
            names,
            unnamed_ratio,
            seed,
        })
    }

    #[inline]
    pub fn inventory(&self) -> InventoryConfig<C> {
        self.inventory
    }
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }
    #[inline]
    pub fn min_side(&self) -> C {
        self.min_side
    }
    #[inline]
    pub fn max_side(&self) -> C {
        self.max_side
    }
    #[inline]
    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }
    #[inline]
    pub fn first_fit_fallback(&self) -> bool {
        self.first_fit_fallback
    }
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }
    #[inline]
    pub fn unnamed_ratio(&self) -> f64 {
        self.unnamed_ratio
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<C: GridCoord> Display for LayoutGenConfig<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LayoutGenConfig {{ grid: {}, items: {}, sides: [{}, {}], attempts: {}, first_fit_fallback: {}, names: {}, unnamed_ratio: {:.2}, seed: {} }}",
            self.inventory.bounds(),
            self.item_count,
            self.min_side,
            self.max_side,
            self.placement_attempts,
            self.first_fit_fallback,
            self.names.len(),
            self.unnamed_ratio,
            self.seed
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGenConfigBuilder<C: GridCoord = i32> {
    width: Option<C>,
    height: Option<C>,
    item_count: Option<usize>,
    min_side: C,
    max_side: C,
    placement_attempts: usize,
    first_fit_fallback: bool,
    names: Vec<String>,
    unnamed_ratio: f64,
    seed: u64,
}

impl<C: GridCoord> Default for LayoutGenConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GridCoord> LayoutGenConfigBuilder<C> {
    pub fn new() -> Self {
        let defaults = LayoutGenConfig::<C>::default();
        Self {
            width: None,
            height: None,
            item_count: None,
            min_side: defaults.min_side,
            max_side: defaults.max_side,
            placement_attempts: defaults.placement_attempts,
            first_fit_fallback: defaults.first_fit_fallback,
            names: defaults.names,
            unnamed_ratio: defaults.unnamed_ratio,
            seed: defaults.seed,
        }
    }

    #[inline]
    pub fn width(mut self, v: C) -> Self {
        self.width = Some(v);
        self
    }
    #[inline]
    pub fn height(mut self, v: C) -> Self {
        self.height = Some(v);
        self
    }
    #[inline]
    pub fn item_count(mut self, v: usize) -> Self {
        self.item_count = Some(v);
        self
    }
    #[inline]
    pub fn side_range(mut self, min: C, max: C) -> Self {
        self.min_side = min;
        self.max_side = max;
        self
    }
    #[inline]
    pub fn placement_attempts(mut self, v: usize) -> Self {
        self.placement_attempts = v;
        self
    }
    #[inline]
    pub fn first_fit_fallback(mut self, yes: bool) -> Self {
        self.first_fit_fallback = yes;
        self
    }
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }
    #[inline]
    pub fn unnamed_ratio(mut self, v: f64) -> Self {
        self.unnamed_ratio = v;
        self
    }
    pub fn random_seed(mut self) -> Self {
        self.seed = rand::rng().random();
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<LayoutGenConfig<C>, LayoutGenConfigBuildError<C>> {
        use LayoutGenConfigBuildError::*;
        let width = self.width.ok_or(MissingWidth)?;
        let height = self.height.ok_or(MissingHeight)?;
        let item_count = self.item_count.ok_or(MissingItemCount)?;

        LayoutGenConfig::new(
            InventoryConfig::new(width, height)?,
            item_count,
            self.min_side,
            self.max_side,
            self.placement_attempts,
            self.first_fit_fallback,
            self.names,
            self.unnamed_ratio,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = LayoutGenConfig::<i32>::default();
        assert_eq!(cfg.inventory().width(), 12);
        assert_eq!(cfg.inventory().height(), 8);
        assert!(cfg.min_side() <= cfg.max_side());
        assert!(!cfg.names().is_empty());

        let rebuilt = LayoutGenConfig::new(
            cfg.inventory(),
            cfg.item_count(),
            cfg.min_side(),
            cfg.max_side(),
            cfg.placement_attempts(),
            cfg.first_fit_fallback(),
            cfg.names().to_vec(),
            cfg.unnamed_ratio(),
            cfg.seed(),
        );
        assert_eq!(rebuilt, Ok(cfg));
    }

    #[test]
    fn test_builder_missing_fields() {
        use LayoutGenConfigBuildError::*;
        let b = LayoutGenConfigBuilder::<i32>::new();
        assert_eq!(b.clone().build(), Err(MissingWidth));
        assert_eq!(b.clone().width(4).build(), Err(MissingHeight));
        assert_eq!(b.width(4).height(4).build(), Err(MissingItemCount));
    }

    #[test]
    fn test_builder_validates_ranges() {
        let base = LayoutGenConfigBuilder::<i32>::new()
            .width(4)
            .height(4)
            .item_count(3);

        assert!(matches!(
            base.clone().side_range(0, 2).build(),
            Err(LayoutGenConfigBuildError::InvalidSideRange(e)) if e.min() == 0
        ));
        assert!(matches!(
            base.clone().side_range(3, 2).build(),
            Err(LayoutGenConfigBuildError::InvalidSideRange(_))
        ));
        assert!(matches!(
            base.clone().unnamed_ratio(1.5).build(),
            Err(LayoutGenConfigBuildError::InvalidUnnamedRatio(_))
        ));
        assert!(matches!(
            base.clone().width(0).build(),
            Err(LayoutGenConfigBuildError::InvalidGridDimensions(_))
        ));

        let cfg = base
            .side_range(2, 2)
            .names(["a", "b"])
            .seed(7)
            .build()
            .expect("valid config");
        assert_eq!(cfg.names(), ["a".to_string(), "b".to_string()]);
        assert_eq!(cfg.seed(), 7);
    }
}
