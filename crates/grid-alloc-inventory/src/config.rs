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


use crate::err::{InvalidGridDimensionsError, InventoryConfigBuildError};
use grid_alloc_core::{GridCoord, position::Size};
use std::fmt::Display;

/// How construction treats initial entries that cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstructionPolicy {
    /// The first infeasible entry fails the whole construction.
    #[default]
    Strict,
    /// Infeasible entries are logged and skipped.
    SkipInvalid,
}

impl Display for ConstructionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionPolicy::Strict => write!(f, "Strict"),
            ConstructionPolicy::SkipInvalid => write!(f, "SkipInvalid"),
        }
    }
}

/// Validated grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryConfig<C: GridCoord = i32> {
    width: C,
    height: C,
    construction: ConstructionPolicy,
}

impl<C: GridCoord> InventoryConfig<C> {
    /// Largest number of cells a grid may span.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Validates the dimensions.
    ///
    /// Both must be positive, and the grid may span at most [`MAX_CELLS`](Self::MAX_CELLS)
    /// cells so that its cell table can always be allocated.
    pub fn new(width: C, height: C) -> Result<Self, InvalidGridDimensionsError<C>> {
        if width <= C::zero() || height <= C::zero() {
            return Err(InvalidGridDimensionsError::new(width, height));
        }
        let cells = width
            .to_usize()
            .zip(height.to_usize())
            .and_then(|(w, h)| w.checked_mul(h));
        if !cells.is_some_and(|n| n <= Self::MAX_CELLS) {
            return Err(InvalidGridDimensionsError::new(width, height));
        }
        Ok(Self {
            width,
            height,
            construction: ConstructionPolicy::default(),
        })
    }

    #[inline]
    pub fn with_construction(mut self, policy: ConstructionPolicy) -> Self {
        self.construction = policy;
        self
    }

    #[inline]
    pub fn width(&self) -> C {
        self.width
    }

    #[inline]
    pub fn height(&self) -> C {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Size<C> {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn construction(&self) -> ConstructionPolicy {
        self.construction
    }
}

impl<C: GridCoord> Display for InventoryConfig<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InventoryConfig {{ {}x{}, construction: {} }}",
            self.width, self.height, self.construction
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfigBuilder<C: GridCoord = i32> {
    width: Option<C>,
    height: Option<C>,
    construction: ConstructionPolicy,
}

impl<C: GridCoord> Default for InventoryConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GridCoord> InventoryConfigBuilder<C> {
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            construction: ConstructionPolicy::default(),
        }
    }

    pub fn width(mut self, v: C) -> Self {
        self.width = Some(v);
        self
    }

    pub fn height(mut self, v: C) -> Self {
        self.height = Some(v);
        self
    }

    pub fn construction(mut self, v: ConstructionPolicy) -> Self {
        self.construction = v;
        self
    }

    pub fn build(self) -> Result<InventoryConfig<C>, InventoryConfigBuildError<C>> {
        let width = self.width.ok_or(InventoryConfigBuildError::MissingWidth)?;
        let height = self.height.ok_or(InventoryConfigBuildError::MissingHeight)?;
        Ok(InventoryConfig::new(width, height)?.with_construction(self.construction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_dimensions() {
        let missing_width = InventoryConfigBuilder::<i32>::new().height(3).build();
        assert_eq!(missing_width, Err(InventoryConfigBuildError::MissingWidth));

        let missing_height = InventoryConfigBuilder::<i32>::new().width(3).build();
        assert_eq!(missing_height, Err(InventoryConfigBuildError::MissingHeight));
    }

    #[test]
    fn test_builder_rejects_non_positive_dimensions() {
        for (w, h) in [(-1, 10), (2, -1), (-10, -100), (0, 0), (0, 10), (10, 0)] {
            let result = InventoryConfigBuilder::<i32>::new().width(w).height(h).build();
            assert_eq!(
                result,
                Err(InventoryConfigBuildError::InvalidGridDimensions(
                    InvalidGridDimensionsError::new(w, h)
                ))
            );
        }
    }

    #[test]
    fn test_unallocatable_grid_is_rejected() {
        for (w, h) in [(i64::MAX, 2), (i64::MAX, i64::MAX), (1 << 13, (1 << 12) + 1)] {
            assert_eq!(
                InventoryConfig::new(w, h),
                Err(InvalidGridDimensionsError::new(w, h))
            );
        }
        let largest = InventoryConfig::new(1i64 << 12, 1i64 << 12).expect("at the cap");
        assert_eq!(largest.bounds().area(), 1 << 24);
    }

    #[test]
    fn test_builder_defaults_to_strict_construction() {
        let cfg = InventoryConfigBuilder::<i32>::new()
            .width(3)
            .height(4)
            .build()
            .unwrap();
        assert_eq!(cfg.width(), 3);
        assert_eq!(cfg.height(), 4);
        assert_eq!(cfg.construction(), ConstructionPolicy::Strict);

        let lenient = cfg.with_construction(ConstructionPolicy::SkipInvalid);
        assert_eq!(lenient.construction(), ConstructionPolicy::SkipInvalid);
    }
}
