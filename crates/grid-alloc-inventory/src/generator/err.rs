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


use crate::err::InvalidGridDimensionsError;
use grid_alloc_core::GridCoord;
use std::fmt::Display;

/// The side range `[min, max]` of generated items is empty or not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRangeError<C: GridCoord = i32> {
    min: C,
    max: C,
}

impl<C: GridCoord> SideRangeError<C> {
    pub fn new(min: C, max: C) -> Self {
        Self { min, max }
    }
    pub fn min(&self) -> C {
        self.min
    }
    pub fn max(&self) -> C {
        self.max
    }
}

impl<C: GridCoord> Display for SideRangeError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SideRangeError: side range [{}, {}] must be non-empty and positive",
            self.min, self.max
        )
    }
}

impl<C: GridCoord> std::error::Error for SideRangeError<C> {}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutGenConfigBuildError<C: GridCoord = i32> {
    InvalidGridDimensions(InvalidGridDimensionsError<C>),
    InvalidSideRange(SideRangeError<C>),
    InvalidUnnamedRatio(f64),
    MissingWidth,
    MissingHeight,
    MissingItemCount,
}

impl<C: GridCoord> Display for LayoutGenConfigBuildError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LayoutGenConfigBuildError::*;
        match self {
            InvalidGridDimensions(e) => write!(f, "{}", e),
            InvalidSideRange(e) => write!(f, "{}", e),
            InvalidUnnamedRatio(r) => write!(f, "Unnamed ratio {} is outside of [0, 1]", r),
            MissingWidth => write!(f, "Missing width"),
            MissingHeight => write!(f, "Missing height"),
            MissingItemCount => write!(f, "Missing item_count"),
        }
    }
}

impl<C: GridCoord> From<InvalidGridDimensionsError<C>> for LayoutGenConfigBuildError<C> {
    fn from(err: InvalidGridDimensionsError<C>) -> Self {
        Self::InvalidGridDimensions(err)
    }
}

impl<C: GridCoord> From<SideRangeError<C>> for LayoutGenConfigBuildError<C> {
    fn from(err: SideRangeError<C>) -> Self {
        Self::InvalidSideRange(err)
    }
}

impl<C: GridCoord> std::error::Error for LayoutGenConfigBuildError<C> {}
