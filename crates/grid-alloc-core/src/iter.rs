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


//! An iterator that may be absent.

use std::iter::FusedIterator;

/// Wraps an optional iterator; a missing iterator yields nothing.
///
/// Lets lookups such as "cells of an item, if it is placed" return a single concrete
/// iterator type instead of an `Option` of one.
#[derive(Debug, Clone)]
pub struct MaybeIter<T> {
    inner: Option<T>,
}

impl<T> MaybeIter<T> {
    #[inline]
    pub fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for MaybeIter<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_yields_nothing() {
        let mut it: MaybeIter<std::vec::IntoIter<u8>> = MaybeIter::new(None);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_present_forwards() {
        let it = MaybeIter::new(Some(vec![1, 2, 3].into_iter()));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
