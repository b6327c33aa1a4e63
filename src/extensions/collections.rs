// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bulk insertion into hash sets.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Insert every item from `items` into `set`.
///
/// Items already present are skipped. Returns how many were new.
pub fn add_range<T, S, I>(set: &mut HashSet<T, S>, items: I) -> usize
where
    T: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = T>,
{
    let before = set.len();
    set.extend(items);
    set.len() - before
}

/// Method form of [`add_range`].
pub trait AddRange<T> {
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize;
}

impl<T: Eq + Hash, S: BuildHasher> AddRange<T> for HashSet<T, S> {
    #[inline]
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        add_range(self, items)
    }
}
