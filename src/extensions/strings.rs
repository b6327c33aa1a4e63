// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String predicates.

/// `true` when the string is absent or has zero length.
///
/// `None` stands in for a null string.
#[inline]
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
