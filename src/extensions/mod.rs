// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small helpers that sit next to the contracts.
//!
//! A grab-bag: bulk insertion into a `HashSet`, a JSON dump for debugging,
//! durations from integer seconds, and the null-or-empty string predicate the
//! string contracts are built on.

pub mod collections;
pub mod duration;
#[cfg(feature = "json")]
pub mod json;
pub mod strings;
