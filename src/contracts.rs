// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precondition checks that fail fast with a typed error.
//!
//! Put these at the top of a function, one per precondition, and propagate
//! with `?`. The first check that fails aborts the caller. Nothing is retried
//! or aggregated.
//!
//! Unlike `debug_assert!`, these run in every build and never panic: a
//! violation comes back as a [`ContractError`] the caller can match on.
//!
//! # Contract Table
//!
//! | Contract Function               | Passes when                        | Failure kind      |
//! |---------------------------------|------------------------------------|-------------------|
//! | `greater_or_equal`              | `value >= min`                     | `OutOfRange`      |
//! | `greater_than`                  | `value > min`                      | `OutOfRange`      |
//! | `less_or_equal`                 | `value <= max`                     | `OutOfRange`      |
//! | `less_than`                     | `value < max`                      | `OutOfRange`      |
//! | `equals`                        | `value == expected`                | `OutOfRange`      |
//! | `is_not_null`                   | `Some(_)`                          | `NullArgument`    |
//! | `is_null`                       | `None`                             | `InvalidArgument` |
//! | `reference_equals`              | same instance                      | `InvalidArgument` |
//! | `reference_not_equals`          | different instances                | `InvalidArgument` |
//! | `is_default`                    | `value == T::default()`            | `InvalidArgument` |
//! | `is_not_default`                | `value != T::default()`            | `InvalidArgument` |
//! | `is_true` / `is_false`          | the boolean matches                | `InvalidArgument` |
//! | `is_empty_id`                   | nil UUID                           | `InvalidArgument` |
//! | `is_not_empty_id`               | non-nil UUID                       | `InvalidArgument` |
//! | `string_is_null_or_empty`       | `None` or `Some("")`               | `InvalidArgument` |
//! | `string_is_not_null_or_empty`   | non-empty string                   | `InvalidArgument` |
//! | `sequence_is_not_null_or_empty` | at least one element               | `InvalidArgument` |
//!
//! Checks that take `message: Option<&str>` use the caller's text when given
//! and a generated default otherwise.
//!
//! # Usage
//!
//! ```ignore
//! use ensure_kit::contracts::*;
//!
//! fn reserve(slots: i32, owner: Option<&str>) -> Result<(), ContractError> {
//!     greater_than(slots, 0, None)?;
//!     string_is_not_null_or_empty(owner, Some("owner is required"))?;
//!     // ...
//!     Ok(())
//! }
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

#[cfg(feature = "uuid")]
use uuid::Uuid;

use crate::error::{ContractError, ContractErrorKind, ContractResult};
use crate::extensions::strings::is_null_or_empty;

// ============================================================================
// FAILURE PATH
// ============================================================================

#[cold]
fn violated(kind: ContractErrorKind, message: String) -> ContractError {
    // `message` is reserved by tracing for the event text.
    tracing::debug!(%kind, detail = %message, "contract violated");
    ContractError::new(kind, message)
}

/// Fail with the caller's message, or the generated default when `None`.
#[cold]
fn violated_with(
    kind: ContractErrorKind,
    message: Option<&str>,
    default: impl FnOnce() -> String,
) -> ContractError {
    violated(kind, message.map_or_else(default, str::to_owned))
}

#[inline]
fn ensure(condition: bool, violation: impl FnOnce() -> ContractError) -> ContractResult {
    if condition {
        Ok(())
    } else {
        Err(violation())
    }
}

// ============================================================================
// NUMERIC BOUNDS
// ============================================================================
//
// Comparisons go through `partial_cmp`, so an unordered pair (NaN on either
// side) fails every bound.

/// Check that `value >= min`. The bound itself passes.
#[inline]
pub fn greater_or_equal<T: PartialOrd + Display>(value: T, min: T) -> ContractResult {
    ensure(
        matches!(
            value.partial_cmp(&min),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        || {
            violated(
                ContractErrorKind::OutOfRange,
                format!("value must be greater or equal {}", min),
            )
        },
    )
}

/// Check that `value > min`. The bound itself fails: `greater_than(5, 5, None)`
/// is an error.
#[inline]
pub fn greater_than<T: PartialOrd + Display>(
    value: T,
    min: T,
    message: Option<&str>,
) -> ContractResult {
    ensure(value.partial_cmp(&min) == Some(Ordering::Greater), || {
        violated_with(ContractErrorKind::OutOfRange, message, || {
            format!("value must be greater than {}", min)
        })
    })
}

/// Check that `value <= max`. The bound itself passes.
#[inline]
pub fn less_or_equal<T: PartialOrd + Display>(value: T, max: T) -> ContractResult {
    ensure(
        matches!(
            value.partial_cmp(&max),
            Some(Ordering::Less | Ordering::Equal)
        ),
        || {
            violated(
                ContractErrorKind::OutOfRange,
                format!("value must be less or equal {}", max),
            )
        },
    )
}

/// Check that `value < max`. The bound itself fails.
#[inline]
pub fn less_than<T: PartialOrd + Display>(value: T, max: T) -> ContractResult {
    ensure(value.partial_cmp(&max) == Some(Ordering::Less), || {
        violated(
            ContractErrorKind::OutOfRange,
            format!("value must be less than {}", max),
        )
    })
}

/// Check that `value == expected`.
///
/// Reported as `OutOfRange`, like the other numeric checks.
#[inline]
pub fn equals<T: PartialEq + Display>(value: T, expected: T) -> ContractResult {
    ensure(value == expected, || {
        violated(
            ContractErrorKind::OutOfRange,
            format!("value must equal {}", expected),
        )
    })
}

// ============================================================================
// PRESENCE
// ============================================================================

/// Check that a value is present.
///
/// Fails with `NullArgument`. Default message: `Argument cannot be null`.
#[inline]
pub fn is_not_null<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> ContractResult {
    ensure(value.is_some(), || {
        violated_with(ContractErrorKind::NullArgument, message, || {
            "Argument cannot be null".to_owned()
        })
    })
}

/// Check that a value is absent.
///
/// A present value is an `InvalidArgument`, not a `NullArgument`.
#[inline]
pub fn is_null<T: ?Sized>(value: Option<&T>, message: Option<&str>) -> ContractResult {
    ensure(value.is_none(), || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "value must be null".to_owned()
        })
    })
}

// ============================================================================
// IDENTITY
// ============================================================================

/// Check that two references point at the same instance.
///
/// Compares addresses, never contents: two equal but distinct values fail.
/// A reference reached through an alias (`let c = &b; let d = &c;`, then `*d`)
/// is still the same instance as `&b`.
///
/// Zero-sized values carry no distinct address, so any two of them compare as
/// the same instance.
#[inline]
pub fn reference_equals<T: ?Sized>(value: &T, other: &T) -> ContractResult {
    ensure(std::ptr::eq(value, other), || {
        violated(
            ContractErrorKind::InvalidArgument,
            "values must be equal".to_owned(),
        )
    })
}

/// Check that two references point at different instances.
#[inline]
pub fn reference_not_equals<T: ?Sized>(value: &T, other: &T) -> ContractResult {
    ensure(!std::ptr::eq(value, other), || {
        violated(
            ContractErrorKind::InvalidArgument,
            "values must not be equal".to_owned(),
        )
    })
}

// ============================================================================
// DEFAULT VALUES
// ============================================================================

/// Check that `value` equals `T::default()`.
///
/// Equality is structural (`PartialEq`), so a derived struct is default when
/// every field is. For `Option<T>` the default is `None`.
#[inline]
pub fn is_default<T: Default + PartialEq>(value: &T, message: Option<&str>) -> ContractResult {
    ensure(*value == T::default(), || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "value must be default".to_owned()
        })
    })
}

/// Check that `value` differs from `T::default()`.
///
/// `false`, `0`, `None` and an all-default struct all fail.
#[inline]
pub fn is_not_default<T: Default + PartialEq>(
    value: &T,
    message: Option<&str>,
) -> ContractResult {
    ensure(*value != T::default(), || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "value must not be default".to_owned()
        })
    })
}

// ============================================================================
// BOOLEANS
// ============================================================================

#[inline]
pub fn is_true(value: bool, message: &str) -> ContractResult {
    ensure(value, || {
        violated(ContractErrorKind::InvalidArgument, message.to_owned())
    })
}

#[inline]
pub fn is_false(value: bool, message: &str) -> ContractResult {
    ensure(!value, || {
        violated(ContractErrorKind::InvalidArgument, message.to_owned())
    })
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Check that `value` is the nil (all-zero) UUID.
#[cfg(feature = "uuid")]
#[inline]
pub fn is_empty_id(value: &Uuid, message: &str) -> ContractResult {
    ensure(value.is_nil(), || {
        violated(ContractErrorKind::InvalidArgument, message.to_owned())
    })
}

/// Check that `value` is not the nil UUID.
#[cfg(feature = "uuid")]
#[inline]
pub fn is_not_empty_id(value: &Uuid, message: &str) -> ContractResult {
    ensure(!value.is_nil(), || {
        violated(ContractErrorKind::InvalidArgument, message.to_owned())
    })
}

// ============================================================================
// STRINGS AND SEQUENCES
// ============================================================================

/// Check that a string is absent or empty.
#[inline]
pub fn string_is_null_or_empty(value: Option<&str>, message: Option<&str>) -> ContractResult {
    ensure(is_null_or_empty(value), || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "string must be null or empty".to_owned()
        })
    })
}

/// Check that a string is present and non-empty.
///
/// `None` and `Some("")` both fail with `InvalidArgument`.
#[inline]
pub fn string_is_not_null_or_empty(value: Option<&str>, message: Option<&str>) -> ContractResult {
    ensure(!is_null_or_empty(value), || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "string must not be null or empty".to_owned()
        })
    })
}

/// Check that a sequence is present and yields at least one element.
///
/// Only the first element is pulled from the iterator. Pass a borrow
/// (`Some(&items)`) to keep ownership.
#[inline]
pub fn sequence_is_not_null_or_empty<I: IntoIterator>(
    seq: Option<I>,
    message: Option<&str>,
) -> ContractResult {
    let has_element = seq.and_then(|s| s.into_iter().next()).is_some();
    ensure(has_element, || {
        violated_with(ContractErrorKind::InvalidArgument, message, || {
            "Enumerable must not be null or empty".to_owned()
        })
    })
}
