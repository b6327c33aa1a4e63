// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Durations from integer seconds: `30u32.seconds()`, `(-5).seconds()`.
//!
//! Unsigned integers produce a `std::time::Duration`. Signed integers produce a
//! `chrono::Duration`, which keeps the sign, so `(-5).seconds()` is five
//! seconds in the past.
//!
//! `i64` is the only signed type whose full range does not fit in a
//! `chrono::Duration`; it gets `checked_seconds` instead.

use std::time::Duration;

pub trait Seconds {
    type Output;

    /// A duration of `self` seconds.
    fn seconds(self) -> Self::Output;
}

pub trait CheckedSeconds {
    /// A duration of `self` seconds, or `None` when it is outside the range
    /// `chrono::Duration` can hold.
    fn checked_seconds(self) -> Option<chrono::Duration>;
}

macro_rules! impl_seconds_unsigned {
    ($($t:ty),*) => {
        $(
            impl Seconds for $t {
                type Output = Duration;

                #[inline]
                fn seconds(self) -> Duration {
                    Duration::from_secs(u64::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_seconds_signed {
    ($($t:ty),*) => {
        $(
            impl Seconds for $t {
                type Output = chrono::Duration;

                #[inline]
                fn seconds(self) -> chrono::Duration {
                    chrono::Duration::seconds(i64::from(self))
                }
            }
        )*
    };
}

impl_seconds_unsigned!(u8, u16, u32, u64);
impl_seconds_signed!(i8, i16, i32);

impl CheckedSeconds for i64 {
    #[inline]
    fn checked_seconds(self) -> Option<chrono::Duration> {
        chrono::Duration::try_seconds(self)
    }
}
