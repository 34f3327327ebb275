/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamp value carried by shape members such as `CreatedTime` or `StartTime`.

use crate::hash::{hash_i64, ShapeHash};
use num_integer::div_mod_floor;
use std::fmt;
use std::num::ParseFloatError;
use std::time::{SystemTime, UNIX_EPOCH};

mod de;
mod format;
mod ser;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_MICRO: u32 = 1_000;
const MICROS_PER_SECOND: f64 = 1_000_000.0;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time, represented as whole seconds since the Unix epoch plus a sub-second
/// nanosecond offset.
///
/// The seconds component is floored, so the nanosecond offset is always added forward in
/// time, including for instants before the epoch.
///
/// `PartialEq` and the derived `Hash` compare at nanosecond precision. [`ShapeHash`], the
/// structural hash used by shapes, only sees epoch millis, so equal values always agree on it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime {
            seconds,
            subsecond_nanos: millis as u32 * NANOS_PER_MILLI,
        }
    }

    /// Creates a `DateTime` from seconds and sub-second nanos since the Unix epoch.
    ///
    /// Nanos beyond one second are carried into the seconds component. The carry saturates at
    /// `i64::MAX` seconds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        DateTime {
            seconds: seconds.saturating_add(i64::from(subsecond_nanos / NANOS_PER_SECOND)),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Creates a `DateTime` from whole seconds and a fraction of a second.
    ///
    /// `fraction` is clamped to `0.0..=1.0` and a NaN fraction counts as zero. A fraction that
    /// rounds up to a whole second is carried into the seconds component.
    ///
    /// ```
    /// # use smithy_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_fractional_secs(1, 0.5),
    ///     DateTime::from_secs_and_nanos(1, 500_000_000),
    /// );
    /// ```
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let subsecond_nanos = (fraction * f64::from(NANOS_PER_SECOND)).round() as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, subsecond_nanos)
    }

    /// Creates a `DateTime` from an `f64` number of seconds since the Unix epoch.
    ///
    /// The fraction is rounded to the microsecond: for present-day instants an `f64` carries
    /// no more than that, and rounding undoes the representation error of decimal inputs
    /// such as `1576540098.52`.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let micros = ((epoch_seconds - seconds) * MICROS_PER_SECOND).round();
        let micros = if micros.is_nan() { 0.0 } else { micros.clamp(0.0, MICROS_PER_SECOND) };
        DateTime::from_secs_and_nanos(seconds as i64, micros as u32 * NANOS_PER_MICRO)
    }

    /// Converts a [`SystemTime`] into a `DateTime`.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => DateTime {
                seconds: after.as_secs() as i64,
                subsecond_nanos: after.subsec_nanos(),
            },
            Err(before) => {
                let before = before.duration();
                let nanos = before.subsec_nanos();
                if nanos == 0 {
                    DateTime::from_secs(-(before.as_secs() as i64))
                } else {
                    DateTime {
                        seconds: -(before.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    }
                }
            }
        }
    }

    /// Returns the (floored) epoch seconds component.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if the sub-second component is non-zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the seconds since the Unix epoch as an `f64`.
    ///
    /// _Note: This conversion will lose precision due to the nature of floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    /// Converts to milliseconds since the Unix epoch, truncating sub-millisecond precision.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        self.seconds
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|millis| millis.checked_add(i64::from(self.subsecond_nanos / NANOS_PER_MILLI)))
            .ok_or(ConversionError(
                "DateTime value too large to fit into i64 epoch millis",
            ))
    }

    /// Parses a `DateTime` from `s` in the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Formats this `DateTime` in the given `format`.
    pub fn fmt(&self, format: Format) -> Result<String, ConversionError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        DateTime::from_system_time(time)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Instants outside of the calendar range still have an epoch-seconds form.
        match format::rfc3339::format(self) {
            Ok(rfc3339) => f.write_str(&rfc3339),
            Err(_) => f.write_str(&format::epoch_seconds::format(self)),
        }
    }
}

impl ShapeHash for DateTime {
    fn hash_code(&self) -> i32 {
        let millis = self
            .seconds
            .saturating_mul(MILLIS_PER_SECOND)
            .saturating_add(i64::from(self.subsecond_nanos / NANOS_PER_MILLI));
        hash_i64(millis)
    }
}

/// Timestamp formats understood by [`DateTime::from_str`] and [`DateTime::fmt`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC 3339 date-time in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Decimal seconds since the Unix epoch, e.g. `1576540098.52`.
    EpochSeconds,
}

/// A `DateTime` could not be converted into the requested representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ConversionError(&'static str);

/// A string could not be parsed into a `DateTime`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DateTimeParseError {
    /// The input was not an RFC 3339 date-time.
    #[error("invalid RFC 3339 date-time")]
    DateTime(#[source] chrono::ParseError),
    /// The input was not a decimal number of epoch seconds.
    #[error("invalid epoch seconds")]
    EpochSeconds(#[source] ParseFloatError),
    /// The input parsed but names an instant that cannot be represented.
    #[error("{0}")]
    OutOfRange(&'static str),
}
