/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub(super) mod rfc3339 {
    use crate::date_time::{ConversionError, DateTime, DateTimeParseError};
    use chrono::{SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(date_time: &DateTime) -> Result<String, ConversionError> {
        let utc =
            chrono::DateTime::<Utc>::from_timestamp(date_time.seconds, date_time.subsecond_nanos)
                .ok_or(ConversionError(
                    "DateTime is outside of the range supported by RFC 3339",
                ))?;
        let rfc3339 = utc.to_rfc3339_opts(SecondsFormat::Nanos, true);
        // Trim the fraction down to its significant digits
        let trimmed = rfc3339.trim_end_matches('Z').trim_end_matches('0');
        let trimmed = trimmed.trim_end_matches('.');
        Ok(format!("{}Z", trimmed))
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(s.trim())
            .map_err(DateTimeParseError::DateTime)?;
        Ok(DateTime::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(super) mod epoch_seconds {
    use crate::date_time::{DateTime, DateTimeParseError, NANOS_PER_SECOND};

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5" for 1.5 seconds before the epoch
    pub(crate) fn format(date_time: &DateTime) -> String {
        if date_time.subsecond_nanos == 0 {
            return format!("{}", date_time.seconds);
        }
        // Seconds are floored, so before the epoch the fraction counts back from the next second
        let (sign, whole, nanos) = if date_time.seconds < 0 {
            (
                "-",
                (date_time.seconds + 1).unsigned_abs(),
                NANOS_PER_SECOND - date_time.subsecond_nanos,
            )
        } else {
            ("", date_time.seconds.unsigned_abs(), date_time.subsecond_nanos)
        };
        let fraction = format!("{:0>9}", nanos);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let value: f64 = s.trim().parse().map_err(DateTimeParseError::EpochSeconds)?;
        if !value.is_finite() {
            return Err(DateTimeParseError::OutOfRange(
                "epoch seconds must be a finite number",
            ));
        }
        Ok(DateTime::from_secs_f64(value))
    }
}

#[cfg(test)]
mod test {
    use crate::date_time::{DateTime, DateTimeParseError, Format};

    #[test]
    fn format_rfc3339() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );

        let date_time = DateTime::from_fractional_secs(1576540098, 0.52);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
    }

    #[test]
    fn format_epoch_seconds() {
        assert_eq!(
            DateTime::from_secs(1576540098)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "1576540098"
        );
        assert_eq!(
            DateTime::from_fractional_secs(1576540098, 0.52)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "1576540098.52"
        );
        assert_eq!(
            DateTime::from_millis(-1_500)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "-1.5"
        );
        assert_eq!(
            DateTime::from_millis(-250)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "-0.25"
        );
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        assert_eq!(
            DateTime::from_str("2019-12-17T00:48:18+01:00", Format::DateTime).unwrap(),
            DateTime::from_secs(1576540098)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            DateTime::from_str("yesterday", Format::DateTime),
            Err(DateTimeParseError::DateTime(_))
        ));
        assert!(matches!(
            DateTime::from_str("12a", Format::EpochSeconds),
            Err(DateTimeParseError::EpochSeconds(_))
        ));
        assert!(matches!(
            DateTime::from_str("inf", Format::EpochSeconds),
            Err(DateTimeParseError::OutOfRange(_))
        ));
    }

    #[track_caller]
    fn check_roundtrip(epoch_secs: i64) {
        let date_time = DateTime::from_secs(epoch_secs);
        let rfc3339 = date_time.fmt(Format::DateTime).unwrap();
        assert_eq!(
            DateTime::from_str(&rfc3339, Format::DateTime).unwrap(),
            date_time,
            "{}",
            rfc3339
        );
    }

    #[test]
    fn rfc3339_roundtrip() {
        for epoch_secs in -1000..1000 {
            check_roundtrip(epoch_secs);
        }
        check_roundtrip(1576540098);
        check_roundtrip(9999999999);
    }
}
