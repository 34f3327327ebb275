/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::*;

/// Timestamps go over the wire as epoch seconds, the Connect JSON protocol's default.
impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.has_subsec_nanos() {
            // Nearest double to the exact decimal, so readers rounding to the microsecond
            // recover the original value
            let exact = super::format::epoch_seconds::format(self);
            let seconds = exact.parse::<f64>().unwrap_or_else(|_| self.as_secs_f64());
            serializer.serialize_f64(seconds)
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

#[test]
fn serializes_epoch_seconds() {
    assert_eq!(
        serde_json::to_string(&DateTime::from_secs(1576540098)).unwrap(),
        "1576540098"
    );
    assert_eq!(
        serde_json::to_string(&DateTime::from_millis(1576540098500)).unwrap(),
        "1576540098.5"
    );
}

#[test]
fn fractional_seconds_survive_a_json_round_trip() {
    for date_time in [
        DateTime::from_millis(1_576_540_098_520),
        DateTime::from_millis(-1_500),
        DateTime::from_secs_and_nanos(1_700_000_000, 123_456_000),
        DateTime::from_secs_and_nanos(1_700_000_000, 1_000),
    ] {
        let json = serde_json::to_string(&date_time).unwrap();
        assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), date_time, "{}", json);
    }
}
