/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::*;
use serde::de::{Error, Visitor};
use serde::Deserialize;

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC-3339 date-time")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(DateTime::from_secs(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        i64::try_from(v)
            .map(DateTime::from_secs)
            .map_err(|_| E::custom("epoch seconds out of range"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v.is_finite() {
            Ok(DateTime::from_secs_f64(v))
        } else {
            Err(E::custom("epoch seconds must be a finite number"))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        DateTime::from_str(v, Format::DateTime).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DateTimeVisitor)
    }
}

#[test]
fn deserializes_numbers_and_strings() {
    let expected = DateTime::from_secs(1576540098);
    assert_eq!(
        serde_json::from_str::<DateTime>("1576540098").unwrap(),
        expected
    );
    assert_eq!(
        serde_json::from_str::<DateTime>("1576540098.0").unwrap(),
        expected
    );
    assert_eq!(
        serde_json::from_str::<DateTime>(r#""2019-12-16T23:48:18Z""#).unwrap(),
        expected
    );
    assert!(serde_json::from_str::<DateTime>("true").is_err());
}
