/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Human-readable rendering of shapes.
//!
//! A shape renders as `{Name: value,Other: value}`: members in declaration order, absent
//! members omitted entirely, and no separator after the last member.

use crate::date_time::DateTime;
use std::collections::HashMap;
use std::fmt;

/// A value that can be rendered as a shape member.
pub trait ShapeDisplay {
    /// Writes this member value to `f`.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ShapeDisplay for str {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl ShapeDisplay for String {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl ShapeDisplay for i32 {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ShapeDisplay for i64 {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ShapeDisplay for bool {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ShapeDisplay for f64 {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Debug` keeps the fraction on whole numbers: `1.0` rather than `1`
        write!(f, "{:?}", self)
    }
}

impl ShapeDisplay for DateTime {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: ShapeDisplay> ShapeDisplay for Vec<T> {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_member(f)?;
        }
        f.write_str("]")
    }
}

impl<T: ShapeDisplay> ShapeDisplay for HashMap<String, T> {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        f.write_str("{")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str("=")?;
            value.fmt_member(f)?;
        }
        f.write_str("}")
    }
}

/// Writes a shape's members between braces, in the order they are added.
///
/// Modeled on [`std::fmt::DebugStruct`]: errors are latched and reported by [`finish`](Self::finish).
pub struct ShapeFormatter<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_members: bool,
}

impl fmt::Debug for ShapeFormatter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeFormatter")
            .field("result", &self.result)
            .field("has_members", &self.has_members)
            .finish()
    }
}

impl<'a, 'b: 'a> ShapeFormatter<'a, 'b> {
    /// Opens the shape's brace on `fmt`.
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        ShapeFormatter {
            fmt,
            result,
            has_members: false,
        }
    }

    /// Renders `name: value` if `value` is present; absent members are skipped.
    pub fn member<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: ShapeDisplay + ?Sized,
    {
        if let (Ok(()), Some(value)) = (self.result, value) {
            self.result = self.write_member(name, value);
        }
        self
    }

    fn write_member<T>(&mut self, name: &str, value: &T) -> fmt::Result
    where
        T: ShapeDisplay + ?Sized,
    {
        if self.has_members {
            self.fmt.write_str(",")?;
        }
        self.has_members = true;
        self.fmt.write_str(name)?;
        self.fmt.write_str(": ")?;
        value.fmt_member(self.fmt)
    }

    /// Closes the brace.
    pub fn finish(&mut self) -> fmt::Result {
        let result = self.result;
        result.and_then(|()| self.fmt.write_str("}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        size: Option<i64>,
        enabled: Option<bool>,
        percentage: Option<f64>,
        queues: Option<Vec<String>>,
        tags: Option<HashMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = ShapeFormatter::new(f);
            formatter.member("Name", self.name.as_ref());
            formatter.member("Count", self.count.as_ref());
            formatter.member("Size", self.size.as_ref());
            formatter.member("Enabled", self.enabled.as_ref());
            formatter.member("Percentage", self.percentage.as_ref());
            formatter.member("Queues", self.queues.as_ref());
            formatter.member("Tags", self.tags.as_ref());
            formatter.finish()
        }
    }

    #[test]
    fn empty_shape() {
        assert_eq!(Sample::default().to_string(), "{}");
    }

    #[test]
    fn absent_members_leave_no_separator() {
        let sample = Sample {
            name: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(sample.to_string(), "{Name: x}");

        let sample = Sample {
            size: Some(1024),
            ..Default::default()
        };
        assert_eq!(sample.to_string(), "{Size: 1024}");
    }

    #[test]
    fn scalar_members() {
        let sample = Sample {
            count: Some(3),
            enabled: Some(false),
            percentage: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            sample.to_string(),
            "{Count: 3,Enabled: false,Percentage: 100.0}"
        );
    }

    #[test]
    fn collection_members() {
        let mut tags = HashMap::new();
        tags.insert("team".to_string(), "blue".to_string());
        tags.insert("env".to_string(), "prod".to_string());
        let sample = Sample {
            queues: Some(vec!["a".to_string(), "b".to_string()]),
            tags: Some(tags),
            ..Default::default()
        };
        assert_eq!(
            sample.to_string(),
            "{Queues: [a, b],Tags: {env=prod, team=blue}}"
        );
    }

    #[test]
    fn empty_collections_are_still_rendered() {
        let sample = Sample {
            queues: Some(vec![]),
            tags: Some(HashMap::new()),
            ..Default::default()
        };
        assert_eq!(sample.to_string(), "{Queues: [],Tags: {}}");
    }
}
