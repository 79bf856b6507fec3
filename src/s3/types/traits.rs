// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core traits shared by all shapes.

use super::s3_request::{S3Request, S3Response};
use crate::s3::error::{Error, ValidationErr};
use crate::s3::utils::{UtcTime, to_iso8601utc};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;

/// Renders a field value inside a shape's `{Name: value, ...}` form.
///
/// Implemented for every type a shape field may hold. Shapes derived with
/// [`Shape`](crate::Shape) implement it too, so nested shapes render inline.
pub trait ShapeValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Stands in for a sensitive field value in a shape's `Debug` output.
#[doc(hidden)]
pub struct Redacted;

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"*** Sensitive Data Redacted ***\"")
    }
}

impl ShapeValue for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! display_shape_value {
    ($($ty:ty),+) => {
        $(
            impl ShapeValue for $ty {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_shape_value!(bool, i32, i64, u16);

impl ShapeValue for UtcTime {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_iso8601utc(*self))
    }
}

/// Payloads are never printed, only their length.
impl ShapeValue for Bytes {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes(len={})", self.len())
    }
}

impl<T: ShapeValue> ShapeValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<V: ShapeValue> ShapeValue for BTreeMap<String, V> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str(": ")?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Trait for converting a request shape into a concrete, transport-neutral [`S3Request`].
///
/// The conversion fills in the HTTP method, the bucket and object the request
/// addresses, the sub-resource and query parameters, the headers and the body.
/// Fields that are `None` contribute nothing.
///
/// # Errors
///
/// Returns [`ValidationErr::MissingField`] when a field needed to address the
/// request (bucket, key, upload id, ...) is not set.
pub trait ToS3Request {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr>;
}

/// Trait for converting a raw [`S3Response`] into a strongly typed result shape.
///
/// An error status is turned into [`Error::S3Server`] before any field is read.
pub trait FromS3Response: Sized {
    fn from_s3response(resp: S3Response) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    struct Show<'a, T: ShapeValue>(&'a T);

    impl<T: ShapeValue> fmt::Display for Show<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_value(f)
        }
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(Show(&"abc".to_string()).to_string(), "abc");
        assert_eq!(Show(&true).to_string(), "true");
        assert_eq!(Show(&-3i64).to_string(), "-3");
        let t = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        assert_eq!(Show(&t).to_string(), "2024-05-06T07:08:09.000Z");
    }

    #[test]
    fn test_collection_values() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Show(&list).to_string(), "[a, b]");
        assert_eq!(Show(&Vec::<String>::new()).to_string(), "[]");

        let mut map = BTreeMap::new();
        map.insert("z".to_string(), "1".to_string());
        map.insert("a".to_string(), "2".to_string());
        assert_eq!(Show(&map).to_string(), "{a: 2, z: 1}");
    }

    #[test]
    fn test_bytes_value_hides_payload() {
        let body = Bytes::from_static(b"secret payload");
        assert_eq!(Show(&body).to_string(), "Bytes(len=14)");
    }
}
