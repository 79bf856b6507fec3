// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::BTreeMap;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// User metadata and other string maps; ordered so rendering is deterministic
pub type StringMap = BTreeMap<String, String>;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Decodes base64 encoded data
pub fn b64decode(input: &str) -> Result<Vec<u8>, ValidationErr> {
    Ok(BASE64.decode(input)?)
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP header value of given time, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ") {
            Ok(d) => d,
            _ => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")?,
        },
        Utc,
    ))
}

// Characters to escape in query strings (RFC 3986). NON_ALPHANUMERIC already
// escapes all reserved characters; only the unreserved marks are removed.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Same as QUERY_ESCAPE but keeps '/' so object keys stay readable in paths.
const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ESCAPE.remove(b'/');

/// URL-encodes a query key or value
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// URL-encodes an object key, keeping `/` separators
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Escapes XML special characters in element text
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Appends `<tag>value</tag>` with the value escaped
pub fn push_xml_tag(data: &mut String, tag: &str, value: &str) {
    data.push('<');
    data.push_str(tag);
    data.push('>');
    data.push_str(&xml_escape(value));
    data.push_str("</");
    data.push_str(tag);
    data.push('>');
}

/// Appends `<tag>value</tag>` when the value is present
pub fn push_xml_opt<T: ToString>(data: &mut String, tag: &str, value: Option<&T>) {
    if let Some(v) = value {
        push_xml_tag(data, tag, &v.to_string());
    }
}

/// Gets text value of given XML element for given tag.
pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::xml_error(format!("<{tag}> tag not found")))?
        .get_text()
        .unwrap_or_default()
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

/// Parses the optional text of a child element with `FromStr`.
pub fn parse_text_option<T>(element: &Element, tag: &str) -> Result<Option<T>, ValidationErr>
where
    T: std::str::FromStr,
    ValidationErr: From<T::Err>,
{
    match get_text_option(element, tag) {
        Some(v) => Ok(Some(v.trim().parse::<T>()?)),
        None => Ok(None),
    }
}

/// Gets the optional ISO8601 timestamp of a child element.
pub fn get_time_option(element: &Element, tag: &str) -> Result<Option<UtcTime>, ValidationErr> {
    match get_text_option(element, tag) {
        Some(v) => Ok(Some(from_iso8601utc(v.trim())?)),
        None => Ok(None),
    }
}

/// Iterates the direct child elements with the given name.
pub fn child_elements<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .filter(move |e| e.name == tag)
}

/// Collects the text of every direct child element with the given name.
pub fn get_text_list(element: &Element, tag: &str) -> Vec<String> {
    child_elements(element, tag)
        .map(|e| e.get_text().unwrap_or_default().to_string())
        .collect()
}

/// Strips the surrounding quotes of an entity tag
pub fn trim_quotes(s: &str) -> String {
    s.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_http_header_value_roundtrip() {
        let t = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        let s = to_http_header_value(t);
        assert_eq!(s, "Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(from_http_header_value(&s).unwrap(), t);
    }

    #[test]
    fn test_iso8601_with_and_without_millis() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(to_iso8601utc(t), "2024-01-02T03:04:05.000Z");
        assert_eq!(from_iso8601utc("2024-01-02T03:04:05.000Z").unwrap(), t);
        assert_eq!(from_iso8601utc("2024-01-02T03:04:05Z").unwrap(), t);
        assert!(from_iso8601utc("yesterday").is_err());
    }

    #[test]
    fn test_md5sum_hash() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(url_encode("a b/c"), "a%20b%2Fc");
        assert_eq!(urlencode_object_key("dir/my file+1.txt"), "dir/my%20file%2B1.txt");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
        let mut data = String::new();
        push_xml_tag(&mut data, "Key", "x&y");
        push_xml_opt::<String>(&mut data, "VersionId", None);
        assert_eq!(data, "<Key>x&amp;y</Key>");
    }

    #[test]
    fn test_xml_getters() {
        let root = Element::parse(
            "<Root><Name>n</Name><Size>12</Size><Item>a</Item><Item>b</Item></Root>".as_bytes(),
        )
        .unwrap();
        assert_eq!(get_text_result(&root, "Name").unwrap(), "n");
        assert!(get_text_result(&root, "Missing").is_err());
        assert_eq!(parse_text_option::<i64>(&root, "Size").unwrap(), Some(12));
        assert_eq!(get_text_list(&root, "Item"), vec!["a", "b"]);
        assert_eq!(get_text_default(&root, "Missing"), "");
    }
}
