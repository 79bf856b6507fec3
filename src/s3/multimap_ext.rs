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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Query keys S3 treats as sub-resources; they are sent without `=` when empty.
const SUBRESOURCES: &[&str] = &[
    "acl",
    "cors",
    "delete",
    "encryption",
    "lifecycle",
    "location",
    "object-lock",
    "policy",
    "restore",
    "tagging",
    "uploads",
    "versioning",
    "versions",
    "website",
];

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a key-value pair when the value is present
    fn add_opt<K: Into<String>, V: ToString>(&mut self, key: K, value: Option<&V>);

    /// Adds a bare key, as used for S3 sub-resources such as `?uploads` or `?acl`.
    /// The key must be one of the sub-resources S3 knows; any other key with an
    /// empty value is sent as `key=`.
    fn add_subresource<K: Into<String>>(&mut self, key: K);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns the first value stored for the key
    fn first(&self, key: &str) -> Option<&str>;

    /// Converts multimap to HTTP query string, keys sorted
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_opt<K: Into<String>, V: ToString>(&mut self, key: K, value: Option<&V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.to_string());
        }
    }

    fn add_subresource<K: Into<String>>(&mut self, key: K) {
        self.insert(key.into(), String::new());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key.clone(), values);
        }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn to_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                if !value.is_empty() || !SUBRESOURCES.contains(&key) {
                    query.push('=');
                    query.push_str(&url_encode(value));
                }
            }
        }
        query
    }
}
