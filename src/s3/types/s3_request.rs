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

//! Transport-neutral request and response envelopes.

use crate::s3::config::S3ClientOptions;
use crate::s3::error::{Error, S3ErrorResponse, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{
    StringMap, UtcTime, from_http_header_value, from_iso8601utc, trim_quotes,
    urlencode_object_key,
};
use bytes::{Buf, Bytes};
use http::{HeaderMap, Method};
use std::str::FromStr;
use typed_builder::TypedBuilder;
use xmltree::Element;

#[derive(Clone, Debug, PartialEq, TypedBuilder)]
/// Generic S3Request: everything a transport needs to sign and send an operation.
pub struct S3Request {
    method: Method,

    #[builder(default, setter(into, strip_option))]
    bucket: Option<String>,

    #[builder(default, setter(into, strip_option))]
    object: Option<String>,

    #[builder(default)]
    query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,
}

/// Checks whether a bucket name can be used as a DNS label.
pub fn is_dns_compatible_bucket(bucket: &str) -> bool {
    let len = bucket.len();
    if !(3..=63).contains(&len) || bucket.contains("..") {
        return false;
    }
    let bytes = bucket.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !edge_ok(bytes[0]) || !edge_ok(bytes[len - 1]) {
        return false;
    }
    if bucket.split('.').count() == 4 && bucket.split('.').all(|p| p.parse::<u8>().is_ok()) {
        return false;
    }
    bytes
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub(crate) fn logged(self, operation: &str) -> S3Request {
        log::debug!(
            "{operation}: {} bucket={:?} object={:?} query={:?}",
            self.method,
            self.bucket,
            self.object,
            self.query_params.to_query_string()
        );
        self
    }

    /// Returns the first value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn use_path_style(&self, options: &S3ClientOptions, bucket: &str) -> bool {
        options.path_style_access
            || !is_dns_compatible_bucket(bucket)
            // '.' in a virtual host breaks TLS certificate matching
            || (options.https && bucket.contains('.'))
            // GetBucketLocation must be sent path-style
            || self.query_params.contains_key("location")
    }

    /// Host the request is sent to.
    pub fn host(&self, options: &S3ClientOptions) -> String {
        match self.bucket.as_deref() {
            Some(bucket) if !self.use_path_style(options, bucket) => {
                format!("{bucket}.{}", options.base_host())
            }
            Some(_) if options.accelerate_mode && options.endpoint.is_none() => {
                // accelerate endpoints only support virtual-hosted-style
                let mut regular = options.clone();
                regular.accelerate_mode = false;
                regular.base_host()
            }
            _ => options.base_host(),
        }
    }

    /// URL path, with the object key encoded and `/` kept.
    pub fn path(&self, options: &S3ClientOptions) -> String {
        let mut path = String::from("/");
        if let Some(bucket) = self.bucket.as_deref() {
            if self.use_path_style(options, bucket) {
                path.push_str(bucket);
                if self.object.is_some() {
                    path.push('/');
                }
            }
        }
        if let Some(key) = self.object.as_deref() {
            path.push_str(&urlencode_object_key(key.trim_start_matches('/')));
        }
        path
    }

    /// Full URL including the sorted, encoded query string.
    pub fn url(&self, options: &S3ClientOptions) -> String {
        let mut url = format!(
            "{}://{}{}",
            options.scheme(),
            self.host(options),
            self.path(options)
        );
        let query = self.query_params.to_query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Raw response as handed back by the transport.
#[derive(Clone, Debug, Default)]
pub struct S3Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl S3Response {
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        S3Response {
            status,
            headers,
            body,
        }
    }

    /// Turns an error status into [`Error::S3Server`], or
    /// [`Error::UnexpectedStatus`] when the body carries no error document.
    pub fn check_status(self) -> Result<S3Response, Error> {
        if self.status < 300 {
            return Ok(self);
        }
        if self.body.is_empty() {
            return Err(Error::UnexpectedStatus(self.status));
        }
        match S3ErrorResponse::parse(self.status, self.body) {
            Ok(resp) => Err(Error::S3Server(resp)),
            Err(e) => {
                log::debug!("unparsable error body for status {}: {e}", self.status);
                Err(Error::UnexpectedStatus(self.status))
            }
        }
    }

    /// Parses the body as an XML document.
    pub fn xml_root(&self) -> Result<Element, ValidationErr> {
        Ok(Element::parse(self.body.clone().reader())?)
    }

    /// Header value as a string; values that are not visible ASCII are skipped.
    pub fn header_str(&self, name: &str) -> Option<String> {
        let value = self.headers.get(name)?;
        match value.to_str() {
            Ok(v) => Some(v.to_string()),
            Err(e) => {
                log::warn!("skipping header {name}: {e}");
                None
            }
        }
    }

    pub fn header_parse<T>(&self, name: &str) -> Result<Option<T>, ValidationErr>
    where
        T: FromStr,
        ValidationErr: From<T::Err>,
    {
        match self.header_str(name) {
            Some(v) => Ok(Some(v.trim().parse::<T>()?)),
            None => Ok(None),
        }
    }

    /// HTTP-date header such as `Last-Modified`.
    pub fn header_http_time(&self, name: &str) -> Result<Option<UtcTime>, ValidationErr> {
        match self.header_str(name) {
            Some(v) => Ok(Some(from_http_header_value(v.trim())?)),
            None => Ok(None),
        }
    }

    /// ISO8601 header such as `x-amz-object-lock-retain-until-date`.
    pub fn header_iso_time(&self, name: &str) -> Result<Option<UtcTime>, ValidationErr> {
        match self.header_str(name) {
            Some(v) => Ok(Some(from_iso8601utc(v.trim())?)),
            None => Ok(None),
        }
    }

    pub fn etag(&self) -> Option<String> {
        self.header_str(ETAG).map(|v| trim_quotes(&v))
    }

    /// Collects `x-amz-meta-*` headers, prefix stripped. `None` when there are none.
    pub fn metadata(&self) -> Option<StringMap> {
        let mut metadata = StringMap::new();
        for (name, value) in self.headers.iter() {
            let Some(key) = name.as_str().strip_prefix(X_AMZ_META_PREFIX) else {
                continue;
            };
            match value.to_str() {
                Ok(v) => {
                    metadata.insert(key.to_string(), v.to_string());
                }
                Err(e) => log::warn!("skipping metadata header {name}: {e}"),
            }
        }
        if metadata.is_empty() {
            None
        } else {
            Some(metadata)
        }
    }
}
