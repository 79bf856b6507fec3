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

//! Bucket listings. One request maps to one page; following the
//! continuation marker is up to the caller.

use super::require;
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{EncodingType, RequestPayer, S3Request, ToS3Request};
use http::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectsRequest {
    bucket: Option<String>,
    delimiter: Option<String>,
    encoding_type: Option<EncodingType>,
    marker: Option<String>,
    max_keys: Option<i32>,
    prefix: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for ListObjectsRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "ListObjectsRequest", "Bucket")?;

        let mut query = Multimap::new();
        query.add_opt("delimiter", self.delimiter.as_ref());
        query.add_opt("encoding-type", self.encoding_type.as_ref());
        query.add_opt("marker", self.marker.as_ref());
        query.add_opt("max-keys", self.max_keys.as_ref());
        query.add_opt("prefix", self.prefix.as_ref());

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());

        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("ListObjects"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectsV2Request {
    bucket: Option<String>,
    continuation_token: Option<String>,
    delimiter: Option<String>,
    encoding_type: Option<EncodingType>,
    /// V2 omits owners unless asked.
    fetch_owner: Option<bool>,
    max_keys: Option<i32>,
    prefix: Option<String>,
    start_after: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for ListObjectsV2Request {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "ListObjectsV2Request", "Bucket")?;

        let mut query = Multimap::new();
        query.add("list-type", "2");
        query.add_opt("continuation-token", self.continuation_token.as_ref());
        query.add_opt("delimiter", self.delimiter.as_ref());
        query.add_opt("encoding-type", self.encoding_type.as_ref());
        query.add_opt("fetch-owner", self.fetch_owner.as_ref());
        query.add_opt("max-keys", self.max_keys.as_ref());
        query.add_opt("prefix", self.prefix.as_ref());
        query.add_opt("start-after", self.start_after.as_ref());

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());

        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("ListObjectsV2"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_objects_query() {
        let s3req = ListObjectsRequest::default()
            .with_bucket("b")
            .with_prefix("photos/")
            .with_delimiter("/")
            .with_max_keys(100)
            .with_encoding_type(EncodingType::Url)
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::GET);
        assert!(s3req.object().is_none());
        assert_eq!(
            s3req.query_params().to_query_string(),
            "delimiter=%2F&encoding-type=url&max-keys=100&prefix=photos%2F"
        );
    }

    #[test]
    fn test_list_objects_v2_query() {
        let s3req = ListObjectsV2Request::default()
            .with_bucket("b")
            .with_continuation_token("tok")
            .with_fetch_owner(true)
            .to_s3request()
            .unwrap();
        assert_eq!(
            s3req.query_params().to_query_string(),
            "continuation-token=tok&fetch-owner=true&list-type=2"
        );
    }

    #[test]
    fn test_explicit_empty_prefix_is_sent() {
        let s3req = ListObjectsV2Request::default()
            .with_bucket("b")
            .with_prefix("")
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.query_params().to_query_string(), "list-type=2&prefix=");
    }

    #[test]
    fn test_list_requires_bucket() {
        assert!(ListObjectsV2Request::default().to_s3request().is_err());
    }
}
