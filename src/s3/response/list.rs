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

//! Listing pages. With `EncodingType=url` the service percent-encodes keys,
//! prefixes, delimiters and markers; they are decoded here.

use super::request_charged;
use crate::Shape;
use crate::s3::error::Error;
use crate::s3::types::listing::url_decode;
use crate::s3::types::{
    CommonPrefix, EncodingType, FromS3Response, RequestCharged, S3Object, S3Response,
};
use crate::s3::utils::{child_elements, get_text_option, parse_text_option};
use serde::{Deserialize, Serialize};
use xmltree::Element;

struct Page {
    url_encoded: bool,
    encoding_type: Option<EncodingType>,
    contents: Vec<S3Object>,
    common_prefixes: Vec<CommonPrefix>,
}

impl Page {
    fn read(root: &Element) -> Result<Page, Error> {
        let encoding_type = get_text_option(root, "EncodingType").map(EncodingType::from);
        let url_encoded = encoding_type == Some(EncodingType::Url);
        let contents = child_elements(root, "Contents")
            .map(|e| S3Object::from_xml(e, url_encoded))
            .collect::<Result<Vec<_>, _>>()?;
        let common_prefixes = child_elements(root, "CommonPrefixes")
            .map(|e| CommonPrefix::from_xml(e, url_encoded))
            .collect();
        Ok(Page {
            url_encoded,
            encoding_type,
            contents,
            common_prefixes,
        })
    }

    fn text(&self, root: &Element, tag: &str) -> Option<String> {
        get_text_option(root, tag).map(|v| if self.url_encoded { url_decode(&v) } else { v })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectsResult {
    is_truncated: Option<bool>,
    marker: Option<String>,
    /// Only returned when a delimiter was sent; otherwise continue from the last key.
    next_marker: Option<String>,
    contents: Option<Vec<S3Object>>,
    name: Option<String>,
    prefix: Option<String>,
    delimiter: Option<String>,
    max_keys: Option<i32>,
    common_prefixes: Option<Vec<CommonPrefix>>,
    encoding_type: Option<EncodingType>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for ListObjectsResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = resp.xml_root()?;
        let page = Page::read(&root)?;
        Ok(ListObjectsResult {
            is_truncated: parse_text_option(&root, "IsTruncated")?,
            marker: page.text(&root, "Marker"),
            next_marker: page.text(&root, "NextMarker"),
            name: get_text_option(&root, "Name"),
            prefix: page.text(&root, "Prefix"),
            delimiter: page.text(&root, "Delimiter"),
            max_keys: parse_text_option(&root, "MaxKeys")?,
            request_charged: request_charged(&resp),
            contents: Some(page.contents),
            common_prefixes: Some(page.common_prefixes),
            encoding_type: page.encoding_type,
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectsV2Result {
    is_truncated: Option<bool>,
    contents: Option<Vec<S3Object>>,
    name: Option<String>,
    prefix: Option<String>,
    delimiter: Option<String>,
    max_keys: Option<i32>,
    common_prefixes: Option<Vec<CommonPrefix>>,
    encoding_type: Option<EncodingType>,
    key_count: Option<i32>,
    continuation_token: Option<String>,
    next_continuation_token: Option<String>,
    start_after: Option<String>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for ListObjectsV2Result {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = resp.xml_root()?;
        let page = Page::read(&root)?;
        Ok(ListObjectsV2Result {
            is_truncated: parse_text_option(&root, "IsTruncated")?,
            name: get_text_option(&root, "Name"),
            prefix: page.text(&root, "Prefix"),
            delimiter: page.text(&root, "Delimiter"),
            max_keys: parse_text_option(&root, "MaxKeys")?,
            key_count: parse_text_option(&root, "KeyCount")?,
            continuation_token: get_text_option(&root, "ContinuationToken"),
            next_continuation_token: get_text_option(&root, "NextContinuationToken"),
            start_after: page.text(&root, "StartAfter"),
            request_charged: request_charged(&resp),
            contents: Some(page.contents),
            common_prefixes: Some(page.common_prefixes),
            encoding_type: page.encoding_type,
        })
    }
}
