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

//! Entries of a bucket listing

use super::acl::Owner;
use super::enums::StorageClass;
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{UtcTime, get_text_option, get_time_option, parse_text_option, trim_quotes};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use xmltree::Element;

/// Decodes a key returned with `encoding-type=url`.
pub(crate) fn url_decode(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    key: Option<String>,
    last_modified: Option<UtcTime>,
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    size: Option<i64>,
    storage_class: Option<StorageClass>,
    owner: Option<Owner>,
}

impl S3Object {
    pub(crate) fn from_xml(
        element: &Element,
        url_encoded: bool,
    ) -> Result<S3Object, ValidationErr> {
        let key = get_text_option(element, "Key")
            .map(|k| if url_encoded { url_decode(&k) } else { k });
        Ok(S3Object {
            key,
            last_modified: get_time_option(element, "LastModified")?,
            etag: get_text_option(element, "ETag").map(|v| trim_quotes(&v)),
            size: parse_text_option(element, "Size")?,
            storage_class: get_text_option(element, "StorageClass").map(StorageClass::from),
            owner: element.get_child("Owner").map(Owner::from_xml),
        })
    }
}

/// A "directory" rolled up by the delimiter.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CommonPrefix {
    prefix: Option<String>,
}

impl CommonPrefix {
    pub(crate) fn from_xml(element: &Element, url_encoded: bool) -> CommonPrefix {
        CommonPrefix {
            prefix: get_text_option(element, "Prefix")
                .map(|p| if url_encoded { url_decode(&p) } else { p }),
        }
    }
}
