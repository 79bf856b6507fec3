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

//! Parts of a multipart upload

use crate::Shape;
use crate::s3::utils::push_xml_opt;
use serde::{Deserialize, Serialize};

/// A part that was uploaded, identified by its number and the ETag returned for it.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CompletedPart {
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    part_number: Option<i32>,
}

impl CompletedPart {
    pub fn new(part_number: i32, etag: impl Into<String>) -> CompletedPart {
        CompletedPart {
            etag: Some(etag.into()),
            part_number: Some(part_number),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CompletedMultipartUpload {
    parts: Option<Vec<CompletedPart>>,
}

impl CompletedMultipartUpload {
    /// Parts are written in the order they were given; S3 requires ascending part numbers.
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CompleteMultipartUpload>");
        for part in self.parts.iter().flatten() {
            data.push_str("<Part>");
            push_xml_opt(&mut data, "PartNumber", part.part_number.as_ref());
            if let Some(etag) = &part.etag {
                // ETags are sent quoted
                let quoted = format!("\"{}\"", etag.trim_matches('"'));
                push_xml_opt(&mut data, "ETag", Some(&quoted));
            }
            data.push_str("</Part>");
        }
        data.push_str("</CompleteMultipartUpload>");
        data
    }
}
