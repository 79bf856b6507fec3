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

//! Multi-object delete

use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_option, parse_text_option, push_xml_opt};
use serde::{Deserialize, Serialize};
use xmltree::Element;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectIdentifier {
    key: Option<String>,
    version_id: Option<String>,
}

impl ObjectIdentifier {
    pub fn new(key: impl Into<String>) -> ObjectIdentifier {
        ObjectIdentifier::default().with_key(key)
    }
}

impl From<&str> for ObjectIdentifier {
    fn from(key: &str) -> Self {
        ObjectIdentifier::new(key)
    }
}

/// Objects to delete in one request. In quiet mode the response lists only errors.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Delete {
    objects: Option<Vec<ObjectIdentifier>>,
    quiet: Option<bool>,
}

impl Delete {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<Delete>");
        push_xml_opt(&mut data, "Quiet", self.quiet.as_ref());
        for object in self.objects.iter().flatten() {
            data.push_str("<Object>");
            push_xml_opt(&mut data, "Key", object.key.as_ref());
            push_xml_opt(&mut data, "VersionId", object.version_id.as_ref());
            data.push_str("</Object>");
        }
        data.push_str("</Delete>");
        data
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeletedObject {
    key: Option<String>,
    version_id: Option<String>,
    delete_marker: Option<bool>,
    delete_marker_version_id: Option<String>,
}

impl DeletedObject {
    pub(crate) fn from_xml(element: &Element) -> Result<DeletedObject, ValidationErr> {
        Ok(DeletedObject {
            key: get_text_option(element, "Key"),
            version_id: get_text_option(element, "VersionId"),
            delete_marker: parse_text_option(element, "DeleteMarker")?,
            delete_marker_version_id: get_text_option(element, "DeleteMarkerVersionId"),
        })
    }
}

/// A key that could not be deleted and why.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteError {
    key: Option<String>,
    version_id: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl DeleteError {
    pub(crate) fn from_xml(element: &Element) -> DeleteError {
        DeleteError {
            key: get_text_option(element, "Key"),
            version_id: get_text_option(element, "VersionId"),
            code: get_text_option(element, "Code"),
            message: get_text_option(element, "Message"),
        }
    }
}
