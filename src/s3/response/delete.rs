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

use super::request_charged;
use crate::Shape;
use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::types::{DeleteError, DeletedObject, FromS3Response, RequestCharged, S3Response};
use crate::s3::utils::child_elements;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteObjectResult {
    /// Set when the delete created (or removed) a delete marker.
    delete_marker: Option<bool>,
    version_id: Option<String>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for DeleteObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        Ok(DeleteObjectResult {
            delete_marker: resp.header_parse(X_AMZ_DELETE_MARKER)?,
            version_id: resp.header_str(X_AMZ_VERSION_ID),
            request_charged: request_charged(&resp),
        })
    }
}

/// Outcome of a multi-object delete. In quiet mode `deleted` is empty.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteObjectsResult {
    deleted: Option<Vec<DeletedObject>>,
    errors: Option<Vec<DeleteError>>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for DeleteObjectsResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = resp.xml_root()?;
        let deleted = child_elements(&root, "Deleted")
            .map(DeletedObject::from_xml)
            .collect::<Result<Vec<_>, _>>()?;
        let errors = child_elements(&root, "Error")
            .map(DeleteError::from_xml)
            .collect();
        Ok(DeleteObjectsResult {
            deleted: Some(deleted),
            errors: Some(errors),
            request_charged: request_charged(&resp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn test_delete_object_result() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_DELETE_MARKER, HeaderValue::from_static("true"));
        headers.insert(X_AMZ_VERSION_ID, HeaderValue::from_static("dm-1"));
        let result =
            DeleteObjectResult::from_s3response(S3Response::new(204, headers, Bytes::new()))
                .unwrap();
        assert_eq!(result.to_string(), "{DeleteMarker: true, VersionId: dm-1}");
    }

    #[test]
    fn test_delete_objects_result() {
        let body = Bytes::from_static(
            b"<DeleteResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
              <Deleted><Key>a.txt</Key></Deleted>\
              <Deleted><Key>b.txt</Key><DeleteMarker>true</DeleteMarker>\
              <DeleteMarkerVersionId>m1</DeleteMarkerVersionId></Deleted>\
              <Error><Key>c.txt</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>\
              </DeleteResult>",
        );
        let result =
            DeleteObjectsResult::from_s3response(S3Response::new(200, HeaderMap::new(), body))
                .unwrap();
        let deleted = result.deleted().unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(deleted[1].delete_marker(), Some(&true));
        let errors = result.errors().unwrap();
        assert_eq!(errors[0].code().map(String::as_str), Some("AccessDenied"));
    }

    #[test]
    fn test_quiet_delete_has_empty_lists() {
        let body = Bytes::from_static(b"<DeleteResult></DeleteResult>");
        let result =
            DeleteObjectsResult::from_s3response(S3Response::new(200, HeaderMap::new(), body))
                .unwrap();
        assert_eq!(result.deleted(), Some(&Vec::new()));
        assert_eq!(result.errors(), Some(&Vec::new()));
        assert_eq!(result.to_string(), "{Deleted: [], Errors: []}");
    }
}
