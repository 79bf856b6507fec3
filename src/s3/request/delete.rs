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

use super::{require, xml_body};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{Delete, RequestPayer, S3Request, ToS3Request};
use http::Method;
use serde::{Deserialize, Serialize};

/// Deletes one object, or one version of it when `version_id` is set.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteObjectRequest {
    bucket: Option<String>,
    key: Option<String>,
    /// Serial number and current code of the MFA device, space separated.
    #[shape(name = "MFA")]
    #[serde(rename = "MFA")]
    mfa: Option<String>,
    version_id: Option<String>,
    request_payer: Option<RequestPayer>,
    bypass_governance_retention: Option<bool>,
}

impl ToS3Request for DeleteObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "DeleteObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "DeleteObjectRequest", "Key")?;

        let mut query = Multimap::new();
        query.add_opt("versionId", self.version_id.as_ref());

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_MFA, self.mfa.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        if self.bypass_governance_retention == Some(true) {
            headers.add(X_AMZ_BYPASS_GOVERNANCE_RETENTION, "true");
        }

        Ok(S3Request::builder()
            .method(Method::DELETE)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("DeleteObject"))
    }
}

/// Deletes up to 1000 objects in one request.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteObjectsRequest {
    bucket: Option<String>,
    delete: Option<Delete>,
    #[shape(name = "MFA")]
    #[serde(rename = "MFA")]
    mfa: Option<String>,
    request_payer: Option<RequestPayer>,
    bypass_governance_retention: Option<bool>,
}

impl ToS3Request for DeleteObjectsRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "DeleteObjectsRequest", "Bucket")?;
        let delete = self
            .delete
            .as_ref()
            .ok_or(ValidationErr::missing("DeleteObjectsRequest", "Delete"))?;

        let mut query = Multimap::new();
        query.add_subresource("delete");

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_MFA, self.mfa.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        if self.bypass_governance_retention == Some(true) {
            headers.add(X_AMZ_BYPASS_GOVERNANCE_RETENTION, "true");
        }
        let body = xml_body(&mut headers, delete.to_xml(), true);

        Ok(S3Request::builder()
            .method(Method::POST)
            .bucket(bucket)
            .query_params(query)
            .headers(headers)
            .body(body)
            .build()
            .logged("DeleteObjects"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::ObjectIdentifier;
    use crate::s3::utils::md5sum_hash;

    #[test]
    fn test_delete_object_version() {
        let s3req = DeleteObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_version_id("v1")
            .with_bypass_governance_retention(true)
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::DELETE);
        assert_eq!(s3req.query_params().to_query_string(), "versionId=v1");
        assert_eq!(s3req.header(X_AMZ_BYPASS_GOVERNANCE_RETENTION), Some("true"));
    }

    #[test]
    fn test_delete_objects_body_md5() {
        let delete = Delete::default().with_objects(vec![ObjectIdentifier::new("a")]);
        let s3req = DeleteObjectsRequest::default()
            .with_bucket("b")
            .with_delete(delete.clone())
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::POST);
        assert_eq!(s3req.object(), None);
        assert_eq!(s3req.query_params().to_query_string(), "delete");
        let expected = md5sum_hash(delete.to_xml().as_bytes());
        assert_eq!(s3req.header(CONTENT_MD5), Some(expected.as_str()));
    }

    #[test]
    fn test_delete_objects_requires_delete() {
        let err = DeleteObjectsRequest::default()
            .with_bucket("b")
            .to_s3request()
            .unwrap_err();
        assert_eq!(err.to_string(), "DeleteObjectsRequest requires Delete to be set");
    }
}
