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

//! Reading and replacing access control lists.
//!
//! A put request carries either a canned ACL, grant headers, or a full
//! [`AccessControlPolicy`] body; S3 rejects mixing them.

use super::{require, xml_body};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{
    AccessControlPolicy, BucketCannedAcl, ObjectCannedAcl, RequestPayer, S3Request, ToS3Request,
};
use http::Method;
use serde::{Deserialize, Serialize};

fn acl_query(version_id: Option<&String>) -> Multimap {
    let mut query = Multimap::new();
    query.add_subresource("acl");
    query.add_opt("versionId", version_id);
    query
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketAclRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetBucketAclRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "GetBucketAclRequest", "Bucket")?;
        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .query_params(acl_query(None))
            .build()
            .logged("GetBucketAcl"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketAclRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<BucketCannedAcl>,
    access_control_policy: Option<AccessControlPolicy>,
    bucket: Option<String>,
    grant_full_control: Option<String>,
    grant_read: Option<String>,
    #[shape(name = "GrantReadACP")]
    #[serde(rename = "GrantReadACP")]
    grant_read_acp: Option<String>,
    grant_write: Option<String>,
    #[shape(name = "GrantWriteACP")]
    #[serde(rename = "GrantWriteACP")]
    grant_write_acp: Option<String>,
}

impl ToS3Request for PutBucketAclRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutBucketAclRequest", "Bucket")?;

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_ACL, self.acl.as_ref());
        headers.add_opt(X_AMZ_GRANT_FULL_CONTROL, self.grant_full_control.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ, self.grant_read.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ_ACP, self.grant_read_acp.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE, self.grant_write.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE_ACP, self.grant_write_acp.as_ref());
        let body = self
            .access_control_policy
            .as_ref()
            .map(|policy| xml_body(&mut headers, policy.to_xml(), true));

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .query_params(acl_query(None))
            .headers(headers)
            .body(body)
            .build()
            .logged("PutBucketAcl"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectAclRequest {
    bucket: Option<String>,
    key: Option<String>,
    version_id: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for GetObjectAclRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "GetObjectAclRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "GetObjectAclRequest", "Key")?;

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());

        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .object(key)
            .query_params(acl_query(self.version_id.as_ref()))
            .headers(headers)
            .build()
            .logged("GetObjectAcl"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutObjectAclRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<ObjectCannedAcl>,
    access_control_policy: Option<AccessControlPolicy>,
    bucket: Option<String>,
    grant_full_control: Option<String>,
    grant_read: Option<String>,
    #[shape(name = "GrantReadACP")]
    #[serde(rename = "GrantReadACP")]
    grant_read_acp: Option<String>,
    grant_write: Option<String>,
    #[shape(name = "GrantWriteACP")]
    #[serde(rename = "GrantWriteACP")]
    grant_write_acp: Option<String>,
    key: Option<String>,
    version_id: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for PutObjectAclRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutObjectAclRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "PutObjectAclRequest", "Key")?;

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_ACL, self.acl.as_ref());
        headers.add_opt(X_AMZ_GRANT_FULL_CONTROL, self.grant_full_control.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ, self.grant_read.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ_ACP, self.grant_read_acp.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE, self.grant_write.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE_ACP, self.grant_write_acp.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        let body = self
            .access_control_policy
            .as_ref()
            .map(|policy| xml_body(&mut headers, policy.to_xml(), true));

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .object(key)
            .query_params(acl_query(self.version_id.as_ref()))
            .headers(headers)
            .body(body)
            .build()
            .logged("PutObjectAcl"))
    }
}
