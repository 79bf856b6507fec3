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

use super::{SseCustomer, encode_encryption_context, require, write_headers, xml_body};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{
    CompletedMultipartUpload, ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode,
    RequestPayer, S3Request, ServerSideEncryption, StorageClass, ToS3Request,
};
use crate::s3::utils::{StringMap, UtcTime};
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct AbortMultipartUploadRequest {
    bucket: Option<String>,
    key: Option<String>,
    upload_id: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for AbortMultipartUploadRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "AbortMultipartUploadRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "AbortMultipartUploadRequest", "Key")?;
        let upload_id = require(
            self.upload_id.as_ref(),
            "AbortMultipartUploadRequest",
            "UploadId",
        )?;

        let mut query = Multimap::new();
        query.add("uploadId", upload_id);
        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());

        Ok(S3Request::builder()
            .method(Method::DELETE)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("AbortMultipartUpload"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CompleteMultipartUploadRequest {
    bucket: Option<String>,
    key: Option<String>,
    multipart_upload: Option<CompletedMultipartUpload>,
    upload_id: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for CompleteMultipartUploadRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "CompleteMultipartUploadRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "CompleteMultipartUploadRequest", "Key")?;
        let upload_id =
            require(self.upload_id.as_ref(), "CompleteMultipartUploadRequest", "UploadId")?;

        let mut query = Multimap::new();
        query.add("uploadId", upload_id);
        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        let xml = self.multipart_upload.clone().unwrap_or_default().to_xml();
        let body = xml_body(&mut headers, xml, false);

        Ok(S3Request::builder()
            .method(Method::POST)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .body(body)
            .build()
            .logged("CompleteMultipartUpload"))
    }
}

/// Starts a multipart upload. The object settings given here apply to the
/// object that completing the upload creates.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMultipartUploadRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<ObjectCannedAcl>,
    bucket: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    expires: Option<UtcTime>,
    grant_full_control: Option<String>,
    grant_read: Option<String>,
    #[shape(name = "GrantReadACP")]
    #[serde(rename = "GrantReadACP")]
    grant_read_acp: Option<String>,
    #[shape(name = "GrantWriteACP")]
    #[serde(rename = "GrantWriteACP")]
    grant_write_acp: Option<String>,
    key: Option<String>,
    metadata: Option<StringMap>,
    server_side_encryption: Option<ServerSideEncryption>,
    storage_class: Option<StorageClass>,
    website_redirect_location: Option<String>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKey", sensitive)]
    #[serde(rename = "SSECustomerKey")]
    sse_customer_key: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    #[shape(name = "SSEKMSEncryptionContext")]
    #[serde(rename = "SSEKMSEncryptionContext")]
    sse_kms_encryption_context: Option<String>,
    request_payer: Option<RequestPayer>,
    tagging: Option<String>,
    object_lock_mode: Option<ObjectLockMode>,
    object_lock_retain_until_date: Option<UtcTime>,
    object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl CreateMultipartUploadRequest {
    pub fn with_sse_kms_encryption_context_map(
        self,
        context: &StringMap,
    ) -> Result<Self, ValidationErr> {
        Ok(self.with_sse_kms_encryption_context(encode_encryption_context(context)?))
    }
}

impl ToS3Request for CreateMultipartUploadRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "CreateMultipartUploadRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "CreateMultipartUploadRequest", "Key")?;

        let mut query = Multimap::new();
        query.add_subresource("uploads");

        let mut headers = Multimap::new();
        write_headers!(self).apply(&mut headers);
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;

        Ok(S3Request::builder()
            .method(Method::POST)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("CreateMultipartUpload"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct UploadPartRequest {
    #[serde(skip)]
    body: Option<Bytes>,
    bucket: Option<String>,
    content_length: Option<i64>,
    #[shape(name = "ContentMD5")]
    #[serde(rename = "ContentMD5")]
    content_md5: Option<String>,
    key: Option<String>,
    /// 1 to 10000.
    part_number: Option<i32>,
    upload_id: Option<String>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKey", sensitive)]
    #[serde(rename = "SSECustomerKey")]
    sse_customer_key: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for UploadPartRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "UploadPartRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "UploadPartRequest", "Key")?;
        let upload_id = require(self.upload_id.as_ref(), "UploadPartRequest", "UploadId")?;
        let part_number = self
            .part_number
            .ok_or(ValidationErr::missing("UploadPartRequest", "PartNumber"))?;

        let mut query = Multimap::new();
        query.add("partNumber", part_number.to_string());
        query.add("uploadId", upload_id);

        let mut headers = Multimap::new();
        headers.add_opt(CONTENT_MD5, self.content_md5.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;

        let body = self.body.clone().unwrap_or_default();
        let length = self.content_length.unwrap_or(body.len() as i64);
        headers.add(CONTENT_LENGTH, length.to_string());

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .body(body)
            .build()
            .logged("UploadPart"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::CompletedPart;

    #[test]
    fn test_create_multipart_upload() {
        let s3req = CreateMultipartUploadRequest::default()
            .with_bucket("b")
            .with_key("big.bin")
            .with_content_type("application/octet-stream")
            .with_server_side_encryption(ServerSideEncryption::Aes256)
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::POST);
        assert_eq!(s3req.query_params().to_query_string(), "uploads");
        assert_eq!(s3req.header(X_AMZ_SERVER_SIDE_ENCRYPTION), Some("AES256"));
        assert!(s3req.body().is_none());
    }

    #[test]
    fn test_upload_part() {
        let s3req = UploadPartRequest::default()
            .with_bucket("b")
            .with_key("big.bin")
            .with_upload_id("up/1")
            .with_part_number(3)
            .with_body(vec![0u8; 16])
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::PUT);
        assert_eq!(
            s3req.query_params().to_query_string(),
            "partNumber=3&uploadId=up%2F1"
        );
        assert_eq!(s3req.header(CONTENT_LENGTH), Some("16"));
    }

    #[test]
    fn test_upload_part_requires_part_number() {
        let err = UploadPartRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_upload_id("u")
            .to_s3request()
            .unwrap_err();
        assert_eq!(err.to_string(), "UploadPartRequest requires PartNumber to be set");
    }

    #[test]
    fn test_complete_and_abort() {
        let complete = CompleteMultipartUploadRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_upload_id("u1")
            .with_multipart_upload(
                CompletedMultipartUpload::default().with_parts(vec![CompletedPart::new(1, "e1")]),
            )
            .to_s3request()
            .unwrap();
        assert_eq!(complete.method(), &Method::POST);
        assert_eq!(complete.header(CONTENT_TYPE), Some("application/xml"));
        let body = String::from_utf8(complete.body().unwrap().to_vec()).unwrap();
        assert!(body.contains("<PartNumber>1</PartNumber>"));

        let abort = AbortMultipartUploadRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_upload_id("u1")
            .to_s3request()
            .unwrap();
        assert_eq!(abort.method(), &Method::DELETE);
        assert_eq!(abort.query_params().to_query_string(), "uploadId=u1");
    }
}
