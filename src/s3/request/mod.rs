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

//! Request shapes, one per S3 operation, and their mapping onto
//! [`S3Request`](crate::s3::types::S3Request)

mod acl;
mod bucket;
mod bucket_config;
mod delete;
mod list;
mod multipart;
mod object;

pub use acl::{GetBucketAclRequest, GetObjectAclRequest, PutBucketAclRequest, PutObjectAclRequest};
pub use bucket::{CreateBucketRequest, GetBucketLocationRequest};
pub use bucket_config::{
    GetBucketCorsRequest, GetBucketEncryptionRequest, GetBucketWebsiteRequest,
    GetObjectLockConfigurationRequest, PutBucketCorsRequest, PutBucketEncryptionRequest,
    PutBucketWebsiteRequest, PutObjectLockConfigurationRequest,
};
pub use delete::{DeleteObjectRequest, DeleteObjectsRequest};
pub use list::{ListObjectsRequest, ListObjectsV2Request};
pub use multipart::{
    AbortMultipartUploadRequest, CompleteMultipartUploadRequest, CreateMultipartUploadRequest,
    UploadPartRequest,
};
pub use object::{
    CopyObjectRequest, GetObjectRequest, HeadObjectRequest, PutObjectRequest,
    RestoreObjectRequest,
};

use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{
    ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};
use crate::s3::utils::{
    StringMap, UtcTime, b64decode, b64encode, md5sum_hash, to_http_header_value, to_iso8601utc,
};
use bytes::Bytes;

/// Returns the value of a field needed to address the request.
pub(crate) fn require<'a>(
    value: Option<&'a String>,
    shape: &'static str,
    field: &'static str,
) -> Result<&'a str, ValidationErr> {
    match value {
        Some(v) => Ok(v.as_str()),
        None => Err(ValidationErr::missing(shape, field)),
    }
}

pub(crate) fn add_http_date(headers: &mut Multimap, name: &str, value: Option<&UtcTime>) {
    if let Some(v) = value {
        headers.add(name, to_http_header_value(*v));
    }
}

pub(crate) fn add_metadata(headers: &mut Multimap, metadata: Option<&StringMap>) {
    for (key, value) in metadata.into_iter().flatten() {
        headers.add(format!("{X_AMZ_META_PREFIX}{key}"), value.as_str());
    }
}

/// Sets `Content-Type` and `Content-MD5` for an XML body and returns the body.
pub(crate) fn xml_body(headers: &mut Multimap, xml: String, with_md5: bool) -> Bytes {
    headers.add(CONTENT_TYPE, "application/xml");
    if with_md5 {
        headers.add(CONTENT_MD5, md5sum_hash(xml.as_bytes()));
    }
    Bytes::from(xml)
}

/// Encodes an SSE-KMS encryption context as base64 JSON.
pub fn encode_encryption_context(context: &StringMap) -> Result<String, ValidationErr> {
    Ok(b64encode(serde_json::to_vec(context)?))
}

/// Customer-provided encryption key headers.
pub(crate) struct SseCustomer<'a> {
    pub algorithm: Option<&'a String>,
    pub key: Option<&'a String>,
    pub key_md5: Option<&'a String>,
}

impl SseCustomer<'_> {
    /// Adds the three headers, computing the key MD5 when only the key is given.
    pub(crate) fn apply(
        &self,
        headers: &mut Multimap,
        copy_source: bool,
    ) -> Result<(), ValidationErr> {
        let (algorithm, key, key_md5) = if copy_source {
            (
                X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM,
                X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY,
                X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5,
            )
        } else {
            (
                X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM,
                X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY,
                X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5,
            )
        };
        headers.add_opt(algorithm, self.algorithm);
        if let Some(v) = self.key {
            headers.add(key, v.as_str());
            match self.key_md5 {
                Some(md5) => headers.add(key_md5, md5.as_str()),
                None => headers.add(key_md5, md5sum_hash(&b64decode(v)?)),
            }
        } else {
            headers.add_opt(key_md5, self.key_md5);
        }
        Ok(())
    }
}

/// Headers shared by the operations that write an object: put, copy and
/// create-multipart-upload.
#[derive(Default)]
pub(crate) struct WriteHeaders<'a> {
    pub acl: Option<&'a ObjectCannedAcl>,
    pub cache_control: Option<&'a String>,
    pub content_disposition: Option<&'a String>,
    pub content_encoding: Option<&'a String>,
    pub content_language: Option<&'a String>,
    pub content_type: Option<&'a String>,
    pub expires: Option<&'a UtcTime>,
    pub grant_full_control: Option<&'a String>,
    pub grant_read: Option<&'a String>,
    pub grant_read_acp: Option<&'a String>,
    pub grant_write_acp: Option<&'a String>,
    pub metadata: Option<&'a StringMap>,
    pub server_side_encryption: Option<&'a ServerSideEncryption>,
    pub storage_class: Option<&'a StorageClass>,
    pub website_redirect_location: Option<&'a String>,
    pub sse_kms_key_id: Option<&'a String>,
    pub sse_kms_encryption_context: Option<&'a String>,
    pub request_payer: Option<&'a RequestPayer>,
    pub tagging: Option<&'a String>,
    pub object_lock_mode: Option<&'a ObjectLockMode>,
    pub object_lock_retain_until_date: Option<&'a UtcTime>,
    pub object_lock_legal_hold_status: Option<&'a ObjectLockLegalHoldStatus>,
}

/// Builds [`WriteHeaders`] from a shape carrying every write-header field.
macro_rules! write_headers {
    ($shape:expr) => {
        $crate::s3::request::WriteHeaders {
            acl: $shape.acl.as_ref(),
            cache_control: $shape.cache_control.as_ref(),
            content_disposition: $shape.content_disposition.as_ref(),
            content_encoding: $shape.content_encoding.as_ref(),
            content_language: $shape.content_language.as_ref(),
            content_type: $shape.content_type.as_ref(),
            expires: $shape.expires.as_ref(),
            grant_full_control: $shape.grant_full_control.as_ref(),
            grant_read: $shape.grant_read.as_ref(),
            grant_read_acp: $shape.grant_read_acp.as_ref(),
            grant_write_acp: $shape.grant_write_acp.as_ref(),
            metadata: $shape.metadata.as_ref(),
            server_side_encryption: $shape.server_side_encryption.as_ref(),
            storage_class: $shape.storage_class.as_ref(),
            website_redirect_location: $shape.website_redirect_location.as_ref(),
            sse_kms_key_id: $shape.sse_kms_key_id.as_ref(),
            sse_kms_encryption_context: $shape.sse_kms_encryption_context.as_ref(),
            request_payer: $shape.request_payer.as_ref(),
            tagging: $shape.tagging.as_ref(),
            object_lock_mode: $shape.object_lock_mode.as_ref(),
            object_lock_retain_until_date: $shape.object_lock_retain_until_date.as_ref(),
            object_lock_legal_hold_status: $shape.object_lock_legal_hold_status.as_ref(),
        }
    };
}
pub(crate) use write_headers;

impl WriteHeaders<'_> {
    pub(crate) fn apply(&self, headers: &mut Multimap) {
        headers.add_opt(X_AMZ_ACL, self.acl);
        headers.add_opt(CACHE_CONTROL, self.cache_control);
        headers.add_opt(CONTENT_DISPOSITION, self.content_disposition);
        headers.add_opt(CONTENT_ENCODING, self.content_encoding);
        headers.add_opt(CONTENT_LANGUAGE, self.content_language);
        headers.add_opt(CONTENT_TYPE, self.content_type);
        add_http_date(headers, EXPIRES, self.expires);
        headers.add_opt(X_AMZ_GRANT_FULL_CONTROL, self.grant_full_control);
        headers.add_opt(X_AMZ_GRANT_READ, self.grant_read);
        headers.add_opt(X_AMZ_GRANT_READ_ACP, self.grant_read_acp);
        headers.add_opt(X_AMZ_GRANT_WRITE_ACP, self.grant_write_acp);
        add_metadata(headers, self.metadata);
        headers.add_opt(X_AMZ_SERVER_SIDE_ENCRYPTION, self.server_side_encryption);
        headers.add_opt(X_AMZ_STORAGE_CLASS, self.storage_class);
        headers.add_opt(X_AMZ_WEBSITE_REDIRECT_LOCATION, self.website_redirect_location);
        headers.add_opt(X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID, self.sse_kms_key_id);
        headers.add_opt(X_AMZ_SERVER_SIDE_ENCRYPTION_CONTEXT, self.sse_kms_encryption_context);
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer);
        headers.add_opt(X_AMZ_TAGGING, self.tagging);
        headers.add_opt(X_AMZ_OBJECT_LOCK_MODE, self.object_lock_mode);
        if let Some(v) = self.object_lock_retain_until_date {
            headers.add(X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE, to_iso8601utc(*v));
        }
        headers.add_opt(X_AMZ_OBJECT_LOCK_LEGAL_HOLD, self.object_lock_legal_hold_status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_customer_md5_computed() {
        let key = b64encode([7u8; 32]);
        let mut headers = Multimap::new();
        let aes = "AES256".to_string();
        SseCustomer {
            algorithm: Some(&aes),
            key: Some(&key),
            key_md5: None,
        }
        .apply(&mut headers, false)
        .unwrap();
        assert_eq!(
            headers.first(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5),
            Some(md5sum_hash(&[7u8; 32]).as_str())
        );
        assert_eq!(
            headers.first(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM),
            Some("AES256")
        );
    }

    #[test]
    fn test_sse_customer_explicit_md5_kept() {
        let key = b64encode([1u8; 32]);
        let md5 = "given".to_string();
        let mut headers = Multimap::new();
        SseCustomer {
            algorithm: None,
            key: Some(&key),
            key_md5: Some(&md5),
        }
        .apply(&mut headers, true)
        .unwrap();
        assert_eq!(
            headers.first(X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5),
            Some("given")
        );
    }

    #[test]
    fn test_sse_customer_bad_key() {
        let key = "not base64!".to_string();
        let mut headers = Multimap::new();
        let result = SseCustomer {
            algorithm: None,
            key: Some(&key),
            key_md5: None,
        }
        .apply(&mut headers, false);
        assert!(matches!(result, Err(ValidationErr::Base64(_))));
    }

    #[test]
    fn test_write_headers_same_for_put_copy_and_create_upload() {
        use crate::s3::types::ToS3Request;

        let put = PutObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_storage_class(StorageClass::StandardIa)
            .with_tagging("team=storage")
            .with_metadata_entry("owner", "ops")
            .to_s3request()
            .unwrap();
        let copy = CopyObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_copy_source("src/k")
            .with_storage_class("STANDARD_IA")
            .with_tagging("team=storage")
            .with_metadata(StringMap::from([("owner".to_string(), "ops".to_string())]))
            .to_s3request()
            .unwrap();
        let create = CreateMultipartUploadRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_storage_class(StorageClass::StandardIa)
            .with_tagging("team=storage")
            .with_metadata(StringMap::from([("owner".to_string(), "ops".to_string())]))
            .to_s3request()
            .unwrap();
        for s3req in [&put, &copy, &create] {
            assert_eq!(s3req.headers().first(X_AMZ_STORAGE_CLASS), Some("STANDARD_IA"));
            assert_eq!(s3req.headers().first(X_AMZ_TAGGING), Some("team=storage"));
            assert_eq!(s3req.headers().first("x-amz-meta-owner"), Some("ops"));
        }
    }

    #[test]
    fn test_encryption_context() {
        let mut context = StringMap::new();
        context.insert("project".to_string(), "alpha".to_string());
        let encoded = encode_encryption_context(&context).unwrap();
        assert_eq!(b64decode(&encoded).unwrap(), br#"{"project":"alpha"}"#.to_vec());
    }
}
