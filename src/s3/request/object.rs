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

//! Single-object operations: put, copy, get, head and restore.

use super::{
    SseCustomer, add_http_date, encode_encryption_context, require, write_headers, xml_body,
};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{
    MetadataDirective, ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    RestoreRequest, S3Request, ServerSideEncryption, StorageClass, TaggingDirective, ToS3Request,
};
use crate::s3::utils::{StringMap, UtcTime, to_http_header_value, urlencode_object_key};
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};

/// Uploads an object in a single request.
///
/// When `content_length` is not set, the length of `body` is sent.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutObjectRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<ObjectCannedAcl>,
    #[serde(skip)]
    body: Option<Bytes>,
    bucket: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_length: Option<i64>,
    #[shape(name = "ContentMD5")]
    #[serde(rename = "ContentMD5")]
    content_md5: Option<String>,
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
    /// Base64-encoded JSON; see
    /// [`with_sse_kms_encryption_context_map`](Self::with_sse_kms_encryption_context_map).
    #[shape(name = "SSEKMSEncryptionContext")]
    #[serde(rename = "SSEKMSEncryptionContext")]
    sse_kms_encryption_context: Option<String>,
    request_payer: Option<RequestPayer>,
    /// URL query encoded tag set, e.g. `team=storage&env=prod`.
    tagging: Option<String>,
    object_lock_mode: Option<ObjectLockMode>,
    object_lock_retain_until_date: Option<UtcTime>,
    object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl PutObjectRequest {
    /// Sets the encryption context from a map, encoding it as base64 JSON.
    pub fn with_sse_kms_encryption_context_map(
        self,
        context: &StringMap,
    ) -> Result<Self, ValidationErr> {
        Ok(self.with_sse_kms_encryption_context(encode_encryption_context(context)?))
    }

    /// Adds one user metadata entry, creating the map when needed.
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(StringMap::new)
            .insert(key.into(), value.into());
        self
    }
}

impl ToS3Request for PutObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "PutObjectRequest", "Key")?;

        let mut headers = Multimap::new();
        write_headers!(self).apply(&mut headers);
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;
        headers.add_opt(CONTENT_MD5, self.content_md5.as_ref());

        let body = self.body.clone().unwrap_or_default();
        let length = self.content_length.unwrap_or(body.len() as i64);
        headers.add(CONTENT_LENGTH, length.to_string());

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .object(key)
            .headers(headers)
            .body(body)
            .build()
            .logged("PutObject"))
    }
}

/// Copies an object, possibly onto itself to change its metadata.
///
/// `copy_source` is `source-bucket/source-key`, optionally followed by
/// `?versionId=<id>`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CopyObjectRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<ObjectCannedAcl>,
    bucket: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    copy_source: Option<String>,
    copy_source_if_match: Option<String>,
    copy_source_if_modified_since: Option<UtcTime>,
    copy_source_if_none_match: Option<String>,
    copy_source_if_unmodified_since: Option<UtcTime>,
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
    metadata_directive: Option<MetadataDirective>,
    tagging_directive: Option<TaggingDirective>,
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
    #[shape(name = "CopySourceSSECustomerAlgorithm")]
    #[serde(rename = "CopySourceSSECustomerAlgorithm")]
    copy_source_sse_customer_algorithm: Option<String>,
    #[shape(name = "CopySourceSSECustomerKey", sensitive)]
    #[serde(rename = "CopySourceSSECustomerKey")]
    copy_source_sse_customer_key: Option<String>,
    #[shape(name = "CopySourceSSECustomerKeyMD5")]
    #[serde(rename = "CopySourceSSECustomerKeyMD5")]
    copy_source_sse_customer_key_md5: Option<String>,
    request_payer: Option<RequestPayer>,
    tagging: Option<String>,
    object_lock_mode: Option<ObjectLockMode>,
    object_lock_retain_until_date: Option<UtcTime>,
    object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl CopyObjectRequest {
    /// Sets `copy_source` from its parts.
    pub fn with_copy_source_object(
        self,
        bucket: &str,
        key: &str,
        version_id: Option<&str>,
    ) -> Self {
        let mut source = format!("{bucket}/{}", key.trim_start_matches('/'));
        if let Some(v) = version_id {
            source.push_str("?versionId=");
            source.push_str(v);
        }
        self.with_copy_source(source)
    }

    pub fn with_sse_kms_encryption_context_map(
        self,
        context: &StringMap,
    ) -> Result<Self, ValidationErr> {
        Ok(self.with_sse_kms_encryption_context(encode_encryption_context(context)?))
    }
}

/// Value of `x-amz-copy-source`: the path URL-encoded, `?versionId=` kept as is.
fn copy_source_header(source: &str) -> String {
    let source = source.trim_start_matches('/');
    match source.split_once("?versionId=") {
        Some((path, version)) => format!("{}?versionId={version}", urlencode_object_key(path)),
        None => urlencode_object_key(source),
    }
}

impl ToS3Request for CopyObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "CopyObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "CopyObjectRequest", "Key")?;
        let source = require(self.copy_source.as_ref(), "CopyObjectRequest", "CopySource")?;

        let mut headers = Multimap::new();
        headers.add(X_AMZ_COPY_SOURCE, copy_source_header(source));
        headers.add_opt(X_AMZ_COPY_SOURCE_IF_MATCH, self.copy_source_if_match.as_ref());
        headers.add_opt(X_AMZ_COPY_SOURCE_IF_NONE_MATCH, self.copy_source_if_none_match.as_ref());
        add_http_date(
            &mut headers,
            X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE,
            self.copy_source_if_modified_since.as_ref(),
        );
        add_http_date(
            &mut headers,
            X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE,
            self.copy_source_if_unmodified_since.as_ref(),
        );
        headers.add_opt(X_AMZ_METADATA_DIRECTIVE, self.metadata_directive.as_ref());
        headers.add_opt(X_AMZ_TAGGING_DIRECTIVE, self.tagging_directive.as_ref());
        write_headers!(self).apply(&mut headers);
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;
        SseCustomer {
            algorithm: self.copy_source_sse_customer_algorithm.as_ref(),
            key: self.copy_source_sse_customer_key.as_ref(),
            key_md5: self.copy_source_sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, true)?;

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .object(key)
            .headers(headers)
            .build()
            .logged("CopyObject"))
    }
}

/// Retrieves an object, optionally a byte range of it or a single part.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectRequest {
    bucket: Option<String>,
    if_match: Option<String>,
    if_modified_since: Option<UtcTime>,
    if_none_match: Option<String>,
    if_unmodified_since: Option<UtcTime>,
    key: Option<String>,
    /// HTTP range, e.g. `bytes=0-1023`.
    range: Option<String>,
    response_cache_control: Option<String>,
    response_content_disposition: Option<String>,
    response_content_encoding: Option<String>,
    response_content_language: Option<String>,
    response_content_type: Option<String>,
    response_expires: Option<UtcTime>,
    version_id: Option<String>,
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
    part_number: Option<i32>,
}

impl GetObjectRequest {
    /// Sets `range` to the inclusive byte range `start..=end`.
    pub fn with_byte_range(self, start: u64, end: u64) -> Self {
        self.with_range(format!("bytes={start}-{end}"))
    }
}

impl ToS3Request for GetObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "GetObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "GetObjectRequest", "Key")?;

        let mut headers = Multimap::new();
        headers.add_opt(IF_MATCH, self.if_match.as_ref());
        headers.add_opt(IF_NONE_MATCH, self.if_none_match.as_ref());
        add_http_date(&mut headers, IF_MODIFIED_SINCE, self.if_modified_since.as_ref());
        add_http_date(&mut headers, IF_UNMODIFIED_SINCE, self.if_unmodified_since.as_ref());
        headers.add_opt(RANGE, self.range.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;

        let mut query = Multimap::new();
        query.add_opt("versionId", self.version_id.as_ref());
        query.add_opt("partNumber", self.part_number.as_ref());
        query.add_opt("response-cache-control", self.response_cache_control.as_ref());
        query.add_opt(
            "response-content-disposition",
            self.response_content_disposition.as_ref(),
        );
        query.add_opt("response-content-encoding", self.response_content_encoding.as_ref());
        query.add_opt("response-content-language", self.response_content_language.as_ref());
        query.add_opt("response-content-type", self.response_content_type.as_ref());
        if let Some(v) = &self.response_expires {
            query.add("response-expires", to_http_header_value(*v));
        }

        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("GetObject"))
    }
}

/// Retrieves an object's metadata without its body.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct HeadObjectRequest {
    bucket: Option<String>,
    if_match: Option<String>,
    if_modified_since: Option<UtcTime>,
    if_none_match: Option<String>,
    if_unmodified_since: Option<UtcTime>,
    key: Option<String>,
    range: Option<String>,
    version_id: Option<String>,
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
    part_number: Option<i32>,
}

impl ToS3Request for HeadObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "HeadObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "HeadObjectRequest", "Key")?;

        let mut headers = Multimap::new();
        headers.add_opt(IF_MATCH, self.if_match.as_ref());
        headers.add_opt(IF_NONE_MATCH, self.if_none_match.as_ref());
        add_http_date(&mut headers, IF_MODIFIED_SINCE, self.if_modified_since.as_ref());
        add_http_date(&mut headers, IF_UNMODIFIED_SINCE, self.if_unmodified_since.as_ref());
        headers.add_opt(RANGE, self.range.as_ref());
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        SseCustomer {
            algorithm: self.sse_customer_algorithm.as_ref(),
            key: self.sse_customer_key.as_ref(),
            key_md5: self.sse_customer_key_md5.as_ref(),
        }
        .apply(&mut headers, false)?;

        let mut query = Multimap::new();
        query.add_opt("versionId", self.version_id.as_ref());
        query.add_opt("partNumber", self.part_number.as_ref());

        Ok(S3Request::builder()
            .method(Method::HEAD)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .build()
            .logged("HeadObject"))
    }
}

/// Restores a temporary copy of an archived object.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreObjectRequest {
    bucket: Option<String>,
    key: Option<String>,
    version_id: Option<String>,
    restore_request: Option<RestoreRequest>,
    request_payer: Option<RequestPayer>,
}

impl ToS3Request for RestoreObjectRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "RestoreObjectRequest", "Bucket")?;
        let key = require(self.key.as_ref(), "RestoreObjectRequest", "Key")?;

        let mut query = Multimap::new();
        query.add_subresource("restore");
        query.add_opt("versionId", self.version_id.as_ref());

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        let xml = self
            .restore_request
            .clone()
            .unwrap_or_default()
            .to_xml();
        let body = xml_body(&mut headers, xml, true);

        Ok(S3Request::builder()
            .method(Method::POST)
            .bucket(bucket)
            .object(key)
            .query_params(query)
            .headers(headers)
            .body(body)
            .build()
            .logged("RestoreObject"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::{GlacierJobParameters, Tier};
    use crate::s3::utils::{b64encode, md5sum_hash};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_put_object_headers() {
        let req = PutObjectRequest::default()
            .with_bucket("photos")
            .with_key("cat.jpg")
            .with_body(Bytes::from_static(b"meow"))
            .with_content_type("image/jpeg")
            .with_storage_class(StorageClass::StandardIa)
            .with_acl("public-read")
            .with_request_payer(RequestPayer::Requester)
            .with_metadata_entry("color", "orange")
            .with_object_lock_retain_until_date(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
        let s3req = req.to_s3request().unwrap();
        assert_eq!(s3req.method(), &Method::PUT);
        assert_eq!(s3req.bucket(), Some("photos"));
        assert_eq!(s3req.object(), Some("cat.jpg"));
        assert_eq!(s3req.header(CONTENT_LENGTH), Some("4"));
        assert_eq!(s3req.header(CONTENT_TYPE), Some("image/jpeg"));
        assert_eq!(s3req.header(X_AMZ_STORAGE_CLASS), Some("STANDARD_IA"));
        assert_eq!(s3req.header(X_AMZ_ACL), Some("public-read"));
        assert_eq!(s3req.header(X_AMZ_REQUEST_PAYER), Some("requester"));
        assert_eq!(s3req.header("x-amz-meta-color"), Some("orange"));
        assert_eq!(
            s3req.header(X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE),
            Some("2030-01-01T00:00:00.000Z")
        );
        assert_eq!(s3req.body().map(|b| b.len()), Some(4));
    }

    #[test]
    fn test_put_object_requires_key() {
        let err = PutObjectRequest::default()
            .with_bucket("photos")
            .to_s3request()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationErr::MissingField {
                shape: "PutObjectRequest",
                field: "Key"
            }
        ));
    }

    #[test]
    fn test_put_object_sse_customer_md5() {
        let key = b64encode([9u8; 32]);
        let req = PutObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_sse_customer_algorithm("AES256")
            .with_sse_customer_key(key.clone());
        let s3req = req.to_s3request().unwrap();
        assert_eq!(
            s3req.header(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5),
            Some(md5sum_hash(&[9u8; 32]).as_str())
        );
        assert!(!req.to_string().contains(&key));
        assert!(req.to_string().contains("SSECustomerKey: *** Sensitive Data Redacted ***"));
    }

    #[test]
    fn test_copy_source_header() {
        let req = CopyObjectRequest::default()
            .with_bucket("dst")
            .with_key("copy.txt")
            .with_copy_source_object("src", "dir/my file.txt", Some("v 1"))
            .with_metadata_directive(MetadataDirective::Replace)
            .with_copy_source_if_modified_since(
                Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap(),
            );
        let s3req = req.to_s3request().unwrap();
        assert_eq!(
            s3req.header(X_AMZ_COPY_SOURCE),
            Some("src/dir/my%20file.txt?versionId=v 1")
        );
        assert_eq!(s3req.header(X_AMZ_METADATA_DIRECTIVE), Some("REPLACE"));
        assert_eq!(
            s3req.header(X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE),
            Some("Wed, 21 Oct 2015 07:28:00 GMT")
        );
        assert!(s3req.body().is_none());
    }

    #[test]
    fn test_copy_requires_source() {
        let err = CopyObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .to_s3request()
            .unwrap_err();
        assert_eq!(err.to_string(), "CopyObjectRequest requires CopySource to be set");
    }

    #[test]
    fn test_get_object_query_and_headers() {
        let req = GetObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .with_byte_range(0, 99)
            .with_version_id("v1")
            .with_part_number(2)
            .with_response_content_type("text/plain")
            .with_if_none_match("\"etag\"");
        let s3req = req.to_s3request().unwrap();
        assert_eq!(s3req.method(), &Method::GET);
        assert_eq!(s3req.header(RANGE), Some("bytes=0-99"));
        assert_eq!(s3req.header(IF_NONE_MATCH), Some("\"etag\""));
        assert_eq!(
            s3req.query_params().to_query_string(),
            "partNumber=2&response-content-type=text%2Fplain&versionId=v1"
        );
    }

    #[test]
    fn test_head_object() {
        let s3req = HeadObjectRequest::default()
            .with_bucket("b")
            .with_key("k")
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::HEAD);
        assert!(s3req.query_params().is_empty());
    }

    #[test]
    fn test_restore_object() {
        let req = RestoreObjectRequest::default()
            .with_bucket("b")
            .with_key("archived")
            .with_restore_request(
                RestoreRequest::default()
                    .with_days(1)
                    .with_glacier_job_parameters(
                        GlacierJobParameters::default().with_tier(Tier::Expedited),
                    ),
            );
        let s3req = req.to_s3request().unwrap();
        assert_eq!(s3req.method(), &Method::POST);
        assert_eq!(s3req.query_params().to_query_string(), "restore");
        let body = String::from_utf8(s3req.body().unwrap().to_vec()).unwrap();
        assert!(body.contains("<Tier>Expedited</Tier>"));
        assert!(s3req.header(CONTENT_MD5).is_some());
    }
}
