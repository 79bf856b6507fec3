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

use super::{SseEcho, request_charged, result_root};
use crate::Shape;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::types::{
    FromS3Response, ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus,
    RequestCharged, S3Response, ServerSideEncryption, StorageClass,
};
use crate::s3::utils::{StringMap, UtcTime, get_text_option, get_time_option, trim_quotes};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutObjectResult {
    expiration: Option<String>,
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    version_id: Option<String>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for PutObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let sse = SseEcho::read(&resp)?;
        Ok(PutObjectResult {
            expiration: resp.header_str(X_AMZ_EXPIRATION),
            etag: resp.etag(),
            server_side_encryption: sse.server_side_encryption,
            version_id: resp.header_str(X_AMZ_VERSION_ID),
            sse_customer_algorithm: sse.sse_customer_algorithm,
            sse_customer_key_md5: sse.sse_customer_key_md5,
            sse_kms_key_id: sse.sse_kms_key_id,
            bucket_key_enabled: sse.bucket_key_enabled,
            request_charged: request_charged(&resp),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CopyObjectResult {
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    last_modified: Option<UtcTime>,
    expiration: Option<String>,
    copy_source_version_id: Option<String>,
    version_id: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for CopyObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = result_root(&resp)?;
        let sse = SseEcho::read(&resp)?;
        Ok(CopyObjectResult {
            etag: get_text_option(&root, "ETag").map(|v| trim_quotes(&v)),
            last_modified: get_time_option(&root, "LastModified")?,
            expiration: resp.header_str(X_AMZ_EXPIRATION),
            copy_source_version_id: resp.header_str(X_AMZ_COPY_SOURCE_VERSION_ID),
            version_id: resp.header_str(X_AMZ_VERSION_ID),
            server_side_encryption: sse.server_side_encryption,
            sse_customer_algorithm: sse.sse_customer_algorithm,
            sse_customer_key_md5: sse.sse_customer_key_md5,
            sse_kms_key_id: sse.sse_kms_key_id,
            bucket_key_enabled: sse.bucket_key_enabled,
            request_charged: request_charged(&resp),
        })
    }
}

/// Object metadata, as returned by a HEAD request.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct HeadObjectResult {
    delete_marker: Option<bool>,
    accept_ranges: Option<String>,
    expiration: Option<String>,
    /// Archive restore state, e.g. `ongoing-request="false", expiry-date="..."`.
    restore: Option<String>,
    last_modified: Option<UtcTime>,
    content_length: Option<i64>,
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    /// Count of metadata entries that could not be sent as HTTP headers.
    missing_meta: Option<i32>,
    version_id: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    expires: Option<UtcTime>,
    website_redirect_location: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    metadata: Option<StringMap>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
    storage_class: Option<StorageClass>,
    request_charged: Option<RequestCharged>,
    replication_status: Option<ReplicationStatus>,
    parts_count: Option<i32>,
    object_lock_mode: Option<ObjectLockMode>,
    object_lock_retain_until_date: Option<UtcTime>,
    object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl HeadObjectResult {
    fn from_headers(resp: &S3Response) -> Result<HeadObjectResult, ValidationErr> {
        let sse = SseEcho::read(resp)?;
        Ok(HeadObjectResult {
            delete_marker: resp.header_parse(X_AMZ_DELETE_MARKER)?,
            accept_ranges: resp.header_str(ACCEPT_RANGES),
            expiration: resp.header_str(X_AMZ_EXPIRATION),
            restore: resp.header_str(X_AMZ_RESTORE),
            last_modified: resp.header_http_time(LAST_MODIFIED)?,
            content_length: resp.header_parse(CONTENT_LENGTH)?,
            etag: resp.etag(),
            missing_meta: resp.header_parse(X_AMZ_MISSING_META)?,
            version_id: resp.header_str(X_AMZ_VERSION_ID),
            cache_control: resp.header_str(CACHE_CONTROL),
            content_disposition: resp.header_str(CONTENT_DISPOSITION),
            content_encoding: resp.header_str(CONTENT_ENCODING),
            content_language: resp.header_str(CONTENT_LANGUAGE),
            content_type: resp.header_str(CONTENT_TYPE),
            expires: lenient_http_time(resp, EXPIRES),
            website_redirect_location: resp.header_str(X_AMZ_WEBSITE_REDIRECT_LOCATION),
            server_side_encryption: sse.server_side_encryption,
            metadata: resp.metadata(),
            sse_customer_algorithm: sse.sse_customer_algorithm,
            sse_customer_key_md5: sse.sse_customer_key_md5,
            sse_kms_key_id: sse.sse_kms_key_id,
            bucket_key_enabled: sse.bucket_key_enabled,
            storage_class: resp.header_str(X_AMZ_STORAGE_CLASS).map(StorageClass::from),
            request_charged: request_charged(resp),
            replication_status: resp
                .header_str(X_AMZ_REPLICATION_STATUS)
                .map(ReplicationStatus::from),
            parts_count: resp.header_parse(X_AMZ_MP_PARTS_COUNT)?,
            object_lock_mode: resp.header_str(X_AMZ_OBJECT_LOCK_MODE).map(ObjectLockMode::from),
            object_lock_retain_until_date: resp
                .header_iso_time(X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE)?,
            object_lock_legal_hold_status: resp
                .header_str(X_AMZ_OBJECT_LOCK_LEGAL_HOLD)
                .map(ObjectLockLegalHoldStatus::from),
        })
    }
}

/// `Expires` is user supplied and often not a valid date; such values are dropped.
fn lenient_http_time(resp: &S3Response, name: &str) -> Option<UtcTime> {
    match resp.header_http_time(name) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("ignoring {name} header: {e}");
            None
        }
    }
}

impl FromS3Response for HeadObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        Ok(HeadObjectResult::from_headers(&resp)?)
    }
}

/// Object metadata plus the content stream, fully buffered.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectResult {
    #[serde(skip)]
    body: Option<Bytes>,
    delete_marker: Option<bool>,
    accept_ranges: Option<String>,
    expiration: Option<String>,
    restore: Option<String>,
    last_modified: Option<UtcTime>,
    content_length: Option<i64>,
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    missing_meta: Option<i32>,
    version_id: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_range: Option<String>,
    content_type: Option<String>,
    expires: Option<UtcTime>,
    website_redirect_location: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    metadata: Option<StringMap>,
    #[shape(name = "SSECustomerAlgorithm")]
    #[serde(rename = "SSECustomerAlgorithm")]
    sse_customer_algorithm: Option<String>,
    #[shape(name = "SSECustomerKeyMD5")]
    #[serde(rename = "SSECustomerKeyMD5")]
    sse_customer_key_md5: Option<String>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
    storage_class: Option<StorageClass>,
    request_charged: Option<RequestCharged>,
    replication_status: Option<ReplicationStatus>,
    parts_count: Option<i32>,
    tag_count: Option<i32>,
    object_lock_mode: Option<ObjectLockMode>,
    object_lock_retain_until_date: Option<UtcTime>,
    object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

impl FromS3Response for GetObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let head = HeadObjectResult::from_headers(&resp)?;
        Ok(GetObjectResult {
            content_range: resp.header_str(CONTENT_RANGE),
            tag_count: resp.header_parse(X_AMZ_TAGGING_COUNT)?,
            delete_marker: head.delete_marker,
            accept_ranges: head.accept_ranges,
            expiration: head.expiration,
            restore: head.restore,
            last_modified: head.last_modified,
            content_length: head.content_length,
            etag: head.etag,
            missing_meta: head.missing_meta,
            version_id: head.version_id,
            cache_control: head.cache_control,
            content_disposition: head.content_disposition,
            content_encoding: head.content_encoding,
            content_language: head.content_language,
            content_type: head.content_type,
            expires: head.expires,
            website_redirect_location: head.website_redirect_location,
            server_side_encryption: head.server_side_encryption,
            metadata: head.metadata,
            sse_customer_algorithm: head.sse_customer_algorithm,
            sse_customer_key_md5: head.sse_customer_key_md5,
            sse_kms_key_id: head.sse_kms_key_id,
            bucket_key_enabled: head.bucket_key_enabled,
            storage_class: head.storage_class,
            request_charged: head.request_charged,
            replication_status: head.replication_status,
            parts_count: head.parts_count,
            object_lock_mode: head.object_lock_mode,
            object_lock_retain_until_date: head.object_lock_retain_until_date,
            object_lock_legal_hold_status: head.object_lock_legal_hold_status,
            body: Some(resp.body),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreObjectResult {
    request_charged: Option<RequestCharged>,
    restore_output_path: Option<String>,
}

impl FromS3Response for RestoreObjectResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        Ok(RestoreObjectResult {
            request_charged: request_charged(&resp),
            restore_output_path: resp.header_str(X_AMZ_RESTORE_OUTPUT_PATH),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    fn response(pairs: &[(&'static str, &'static str)], body: &'static [u8]) -> S3Response {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(value));
        }
        S3Response::new(200, headers, Bytes::from_static(body))
    }

    #[test]
    fn test_put_object_result() {
        let resp = response(
            &[
                ("etag", "\"d41d8cd98f00b204e9800998ecf8427e\""),
                ("x-amz-version-id", "v3"),
                ("x-amz-server-side-encryption", "aws:kms"),
                ("x-amz-server-side-encryption-aws-kms-key-id", "key-1"),
            ],
            b"",
        );
        let result = PutObjectResult::from_s3response(resp).unwrap();
        assert_eq!(result.etag().map(String::as_str), Some("d41d8cd98f00b204e9800998ecf8427e"));
        assert_eq!(result.version_id().map(String::as_str), Some("v3"));
        assert_eq!(result.server_side_encryption(), Some(&ServerSideEncryption::AwsKms));
        assert!(result.to_string().contains("SSEKMSKeyId: key-1"));
        assert!(result.request_charged().is_none());
    }

    #[test]
    fn test_head_object_result() {
        let resp = response(
            &[
                ("content-length", "11"),
                ("content-type", "text/plain"),
                ("last-modified", "Wed, 21 Oct 2015 07:28:00 GMT"),
                ("expires", "0"),
                ("x-amz-meta-owner", "alice"),
                ("x-amz-storage-class", "GLACIER"),
                ("x-amz-mp-parts-count", "3"),
                ("x-amz-object-lock-retain-until-date", "2030-01-01T00:00:00.000Z"),
            ],
            b"",
        );
        let result = HeadObjectResult::from_s3response(resp).unwrap();
        assert_eq!(result.content_length(), Some(&11));
        assert_eq!(result.storage_class(), Some(&StorageClass::Glacier));
        assert_eq!(result.parts_count(), Some(&3));
        assert!(result.last_modified().is_some());
        assert!(result.expires().is_none());
        assert!(result.object_lock_retain_until_date().is_some());
        assert_eq!(result.metadata().unwrap()["owner"], "alice");
    }

    #[test]
    fn test_get_object_result_keeps_body() {
        let resp = response(
            &[("content-range", "bytes 0-4/11"), ("x-amz-tagging-count", "2")],
            b"hello",
        );
        let result = GetObjectResult::from_s3response(resp).unwrap();
        assert_eq!(result.body().map(|b| b.as_ref()), Some(&b"hello"[..]));
        assert_eq!(result.content_range().map(String::as_str), Some("bytes 0-4/11"));
        assert_eq!(result.tag_count(), Some(&2));
        assert!(result.to_string().contains("Body: Bytes(len=5)"));
    }

    #[test]
    fn test_copy_object_result() {
        let resp = response(
            &[("x-amz-copy-source-version-id", "src-v")],
            b"<CopyObjectResult><LastModified>2024-03-01T10:00:00.000Z</LastModified>\
              <ETag>&quot;9b2cf535f27731c974343645a3985328&quot;</ETag></CopyObjectResult>",
        );
        let result = CopyObjectResult::from_s3response(resp).unwrap();
        assert_eq!(
            result.etag().map(String::as_str),
            Some("9b2cf535f27731c974343645a3985328")
        );
        assert_eq!(result.copy_source_version_id().map(String::as_str), Some("src-v"));
        assert!(result.last_modified().is_some());
    }

    #[test]
    fn test_bad_content_length() {
        let resp = response(&[("content-length", "eleven")], b"");
        assert!(matches!(
            HeadObjectResult::from_s3response(resp),
            Err(Error::Validation(ValidationErr::InvalidInteger(_)))
        ));
    }

    #[test]
    fn test_restore_object_result() {
        let resp = response(
            &[("x-amz-request-charged", "requester"), ("x-amz-restore-output-path", "out/")],
            b"",
        );
        let result = RestoreObjectResult::from_s3response(resp).unwrap();
        assert_eq!(result.request_charged(), Some(&RequestCharged::Requester));
        assert_eq!(result.restore_output_path().map(String::as_str), Some("out/"));
    }
}
