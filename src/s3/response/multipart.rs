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
use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::types::{FromS3Response, RequestCharged, S3Response, ServerSideEncryption};
use crate::s3::utils::{UtcTime, get_text_option, trim_quotes};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct AbortMultipartUploadResult {
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for AbortMultipartUploadResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        Ok(AbortMultipartUploadResult {
            request_charged: request_charged(&resp),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMultipartUploadResult {
    /// Date after which a lifecycle rule aborts the upload if it is still incomplete.
    abort_date: Option<UtcTime>,
    abort_rule_id: Option<String>,
    bucket: Option<String>,
    key: Option<String>,
    upload_id: Option<String>,
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

impl FromS3Response for CreateMultipartUploadResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = result_root(&resp)?;
        let sse = SseEcho::read(&resp)?;
        Ok(CreateMultipartUploadResult {
            abort_date: resp.header_http_time(X_AMZ_ABORT_DATE)?,
            abort_rule_id: resp.header_str(X_AMZ_ABORT_RULE_ID),
            bucket: get_text_option(&root, "Bucket"),
            key: get_text_option(&root, "Key"),
            upload_id: get_text_option(&root, "UploadId"),
            server_side_encryption: sse.server_side_encryption,
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
pub struct UploadPartResult {
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
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

impl FromS3Response for UploadPartResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let sse = SseEcho::read(&resp)?;
        Ok(UploadPartResult {
            etag: resp.etag(),
            server_side_encryption: sse.server_side_encryption,
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
pub struct CompleteMultipartUploadResult {
    location: Option<String>,
    bucket: Option<String>,
    key: Option<String>,
    #[shape(name = "ETag")]
    #[serde(rename = "ETag")]
    etag: Option<String>,
    expiration: Option<String>,
    version_id: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    #[shape(name = "SSEKMSKeyId")]
    #[serde(rename = "SSEKMSKeyId")]
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for CompleteMultipartUploadResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = result_root(&resp)?;
        let sse = SseEcho::read(&resp)?;
        Ok(CompleteMultipartUploadResult {
            location: get_text_option(&root, "Location"),
            bucket: get_text_option(&root, "Bucket"),
            key: get_text_option(&root, "Key"),
            etag: get_text_option(&root, "ETag").map(|v| trim_quotes(&v)),
            expiration: resp.header_str(X_AMZ_EXPIRATION),
            version_id: resp.header_str(X_AMZ_VERSION_ID),
            server_side_encryption: sse.server_side_encryption,
            sse_kms_key_id: sse.sse_kms_key_id,
            bucket_key_enabled: sse.bucket_key_enabled,
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
    fn test_create_multipart_upload_result() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_AMZ_ABORT_DATE,
            HeaderValue::from_static("Wed, 28 Oct 2026 00:00:00 GMT"),
        );
        headers.insert(X_AMZ_ABORT_RULE_ID, HeaderValue::from_static("abort-7d"));
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
              <InitiateMultipartUploadResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
              <Bucket>b</Bucket><Key>big.bin</Key><UploadId>VXBsb2FkIElE</UploadId>\
              </InitiateMultipartUploadResult>",
        );
        let result =
            CreateMultipartUploadResult::from_s3response(S3Response::new(200, headers, body))
                .unwrap();
        assert_eq!(result.upload_id().map(String::as_str), Some("VXBsb2FkIElE"));
        assert_eq!(result.key().map(String::as_str), Some("big.bin"));
        assert_eq!(result.abort_rule_id().map(String::as_str), Some("abort-7d"));
        assert!(result.abort_date().is_some());
    }

    #[test]
    fn test_complete_multipart_upload_result() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_VERSION_ID, HeaderValue::from_static("v9"));
        let body = Bytes::from_static(
            b"<CompleteMultipartUploadResult><Location>https://b.s3.amazonaws.com/big.bin</Location>\
              <Bucket>b</Bucket><Key>big.bin</Key><ETag>\"3858f62230ac3c915f300c664312c11f-9\"</ETag>\
              </CompleteMultipartUploadResult>",
        );
        let result =
            CompleteMultipartUploadResult::from_s3response(S3Response::new(200, headers, body))
                .unwrap();
        assert_eq!(
            result.etag().map(String::as_str),
            Some("3858f62230ac3c915f300c664312c11f-9")
        );
        assert_eq!(result.version_id().map(String::as_str), Some("v9"));
    }

    #[test]
    fn test_complete_multipart_upload_error_in_ok_response() {
        let body = Bytes::from_static(
            b"<Error><Code>InvalidPart</Code>\
              <Message>One or more of the specified parts could not be found.</Message></Error>",
        );
        let err = CompleteMultipartUploadResult::from_s3response(S3Response::new(
            200,
            HeaderMap::new(),
            body,
        ))
        .unwrap_err();
        assert!(matches!(err, Error::S3Server(ref e) if e.code == "InvalidPart"));
    }

    #[test]
    fn test_upload_part_and_abort() {
        let mut headers = HeaderMap::new();
        headers.insert("etag", HeaderValue::from_static("\"part-1\""));
        headers.insert(X_AMZ_REQUEST_CHARGED, HeaderValue::from_static("requester"));
        let resp = S3Response::new(200, headers, Bytes::new());
        let part = UploadPartResult::from_s3response(resp.clone()).unwrap();
        assert_eq!(part.etag().map(String::as_str), Some("part-1"));
        let abort = AbortMultipartUploadResult::from_s3response(resp).unwrap();
        assert_eq!(abort.to_string(), "{RequestCharged: requester}");
    }
}
