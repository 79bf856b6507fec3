// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Error definitions for S3 marshalling
//!
//! Shapes themselves never fail. Errors only arise when a shape is mapped onto an
//! [`S3Request`](crate::s3::types::S3Request) or parsed from an
//! [`S3Response`](crate::s3::types::S3Response).

use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use std::fmt;
use thiserror::Error;
use xmltree::Element;

/// Problems found while building a request or reading a response.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("{shape} requires {field} to be set")]
    MissingField {
        shape: &'static str,
        field: &'static str,
    },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("invalid date-time value: {0}")]
    InvalidDateTime(#[from] chrono::ParseError),

    #[error("invalid integer value: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),

    #[error("invalid boolean value: {0}")]
    InvalidBoolean(#[from] std::str::ParseBoolError),

    #[error("header value is not visible ASCII: {0}")]
    InvalidHeaderValue(#[from] http::header::ToStrError),

    #[error("invalid base64 value: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidationErr {
    pub(crate) fn xml_error(message: impl Into<String>) -> Self {
        ValidationErr::XmlError(message.into())
    }

    pub(crate) fn missing(shape: &'static str, field: &'static str) -> Self {
        ValidationErr::MissingField { shape, field }
    }
}

/// Error body returned by the service for a failed request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct S3ErrorResponse {
    pub status: u16,
    pub code: String,
    pub message: Option<String>,
    pub resource: Option<String>,
    pub request_id: Option<String>,
    pub host_id: Option<String>,
    pub bucket_name: Option<String>,
    pub object_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn parse(status: u16, body: Bytes) -> Result<S3ErrorResponse, ValidationErr> {
        let root = Element::parse(body.reader())?;
        Ok(S3ErrorResponse {
            status,
            code: get_text_default(&root, "Code"),
            message: get_text_option(&root, "Message"),
            resource: get_text_option(&root, "Resource"),
            request_id: get_text_option(&root, "RequestId"),
            host_id: get_text_option(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }
}

impl fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status: {}, code: {}, message: {:?}, resource: {:?}, request_id: {:?}, host_id: {:?}, bucket_name: {:?}, object_name: {:?}",
            self.status,
            self.code,
            self.message,
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name,
            self.object_name,
        )
    }
}

/// Error returned when a response cannot be turned into a result shape.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error("S3 operation failed; {0}")]
    S3Server(S3ErrorResponse),

    #[error("server failed with HTTP status code {0}")]
    UnexpectedStatus(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_response() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
              <Error><Code>NoSuchKey</Code><Message>The resource you requested does not exist</Message>\
              <Resource>/mybucket/myfoto.jpg</Resource>\
              <RequestId>4442587FB7D0A2F9</RequestId></Error>",
        );
        let resp = S3ErrorResponse::parse(404, body).unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.code, "NoSuchKey");
        assert_eq!(resp.resource.as_deref(), Some("/mybucket/myfoto.jpg"));
        assert_eq!(resp.request_id.as_deref(), Some("4442587FB7D0A2F9"));
        assert!(resp.host_id.is_none());
    }

    #[test]
    fn test_missing_field_message() {
        let err = ValidationErr::missing("GetObjectRequest", "Key");
        assert_eq!(err.to_string(), "GetObjectRequest requires Key to be set");
    }
}
