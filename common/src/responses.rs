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

//! Canned service responses

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use s3_model::s3::types::S3Response;

/// Builds an [`S3Response`] the way a transport would hand it over.
#[derive(Clone, Debug)]
pub struct ResponseBuilder {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: u16) -> Self {
        ResponseBuilder {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn ok() -> Self {
        ResponseBuilder::new(200)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes())
            .unwrap_or_else(|e| panic!("bad header name {name}: {e}"));
        let value = HeaderValue::from_str(value)
            .unwrap_or_else(|e| panic!("bad header value {value}: {e}"));
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> S3Response {
        S3Response::new(self.status, self.headers, self.body)
    }
}

/// A service error document with the given status and code.
pub fn error_response(status: u16, code: &str, message: &str) -> S3Response {
    ResponseBuilder::new(status)
        .header("content-type", "application/xml")
        .body(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <Error><Code>{code}</Code><Message>{message}</Message>\
             <RequestId>4442587FB7D0A2F9</RequestId></Error>"
        ))
        .build()
}
