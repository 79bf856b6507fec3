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

//! # S3 model (`s3-model`)
//!
//! Typed request and response shapes for Amazon S3 compatible object storage.
//!
//! Every operation has a request shape (e.g. [`s3::request::PutObjectRequest`],
//! [`s3::request::DeleteObjectRequest`]) and, where the service returns data, a result
//! shape (e.g. [`s3::response::HeadObjectResult`]). Shapes are plain values: every field is
//! optional, equality is structural and nothing is validated at construction time.
//!
//! ## Basic Usage
//!
//! ```
//! use s3_model::s3::request::DeleteObjectRequest;
//!
//! let a = DeleteObjectRequest::default().with_bucket("b").with_key("k");
//! let mut b = DeleteObjectRequest::default().with_key("k").with_bucket("b");
//! assert_eq!(a, b);
//!
//! b.set_version_id(Some("v1".to_string()));
//! assert_ne!(a, b);
//! assert_eq!(b.to_string(), "{Bucket: b, Key: k, VersionId: v1}");
//! ```
//!
//! ## Marshalling
//!
//! Request shapes implement [`s3::types::ToS3Request`], which maps them onto an
//! I/O-free [`s3::types::S3Request`] (method, path, query, headers, body). Result shapes
//! implement [`s3::types::FromS3Response`], which parses a raw [`s3::types::S3Response`].
//! Sending the request is left to the caller's HTTP stack.
//!
//! ```
//! use s3_model::s3::request::GetObjectRequest;
//! use s3_model::s3::types::ToS3Request;
//!
//! let req = GetObjectRequest::default()
//!     .with_bucket("photos")
//!     .with_key("2024/cat.jpg")
//!     .with_range("bytes=0-1023");
//! let s3req = req.to_s3request().unwrap();
//! assert_eq!(s3req.method(), &http::Method::GET);
//! ```

#![allow(clippy::result_large_err)]

extern crate self as s3_model;

pub mod s3;

pub use s3_model_macros::Shape;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
