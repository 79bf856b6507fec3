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

//! Core S3 types and trait definitions

// Core infrastructure modules
pub mod enums;
pub mod s3_request;
pub mod traits;

// Nested shapes
pub mod acl;
pub mod bucket;
pub mod cors;
pub mod delete;
pub mod encryption;
pub mod listing;
pub mod multipart;
pub mod object_lock;
pub mod restore;
pub mod website;

pub use s3_request::{S3Request, S3Response};
pub use traits::{FromS3Response, ShapeValue, ToS3Request};

pub use acl::{AccessControlPolicy, Grant, Grantee, Owner};
pub use bucket::CreateBucketConfiguration;
pub use cors::{CorsConfiguration, CorsRule};
pub use delete::{Delete, DeleteError, DeletedObject, ObjectIdentifier};
pub use encryption::{
    ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration, ServerSideEncryptionRule,
};
pub use enums::{
    BucketCannedAcl, BucketLocationConstraint, EncodingType, GranteeType, MetadataDirective,
    ObjectCannedAcl, ObjectLockEnabled, ObjectLockLegalHoldStatus, ObjectLockMode,
    ObjectLockRetentionMode, Permission, Protocol, ReplicationStatus, RequestCharged,
    RequestPayer, ServerSideEncryption, StorageClass, TaggingDirective, Tier,
};
pub use listing::{CommonPrefix, S3Object};
pub use multipart::{CompletedMultipartUpload, CompletedPart};
pub use object_lock::{DefaultRetention, ObjectLockConfiguration, ObjectLockRule};
pub use restore::{GlacierJobParameters, RestoreRequest};
pub use website::{
    Condition, ErrorDocument, IndexDocument, Redirect, RedirectAllRequestsTo, RoutingRule,
    WebsiteConfiguration,
};
