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

//! Result shapes, one per S3 operation, read from an [`S3Response`]

mod acl;
mod bucket;
mod bucket_config;
mod delete;
mod list;
mod multipart;
mod object;

pub use acl::{GetBucketAclResult, GetObjectAclResult};
pub use bucket::{CreateBucketResult, GetBucketLocationResult};
pub use bucket_config::{
    GetBucketCorsResult, GetBucketEncryptionResult, GetBucketWebsiteResult,
    GetObjectLockConfigurationResult,
};
pub use delete::{DeleteObjectResult, DeleteObjectsResult};
pub use list::{ListObjectsResult, ListObjectsV2Result};
pub use multipart::{
    AbortMultipartUploadResult, CompleteMultipartUploadResult, CreateMultipartUploadResult,
    UploadPartResult,
};
pub use object::{
    CopyObjectResult, GetObjectResult, HeadObjectResult, PutObjectResult, RestoreObjectResult,
};

use crate::s3::error::{Error, S3ErrorResponse, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::types::{RequestCharged, S3Response, ServerSideEncryption};
use xmltree::Element;

pub(crate) fn request_charged(resp: &S3Response) -> Option<RequestCharged> {
    resp.header_str(X_AMZ_REQUEST_CHARGED).map(RequestCharged::from)
}

/// Parses a success body. Copy and complete-multipart-upload may answer
/// 200 with an `<Error>` document, which is reported as a server error.
pub(crate) fn result_root(resp: &S3Response) -> Result<Element, Error> {
    let root = resp.xml_root()?;
    if root.name == "Error" {
        let err = S3ErrorResponse::parse(resp.status, resp.body.clone())?;
        return Err(Error::S3Server(err));
    }
    Ok(root)
}

/// Encryption headers echoed back by object reads and writes.
pub(crate) struct SseEcho {
    pub server_side_encryption: Option<ServerSideEncryption>,
    pub sse_customer_algorithm: Option<String>,
    pub sse_customer_key_md5: Option<String>,
    pub sse_kms_key_id: Option<String>,
    pub bucket_key_enabled: Option<bool>,
}

impl SseEcho {
    pub(crate) fn read(resp: &S3Response) -> Result<SseEcho, ValidationErr> {
        Ok(SseEcho {
            server_side_encryption: resp
                .header_str(X_AMZ_SERVER_SIDE_ENCRYPTION)
                .map(ServerSideEncryption::from),
            sse_customer_algorithm: resp
                .header_str(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM),
            sse_customer_key_md5: resp.header_str(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5),
            sse_kms_key_id: resp.header_str(X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID),
            bucket_key_enabled: resp.header_parse(X_AMZ_SERVER_SIDE_ENCRYPTION_BUCKET_KEY_ENABLED)?,
        })
    }
}
