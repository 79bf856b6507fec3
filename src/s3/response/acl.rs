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

use super::request_charged;
use crate::Shape;
use crate::s3::error::Error;
use crate::s3::types::{
    AccessControlPolicy, FromS3Response, Grant, Owner, RequestCharged, S3Response,
};
use serde::{Deserialize, Serialize};

fn read_policy(resp: &S3Response) -> Result<AccessControlPolicy, Error> {
    Ok(AccessControlPolicy::from_xml(&resp.xml_root()?)?)
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketAclResult {
    owner: Option<Owner>,
    grants: Option<Vec<Grant>>,
}

impl FromS3Response for GetBucketAclResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let policy = read_policy(&resp)?;
        Ok(GetBucketAclResult {
            owner: policy.owner().cloned(),
            grants: policy.grants().cloned(),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectAclResult {
    owner: Option<Owner>,
    grants: Option<Vec<Grant>>,
    request_charged: Option<RequestCharged>,
}

impl FromS3Response for GetObjectAclResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let policy = read_policy(&resp)?;
        Ok(GetObjectAclResult {
            owner: policy.owner().cloned(),
            grants: policy.grants().cloned(),
            request_charged: request_charged(&resp),
        })
    }
}
