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

use super::{require, xml_body};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{BucketCannedAcl, CreateBucketConfiguration, S3Request, ToS3Request};
use http::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBucketRequest {
    #[shape(name = "ACL")]
    #[serde(rename = "ACL")]
    acl: Option<BucketCannedAcl>,
    bucket: Option<String>,
    create_bucket_configuration: Option<CreateBucketConfiguration>,
    grant_full_control: Option<String>,
    grant_read: Option<String>,
    #[shape(name = "GrantReadACP")]
    #[serde(rename = "GrantReadACP")]
    grant_read_acp: Option<String>,
    grant_write: Option<String>,
    #[shape(name = "GrantWriteACP")]
    #[serde(rename = "GrantWriteACP")]
    grant_write_acp: Option<String>,
    object_lock_enabled_for_bucket: Option<bool>,
}

impl ToS3Request for CreateBucketRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "CreateBucketRequest", "Bucket")?;

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_ACL, self.acl.as_ref());
        headers.add_opt(X_AMZ_GRANT_FULL_CONTROL, self.grant_full_control.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ, self.grant_read.as_ref());
        headers.add_opt(X_AMZ_GRANT_READ_ACP, self.grant_read_acp.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE, self.grant_write.as_ref());
        headers.add_opt(X_AMZ_GRANT_WRITE_ACP, self.grant_write_acp.as_ref());
        if self.object_lock_enabled_for_bucket == Some(true) {
            headers.add(X_AMZ_BUCKET_OBJECT_LOCK_ENABLED, "true");
        }

        let body = self
            .create_bucket_configuration
            .as_ref()
            .and_then(CreateBucketConfiguration::to_xml)
            .map(|xml| xml_body(&mut headers, xml, false));

        Ok(S3Request::builder()
            .method(Method::PUT)
            .bucket(bucket)
            .headers(headers)
            .body(body)
            .build()
            .logged("CreateBucket"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketLocationRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetBucketLocationRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "GetBucketLocationRequest", "Bucket")?;

        let mut query = Multimap::new();
        query.add_subresource("location");

        Ok(S3Request::builder()
            .method(Method::GET)
            .bucket(bucket)
            .query_params(query)
            .build()
            .logged("GetBucketLocation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::config::S3ClientOptions;
    use crate::s3::types::BucketLocationConstraint;

    #[test]
    fn test_create_bucket_with_location() {
        let s3req = CreateBucketRequest::default()
            .with_bucket("new-bucket")
            .with_acl(BucketCannedAcl::Private)
            .with_object_lock_enabled_for_bucket(true)
            .with_create_bucket_configuration(
                CreateBucketConfiguration::default()
                    .with_location_constraint(BucketLocationConstraint::EuCentral1),
            )
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::PUT);
        assert_eq!(s3req.header(X_AMZ_ACL), Some("private"));
        assert_eq!(s3req.header(X_AMZ_BUCKET_OBJECT_LOCK_ENABLED), Some("true"));
        let body = String::from_utf8(s3req.body().unwrap().to_vec()).unwrap();
        assert!(body.contains("<LocationConstraint>eu-central-1</LocationConstraint>"));
    }

    #[test]
    fn test_create_bucket_us_east_has_no_body() {
        let s3req = CreateBucketRequest::default()
            .with_bucket("new-bucket")
            .with_create_bucket_configuration(
                CreateBucketConfiguration::default().with_location_constraint("us-east-1"),
            )
            .to_s3request()
            .unwrap();
        assert!(s3req.body().is_none());
    }

    #[test]
    fn test_get_bucket_location_is_path_style() {
        let s3req = GetBucketLocationRequest::default()
            .with_bucket("photos")
            .to_s3request()
            .unwrap();
        let options = S3ClientOptions::default();
        assert_eq!(s3req.url(&options), "https://s3.amazonaws.com/photos?location");
    }
}
