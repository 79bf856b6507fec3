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

//! Bucket sub-resource configurations: CORS, object lock, default
//! encryption and static website hosting.

use super::{require, xml_body};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::types::{
    CorsConfiguration, ObjectLockConfiguration, RequestPayer, S3Request,
    ServerSideEncryptionConfiguration, ToS3Request, WebsiteConfiguration,
};
use http::Method;
use serde::{Deserialize, Serialize};

fn get_config(
    bucket: Option<&String>,
    shape: &'static str,
    subresource: &str,
    operation: &str,
) -> Result<S3Request, ValidationErr> {
    let bucket = require(bucket, shape, "Bucket")?;
    let mut query = Multimap::new();
    query.add_subresource(subresource);
    Ok(S3Request::builder()
        .method(Method::GET)
        .bucket(bucket)
        .query_params(query)
        .build()
        .logged(operation))
}

fn put_config(
    bucket: &str,
    subresource: &str,
    mut headers: Multimap,
    xml: String,
    operation: &str,
) -> S3Request {
    let mut query = Multimap::new();
    query.add_subresource(subresource);
    let body = xml_body(&mut headers, xml, true);
    S3Request::builder()
        .method(Method::PUT)
        .bucket(bucket)
        .query_params(query)
        .headers(headers)
        .body(body)
        .build()
        .logged(operation)
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketCorsRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetBucketCorsRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        get_config(self.bucket.as_ref(), "GetBucketCorsRequest", "cors", "GetBucketCors")
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketCorsRequest {
    bucket: Option<String>,
    #[shape(name = "CORSConfiguration")]
    #[serde(rename = "CORSConfiguration")]
    cors_configuration: Option<CorsConfiguration>,
}

impl ToS3Request for PutBucketCorsRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutBucketCorsRequest", "Bucket")?;
        let config = self
            .cors_configuration
            .as_ref()
            .ok_or(ValidationErr::missing("PutBucketCorsRequest", "CORSConfiguration"))?;
        Ok(put_config(bucket, "cors", Multimap::new(), config.to_xml(), "PutBucketCors"))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectLockConfigurationRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetObjectLockConfigurationRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        get_config(
            self.bucket.as_ref(),
            "GetObjectLockConfigurationRequest",
            "object-lock",
            "GetObjectLockConfiguration",
        )
    }
}

/// Enables object lock on an existing bucket or changes its default retention.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutObjectLockConfigurationRequest {
    bucket: Option<String>,
    object_lock_configuration: Option<ObjectLockConfiguration>,
    request_payer: Option<RequestPayer>,
    /// Needed only when enabling object lock on a bucket with versioning.
    token: Option<String>,
}

impl ToS3Request for PutObjectLockConfigurationRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(
            self.bucket.as_ref(),
            "PutObjectLockConfigurationRequest",
            "Bucket",
        )?;
        let config = self.object_lock_configuration.as_ref().ok_or(ValidationErr::missing(
            "PutObjectLockConfigurationRequest",
            "ObjectLockConfiguration",
        ))?;

        let mut headers = Multimap::new();
        headers.add_opt(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref());
        headers.add_opt(X_AMZ_BUCKET_OBJECT_LOCK_TOKEN, self.token.as_ref());

        Ok(put_config(
            bucket,
            "object-lock",
            headers,
            config.to_xml(),
            "PutObjectLockConfiguration",
        ))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketEncryptionRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetBucketEncryptionRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        get_config(
            self.bucket.as_ref(),
            "GetBucketEncryptionRequest",
            "encryption",
            "GetBucketEncryption",
        )
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketEncryptionRequest {
    bucket: Option<String>,
    server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

impl ToS3Request for PutBucketEncryptionRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutBucketEncryptionRequest", "Bucket")?;
        let config = self
            .server_side_encryption_configuration
            .as_ref()
            .ok_or_else(|| {
                ValidationErr::missing(
                    "PutBucketEncryptionRequest",
                    "ServerSideEncryptionConfiguration",
                )
            })?;
        Ok(put_config(
            bucket,
            "encryption",
            Multimap::new(),
            config.to_xml(),
            "PutBucketEncryption",
        ))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketWebsiteRequest {
    bucket: Option<String>,
}

impl ToS3Request for GetBucketWebsiteRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        get_config(
            self.bucket.as_ref(),
            "GetBucketWebsiteRequest",
            "website",
            "GetBucketWebsite",
        )
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketWebsiteRequest {
    bucket: Option<String>,
    website_configuration: Option<WebsiteConfiguration>,
}

impl ToS3Request for PutBucketWebsiteRequest {
    fn to_s3request(&self) -> Result<S3Request, ValidationErr> {
        let bucket = require(self.bucket.as_ref(), "PutBucketWebsiteRequest", "Bucket")?;
        let config = self.website_configuration.as_ref().ok_or(ValidationErr::missing(
            "PutBucketWebsiteRequest",
            "WebsiteConfiguration",
        ))?;
        Ok(put_config(
            bucket,
            "website",
            Multimap::new(),
            config.to_xml(),
            "PutBucketWebsite",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::{
        CorsRule, DefaultRetention, IndexDocument, ObjectLockEnabled, ObjectLockRetentionMode,
        ObjectLockRule, ServerSideEncryptionByDefault, ServerSideEncryptionRule,
    };
    use crate::s3::utils::md5sum_hash;

    #[test]
    fn test_get_config_subresources() {
        let cases = [
            (GetBucketCorsRequest::default().with_bucket("b").to_s3request(), "cors"),
            (
                GetObjectLockConfigurationRequest::default()
                    .with_bucket("b")
                    .to_s3request(),
                "object-lock",
            ),
            (GetBucketEncryptionRequest::default().with_bucket("b").to_s3request(), "encryption"),
            (GetBucketWebsiteRequest::default().with_bucket("b").to_s3request(), "website"),
        ];
        for (s3req, subresource) in cases {
            let s3req = s3req.unwrap();
            assert_eq!(s3req.method(), &Method::GET);
            assert_eq!(s3req.bucket(), Some("b"));
            assert_eq!(s3req.query_params().to_query_string(), subresource);
        }
    }

    #[test]
    fn test_put_cors_body() {
        let config = CorsConfiguration::default().with_cors_rules(vec![
            CorsRule::default()
                .with_allowed_methods(vec!["GET".to_string()])
                .with_allowed_origins(vec!["*".to_string()]),
        ]);
        let s3req = PutBucketCorsRequest::default()
            .with_bucket("b")
            .with_cors_configuration(config.clone())
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.method(), &Method::PUT);
        let expected = md5sum_hash(config.to_xml().as_bytes());
        assert_eq!(s3req.header(CONTENT_MD5), Some(expected.as_str()));
        let body = String::from_utf8(s3req.body().unwrap().to_vec()).unwrap();
        assert!(body.contains("<AllowedOrigin>*</AllowedOrigin>"));
    }

    #[test]
    fn test_put_object_lock_token() {
        let config = ObjectLockConfiguration::default()
            .with_object_lock_enabled(ObjectLockEnabled::Enabled)
            .with_rule(ObjectLockRule::default().with_default_retention(
                DefaultRetention::default()
                    .with_mode(ObjectLockRetentionMode::Governance)
                    .with_days(1),
            ));
        let s3req = PutObjectLockConfigurationRequest::default()
            .with_bucket("b")
            .with_object_lock_configuration(config)
            .with_token("tok")
            .to_s3request()
            .unwrap();
        assert_eq!(s3req.query_params().to_query_string(), "object-lock");
        assert_eq!(s3req.header(X_AMZ_BUCKET_OBJECT_LOCK_TOKEN), Some("tok"));
    }

    #[test]
    fn test_put_encryption_and_website() {
        let encryption = PutBucketEncryptionRequest::default()
            .with_bucket("b")
            .with_server_side_encryption_configuration(
                ServerSideEncryptionConfiguration::default().with_rules(vec![
                    ServerSideEncryptionRule::default()
                        .with_apply_server_side_encryption_by_default(
                            ServerSideEncryptionByDefault::s3(),
                        ),
                ]),
            )
            .to_s3request()
            .unwrap();
        let body = String::from_utf8(encryption.body().unwrap().to_vec()).unwrap();
        assert!(body.contains("<SSEAlgorithm>AES256</SSEAlgorithm>"));

        let website = PutBucketWebsiteRequest::default()
            .with_bucket("b")
            .with_website_configuration(
                WebsiteConfiguration::default()
                    .with_index_document(IndexDocument::default().with_suffix("index.html")),
            )
            .to_s3request()
            .unwrap();
        assert_eq!(website.query_params().to_query_string(), "website");
        assert_eq!(website.header(CONTENT_TYPE), Some("application/xml"));
    }

    #[test]
    fn test_put_requires_configuration() {
        let err = PutBucketWebsiteRequest::default()
            .with_bucket("b")
            .to_s3request()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PutBucketWebsiteRequest requires WebsiteConfiguration to be set"
        );
    }
}
