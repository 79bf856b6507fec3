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

use crate::Shape;
use crate::s3::error::Error;
use crate::s3::types::{
    CorsConfiguration, CorsRule, ErrorDocument, FromS3Response, IndexDocument,
    ObjectLockConfiguration, RedirectAllRequestsTo, RoutingRule, S3Response,
    ServerSideEncryptionConfiguration, WebsiteConfiguration,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketCorsResult {
    #[shape(name = "CORSRules")]
    #[serde(rename = "CORSRules")]
    cors_rules: Option<Vec<CorsRule>>,
}

impl FromS3Response for GetBucketCorsResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let config = CorsConfiguration::from_xml(&resp.xml_root()?)?;
        Ok(GetBucketCorsResult {
            cors_rules: config.cors_rules().cloned(),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectLockConfigurationResult {
    object_lock_configuration: Option<ObjectLockConfiguration>,
}

impl FromS3Response for GetObjectLockConfigurationResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let config = ObjectLockConfiguration::from_xml(&resp.xml_root()?)?;
        Ok(GetObjectLockConfigurationResult {
            object_lock_configuration: Some(config),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketEncryptionResult {
    server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

impl FromS3Response for GetBucketEncryptionResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let config = ServerSideEncryptionConfiguration::from_xml(&resp.xml_root()?)?;
        Ok(GetBucketEncryptionResult {
            server_side_encryption_configuration: Some(config),
        })
    }
}

/// Website configuration flattened into the result, as the service returns it.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketWebsiteResult {
    redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    index_document: Option<IndexDocument>,
    error_document: Option<ErrorDocument>,
    routing_rules: Option<Vec<RoutingRule>>,
}

impl FromS3Response for GetBucketWebsiteResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let config = WebsiteConfiguration::from_xml(&resp.xml_root()?)?;
        Ok(GetBucketWebsiteResult {
            redirect_all_requests_to: config.redirect_all_requests_to().cloned(),
            index_document: config.index_document().cloned(),
            error_document: config.error_document().cloned(),
            routing_rules: config.routing_rules().cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::{ObjectLockEnabled, ObjectLockRetentionMode, ServerSideEncryption};
    use bytes::Bytes;
    use http::HeaderMap;

    fn ok(xml: &'static str) -> S3Response {
        S3Response::new(200, HeaderMap::new(), Bytes::from_static(xml.as_bytes()))
    }

    #[test]
    fn test_get_bucket_cors_result() {
        let result = GetBucketCorsResult::from_s3response(ok(
            "<CORSConfiguration><CORSRule><AllowedMethod>PUT</AllowedMethod>\
             <AllowedMethod>POST</AllowedMethod><AllowedOrigin>http://www.example.com</AllowedOrigin>\
             <MaxAgeSeconds>3000</MaxAgeSeconds></CORSRule></CORSConfiguration>",
        ))
        .unwrap();
        let rule = &result.cors_rules().unwrap()[0];
        assert_eq!(rule.allowed_methods().map(Vec::len), Some(2));
        assert_eq!(rule.max_age_seconds(), Some(&3000));
        assert!(rule.expose_headers().is_none());
    }

    #[test]
    fn test_get_object_lock_configuration_result() {
        let result = GetObjectLockConfigurationResult::from_s3response(ok(
            "<ObjectLockConfiguration><ObjectLockEnabled>Enabled</ObjectLockEnabled>\
             <Rule><DefaultRetention><Mode>COMPLIANCE</Mode><Years>1</Years></DefaultRetention></Rule>\
             </ObjectLockConfiguration>",
        ))
        .unwrap();
        let config = result.object_lock_configuration().unwrap();
        assert_eq!(config.object_lock_enabled(), Some(&ObjectLockEnabled::Enabled));
        let retention = config.rule().and_then(|r| r.default_retention()).unwrap();
        assert_eq!(retention.mode(), Some(&ObjectLockRetentionMode::Compliance));
        assert_eq!(retention.years(), Some(&1));
    }

    #[test]
    fn test_get_bucket_encryption_result() {
        let result = GetBucketEncryptionResult::from_s3response(ok(
            "<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
             <SSEAlgorithm>AES256</SSEAlgorithm></ApplyServerSideEncryptionByDefault></Rule>\
             </ServerSideEncryptionConfiguration>",
        ))
        .unwrap();
        let rules = result
            .server_side_encryption_configuration()
            .and_then(|c| c.rules())
            .unwrap();
        let by_default = rules[0].apply_server_side_encryption_by_default().unwrap();
        assert_eq!(by_default.sse_algorithm(), Some(&ServerSideEncryption::Aes256));
    }

    #[test]
    fn test_get_bucket_website_result() {
        let result = GetBucketWebsiteResult::from_s3response(ok(
            "<WebsiteConfiguration><IndexDocument><Suffix>index.html</Suffix></IndexDocument>\
             <ErrorDocument><Key>404.html</Key></ErrorDocument></WebsiteConfiguration>",
        ))
        .unwrap();
        assert_eq!(
            result.to_string(),
            "{IndexDocument: {Suffix: index.html}, ErrorDocument: {Key: 404.html}}"
        );
        assert!(result.redirect_all_requests_to().is_none());
    }

    #[test]
    fn test_missing_configuration_is_server_error() {
        let resp = S3Response::new(
            404,
            HeaderMap::new(),
            Bytes::from_static(
                b"<Error><Code>NoSuchCORSConfiguration</Code>\
                  <Message>The CORS configuration does not exist</Message></Error>",
            ),
        );
        match GetBucketCorsResult::from_s3response(resp) {
            Err(Error::S3Server(e)) => assert_eq!(e.code, "NoSuchCORSConfiguration"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
