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

//! Server-side encryption configuration

use super::enums::ServerSideEncryption;
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{child_elements, get_text_option, parse_text_option, push_xml_opt};
use serde::{Deserialize, Serialize};
use xmltree::Element;

/// Encryption applied to new objects that carry no encryption header of their own.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionByDefault {
    #[shape(name = "SSEAlgorithm")]
    #[serde(rename = "SSEAlgorithm")]
    sse_algorithm: Option<ServerSideEncryption>,
    #[shape(name = "KMSMasterKeyID")]
    #[serde(rename = "KMSMasterKeyID")]
    kms_master_key_id: Option<String>,
}

impl ServerSideEncryptionByDefault {
    pub fn s3() -> ServerSideEncryptionByDefault {
        ServerSideEncryptionByDefault::default().with_sse_algorithm(ServerSideEncryption::Aes256)
    }

    pub fn kms(kms_master_key_id: Option<String>) -> ServerSideEncryptionByDefault {
        ServerSideEncryptionByDefault {
            sse_algorithm: Some(ServerSideEncryption::AwsKms),
            kms_master_key_id,
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionRule {
    apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
    bucket_key_enabled: Option<bool>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionConfiguration {
    rules: Option<Vec<ServerSideEncryptionRule>>,
}

impl ServerSideEncryptionConfiguration {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<ServerSideEncryptionConfiguration>");
        for rule in self.rules.iter().flatten() {
            data.push_str("<Rule>");
            if let Some(v) = &rule.apply_server_side_encryption_by_default {
                data.push_str("<ApplyServerSideEncryptionByDefault>");
                push_xml_opt(&mut data, "SSEAlgorithm", v.sse_algorithm.as_ref());
                push_xml_opt(&mut data, "KMSMasterKeyID", v.kms_master_key_id.as_ref());
                data.push_str("</ApplyServerSideEncryptionByDefault>");
            }
            push_xml_opt(&mut data, "BucketKeyEnabled", rule.bucket_key_enabled.as_ref());
            data.push_str("</Rule>");
        }
        data.push_str("</ServerSideEncryptionConfiguration>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<ServerSideEncryptionConfiguration, ValidationErr> {
        let mut rules = Vec::new();
        for rule in child_elements(root, "Rule") {
            let by_default = rule
                .get_child("ApplyServerSideEncryptionByDefault")
                .map(|v| ServerSideEncryptionByDefault {
                    sse_algorithm: get_text_option(v, "SSEAlgorithm")
                        .map(ServerSideEncryption::from),
                    kms_master_key_id: get_text_option(v, "KMSMasterKeyID"),
                });
            rules.push(ServerSideEncryptionRule {
                apply_server_side_encryption_by_default: by_default,
                bucket_key_enabled: parse_text_option(rule, "BucketKeyEnabled")?,
            });
        }
        Ok(ServerSideEncryptionConfiguration { rules: Some(rules) })
    }
}
