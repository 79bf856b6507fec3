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

//! Object lock configuration of a bucket

use super::enums::{ObjectLockEnabled, ObjectLockRetentionMode};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_option, parse_text_option, push_xml_opt};
use serde::{Deserialize, Serialize};
use xmltree::Element;

/// Retention applied to new objects. S3 accepts either `days` or `years`, not both;
/// this is not checked here.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultRetention {
    mode: Option<ObjectLockRetentionMode>,
    days: Option<i32>,
    years: Option<i32>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectLockRule {
    default_retention: Option<DefaultRetention>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectLockConfiguration {
    object_lock_enabled: Option<ObjectLockEnabled>,
    rule: Option<ObjectLockRule>,
}

impl ObjectLockConfiguration {
    pub fn to_xml(&self) -> String {
        let mut data = String::from(
            "<ObjectLockConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
        );
        push_xml_opt(&mut data, "ObjectLockEnabled", self.object_lock_enabled.as_ref());
        if let Some(rule) = &self.rule {
            data.push_str("<Rule>");
            if let Some(retention) = &rule.default_retention {
                data.push_str("<DefaultRetention>");
                push_xml_opt(&mut data, "Mode", retention.mode.as_ref());
                push_xml_opt(&mut data, "Days", retention.days.as_ref());
                push_xml_opt(&mut data, "Years", retention.years.as_ref());
                data.push_str("</DefaultRetention>");
            }
            data.push_str("</Rule>");
        }
        data.push_str("</ObjectLockConfiguration>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<ObjectLockConfiguration, ValidationErr> {
        let rule = match root.get_child("Rule") {
            Some(rule) => {
                let default_retention = match rule.get_child("DefaultRetention") {
                    Some(v) => Some(DefaultRetention {
                        mode: get_text_option(v, "Mode").map(ObjectLockRetentionMode::from),
                        days: parse_text_option(v, "Days")?,
                        years: parse_text_option(v, "Years")?,
                    }),
                    None => None,
                };
                Some(ObjectLockRule { default_retention })
            }
            None => None,
        };
        Ok(ObjectLockConfiguration {
            object_lock_enabled: get_text_option(root, "ObjectLockEnabled")
                .map(ObjectLockEnabled::from),
            rule,
        })
    }
}
