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

use super::enums::Tier;
use crate::Shape;
use crate::s3::utils::push_xml_opt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GlacierJobParameters {
    tier: Option<Tier>,
}

/// Body of a restore request for an archived object.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreRequest {
    /// Lifetime of the restored copy.
    days: Option<i32>,
    description: Option<String>,
    glacier_job_parameters: Option<GlacierJobParameters>,
}

impl RestoreRequest {
    pub fn to_xml(&self) -> String {
        let mut data =
            String::from("<RestoreRequest xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">");
        push_xml_opt(&mut data, "Days", self.days.as_ref());
        push_xml_opt(&mut data, "Description", self.description.as_ref());
        if let Some(params) = &self.glacier_job_parameters {
            data.push_str("<GlacierJobParameters>");
            push_xml_opt(&mut data, "Tier", params.tier.as_ref());
            data.push_str("</GlacierJobParameters>");
        }
        data.push_str("</RestoreRequest>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_xml() {
        let req = RestoreRequest::default()
            .with_days(2)
            .with_glacier_job_parameters(GlacierJobParameters::default().with_tier(Tier::Bulk));
        assert_eq!(
            req.to_xml(),
            "<RestoreRequest xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><Days>2</Days>\
             <GlacierJobParameters><Tier>Bulk</Tier></GlacierJobParameters></RestoreRequest>"
        );
    }
}
