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

use super::enums::BucketLocationConstraint;
use crate::Shape;
use crate::s3::config::DEFAULT_REGION;
use crate::s3::utils::push_xml_opt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBucketConfiguration {
    location_constraint: Option<BucketLocationConstraint>,
}

impl CreateBucketConfiguration {
    /// `None` when no body needs to be sent: no constraint, or `us-east-1`.
    pub fn to_xml(&self) -> Option<String> {
        let location = self
            .location_constraint
            .as_ref()
            .filter(|l| l.as_str() != DEFAULT_REGION && !l.as_str().is_empty())?;
        let mut data = String::from(
            "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
        );
        push_xml_opt(&mut data, "LocationConstraint", Some(location));
        data.push_str("</CreateBucketConfiguration>");
        Some(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_xml() {
        let config = CreateBucketConfiguration::default()
            .with_location_constraint(BucketLocationConstraint::EuWest1);
        assert_eq!(
            config.to_xml().unwrap(),
            "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             <LocationConstraint>eu-west-1</LocationConstraint></CreateBucketConfiguration>"
        );
        let us_east = CreateBucketConfiguration::default().with_location_constraint("us-east-1");
        assert!(us_east.to_xml().is_none());
        assert!(CreateBucketConfiguration::default().to_xml().is_none());
    }
}
