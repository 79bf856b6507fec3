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
use crate::s3::config::DEFAULT_REGION;
use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::types::{BucketLocationConstraint, FromS3Response, S3Response};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBucketResult {
    location: Option<String>,
}

impl FromS3Response for CreateBucketResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        Ok(CreateBucketResult {
            location: resp.header_str(LOCATION),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct GetBucketLocationResult {
    location_constraint: Option<BucketLocationConstraint>,
}

impl FromS3Response for GetBucketLocationResult {
    fn from_s3response(resp: S3Response) -> Result<Self, Error> {
        let resp = resp.check_status()?;
        let root = resp.xml_root()?;
        // buckets in us-east-1 report an empty constraint
        let text = root.get_text().unwrap_or_default().trim().to_string();
        let location = if text.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            text
        };
        Ok(GetBucketLocationResult {
            location_constraint: Some(BucketLocationConstraint::from(location)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue};

    fn location(xml: &'static str) -> GetBucketLocationResult {
        let resp = S3Response::new(200, HeaderMap::new(), Bytes::from_static(xml.as_bytes()));
        GetBucketLocationResult::from_s3response(resp).unwrap()
    }

    #[test]
    fn test_get_bucket_location() {
        let result = location(
            "<LocationConstraint xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             eu-west-1</LocationConstraint>",
        );
        assert_eq!(result.location_constraint(), Some(&BucketLocationConstraint::EuWest1));
    }

    #[test]
    fn test_empty_location_is_us_east_1() {
        let result = location("<LocationConstraint/>");
        assert_eq!(
            result.location_constraint().map(BucketLocationConstraint::as_str),
            Some("us-east-1")
        );
    }

    #[test]
    fn test_create_bucket_result() {
        let mut headers = HeaderMap::new();
        headers.insert("location", HeaderValue::from_static("/new-bucket"));
        let result =
            CreateBucketResult::from_s3response(S3Response::new(200, headers, Bytes::new()))
                .unwrap();
        assert_eq!(result.to_string(), "{Location: /new-bucket}");
    }
}
