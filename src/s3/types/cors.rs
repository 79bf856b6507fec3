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

//! Cross-origin resource sharing configuration

use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{
    child_elements, get_text_list, get_text_option, parse_text_option, push_xml_opt, push_xml_tag,
};
use serde::{Deserialize, Serialize};
use xmltree::Element;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CorsRule {
    #[shape(name = "ID")]
    #[serde(rename = "ID")]
    id: Option<String>,
    allowed_headers: Option<Vec<String>>,
    /// HTTP methods the origin may use: `GET`, `PUT`, `POST`, `DELETE` or `HEAD`.
    allowed_methods: Option<Vec<String>>,
    allowed_origins: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    max_age_seconds: Option<i32>,
}

fn push_list(data: &mut String, tag: &str, values: Option<&Vec<String>>) {
    for value in values.into_iter().flatten() {
        push_xml_tag(data, tag, value);
    }
}

fn list_option(element: &Element, tag: &str) -> Option<Vec<String>> {
    let values = get_text_list(element, tag);
    if values.is_empty() { None } else { Some(values) }
}

impl CorsRule {
    fn push_xml(&self, data: &mut String) {
        data.push_str("<CORSRule>");
        push_xml_opt(data, "ID", self.id.as_ref());
        push_list(data, "AllowedHeader", self.allowed_headers.as_ref());
        push_list(data, "AllowedMethod", self.allowed_methods.as_ref());
        push_list(data, "AllowedOrigin", self.allowed_origins.as_ref());
        push_list(data, "ExposeHeader", self.expose_headers.as_ref());
        push_xml_opt(data, "MaxAgeSeconds", self.max_age_seconds.as_ref());
        data.push_str("</CORSRule>");
    }

    fn from_xml(element: &Element) -> Result<CorsRule, ValidationErr> {
        Ok(CorsRule {
            id: get_text_option(element, "ID"),
            allowed_headers: list_option(element, "AllowedHeader"),
            allowed_methods: list_option(element, "AllowedMethod"),
            allowed_origins: list_option(element, "AllowedOrigin"),
            expose_headers: list_option(element, "ExposeHeader"),
            max_age_seconds: parse_text_option(element, "MaxAgeSeconds")?,
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct CorsConfiguration {
    #[shape(name = "CORSRules")]
    #[serde(rename = "CORSRules")]
    cors_rules: Option<Vec<CorsRule>>,
}

impl CorsConfiguration {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CORSConfiguration>");
        for rule in self.cors_rules.iter().flatten() {
            rule.push_xml(&mut data);
        }
        data.push_str("</CORSConfiguration>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<CorsConfiguration, ValidationErr> {
        let rules = child_elements(root, "CORSRule")
            .map(CorsRule::from_xml)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CorsConfiguration {
            cors_rules: Some(rules),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_xml() {
        let config = CorsConfiguration::default().with_cors_rules(vec![
            CorsRule::default()
                .with_id("web")
                .with_allowed_methods(vec!["GET".to_string(), "PUT".to_string()])
                .with_allowed_origins(vec!["https://example.com".to_string()])
                .with_max_age_seconds(3000),
        ]);
        let xml = config.to_xml();
        assert_eq!(
            xml,
            "<CORSConfiguration><CORSRule><ID>web</ID>\
             <AllowedMethod>GET</AllowedMethod><AllowedMethod>PUT</AllowedMethod>\
             <AllowedOrigin>https://example.com</AllowedOrigin>\
             <MaxAgeSeconds>3000</MaxAgeSeconds></CORSRule></CORSConfiguration>"
        );

        let root = Element::parse(xml.as_bytes()).unwrap();
        assert_eq!(CorsConfiguration::from_xml(&root).unwrap(), config);
    }

    #[test]
    fn test_bad_max_age() {
        let root = Element::parse(
            "<CORSConfiguration><CORSRule><MaxAgeSeconds>soon</MaxAgeSeconds></CORSRule>\
             </CORSConfiguration>"
                .as_bytes(),
        )
        .unwrap();
        assert!(CorsConfiguration::from_xml(&root).is_err());
    }
}
