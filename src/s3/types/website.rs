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

//! Static website hosting and redirect rules

use super::enums::Protocol;
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{child_elements, get_text_option, push_xml_opt};
use serde::{Deserialize, Serialize};
use xmltree::Element;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDocument {
    key: Option<String>,
}

/// Suffix appended to requests for a directory, e.g. `index.html`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct IndexDocument {
    suffix: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct RedirectAllRequestsTo {
    host_name: Option<String>,
    protocol: Option<Protocol>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    http_error_code_returned_equals: Option<String>,
    key_prefix_equals: Option<String>,
}

/// Where a matching request is redirected. `replace_key_prefix_with` and
/// `replace_key_with` are mutually exclusive on the service side.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Redirect {
    host_name: Option<String>,
    http_redirect_code: Option<String>,
    protocol: Option<Protocol>,
    replace_key_prefix_with: Option<String>,
    replace_key_with: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingRule {
    condition: Option<Condition>,
    redirect: Option<Redirect>,
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct WebsiteConfiguration {
    error_document: Option<ErrorDocument>,
    index_document: Option<IndexDocument>,
    redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    routing_rules: Option<Vec<RoutingRule>>,
}

impl RoutingRule {
    fn push_xml(&self, data: &mut String) {
        data.push_str("<RoutingRule>");
        if let Some(c) = &self.condition {
            data.push_str("<Condition>");
            push_xml_opt(
                data,
                "HttpErrorCodeReturnedEquals",
                c.http_error_code_returned_equals.as_ref(),
            );
            push_xml_opt(data, "KeyPrefixEquals", c.key_prefix_equals.as_ref());
            data.push_str("</Condition>");
        }
        if let Some(r) = &self.redirect {
            data.push_str("<Redirect>");
            push_xml_opt(data, "HostName", r.host_name.as_ref());
            push_xml_opt(data, "HttpRedirectCode", r.http_redirect_code.as_ref());
            push_xml_opt(data, "Protocol", r.protocol.as_ref());
            push_xml_opt(data, "ReplaceKeyPrefixWith", r.replace_key_prefix_with.as_ref());
            push_xml_opt(data, "ReplaceKeyWith", r.replace_key_with.as_ref());
            data.push_str("</Redirect>");
        }
        data.push_str("</RoutingRule>");
    }

    fn from_xml(element: &Element) -> RoutingRule {
        RoutingRule {
            condition: element.get_child("Condition").map(|c| Condition {
                http_error_code_returned_equals: get_text_option(c, "HttpErrorCodeReturnedEquals"),
                key_prefix_equals: get_text_option(c, "KeyPrefixEquals"),
            }),
            redirect: element.get_child("Redirect").map(|r| Redirect {
                host_name: get_text_option(r, "HostName"),
                http_redirect_code: get_text_option(r, "HttpRedirectCode"),
                protocol: get_text_option(r, "Protocol").map(Protocol::from),
                replace_key_prefix_with: get_text_option(r, "ReplaceKeyPrefixWith"),
                replace_key_with: get_text_option(r, "ReplaceKeyWith"),
            }),
        }
    }
}

impl WebsiteConfiguration {
    pub fn to_xml(&self) -> String {
        let mut data = String::from(
            "<WebsiteConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
        );
        if let Some(v) = &self.error_document {
            data.push_str("<ErrorDocument>");
            push_xml_opt(&mut data, "Key", v.key.as_ref());
            data.push_str("</ErrorDocument>");
        }
        if let Some(v) = &self.index_document {
            data.push_str("<IndexDocument>");
            push_xml_opt(&mut data, "Suffix", v.suffix.as_ref());
            data.push_str("</IndexDocument>");
        }
        if let Some(v) = &self.redirect_all_requests_to {
            data.push_str("<RedirectAllRequestsTo>");
            push_xml_opt(&mut data, "HostName", v.host_name.as_ref());
            push_xml_opt(&mut data, "Protocol", v.protocol.as_ref());
            data.push_str("</RedirectAllRequestsTo>");
        }
        if let Some(rules) = &self.routing_rules {
            data.push_str("<RoutingRules>");
            for rule in rules {
                rule.push_xml(&mut data);
            }
            data.push_str("</RoutingRules>");
        }
        data.push_str("</WebsiteConfiguration>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<WebsiteConfiguration, ValidationErr> {
        if root.name != "WebsiteConfiguration" {
            return Err(ValidationErr::xml_error(format!(
                "expected <WebsiteConfiguration>, found <{}>",
                root.name
            )));
        }
        Ok(WebsiteConfiguration {
            error_document: root.get_child("ErrorDocument").map(|v| ErrorDocument {
                key: get_text_option(v, "Key"),
            }),
            index_document: root.get_child("IndexDocument").map(|v| IndexDocument {
                suffix: get_text_option(v, "Suffix"),
            }),
            redirect_all_requests_to: root.get_child("RedirectAllRequestsTo").map(|v| {
                RedirectAllRequestsTo {
                    host_name: get_text_option(v, "HostName"),
                    protocol: get_text_option(v, "Protocol").map(Protocol::from),
                }
            }),
            routing_rules: root.get_child("RoutingRules").map(|rules| {
                child_elements(rules, "RoutingRule")
                    .map(RoutingRule::from_xml)
                    .collect()
            }),
        })
    }
}
