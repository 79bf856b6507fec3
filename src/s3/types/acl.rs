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

//! Access control lists

use super::enums::{GranteeType, Permission};
use crate::Shape;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{child_elements, get_text_option, push_xml_opt};
use serde::{Deserialize, Serialize};
use xmltree::Element;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    #[shape(name = "ID")]
    #[serde(rename = "ID")]
    id: Option<String>,
    display_name: Option<String>,
}

impl Owner {
    pub(crate) fn push_xml(&self, data: &mut String) {
        data.push_str("<Owner>");
        push_xml_opt(data, "ID", self.id.as_ref());
        push_xml_opt(data, "DisplayName", self.display_name.as_ref());
        data.push_str("</Owner>");
    }

    pub(crate) fn from_xml(element: &Element) -> Owner {
        Owner {
            id: get_text_option(element, "ID"),
            display_name: get_text_option(element, "DisplayName"),
        }
    }
}

/// Who a grant applies to. Which identifier is meaningful depends on the grantee type:
/// `ID` for a canonical user, `EmailAddress` for an account email, `URI` for a group.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Grantee {
    #[shape(name = "Type")]
    #[serde(rename = "Type")]
    grantee_type: Option<GranteeType>,
    #[shape(name = "ID")]
    #[serde(rename = "ID")]
    id: Option<String>,
    display_name: Option<String>,
    email_address: Option<String>,
    #[shape(name = "URI")]
    #[serde(rename = "URI")]
    uri: Option<String>,
}

impl Grantee {
    pub fn canonical_user(id: impl Into<String>) -> Grantee {
        Grantee::default()
            .with_grantee_type(GranteeType::CanonicalUser)
            .with_id(id)
    }

    pub fn email(address: impl Into<String>) -> Grantee {
        Grantee::default()
            .with_grantee_type(GranteeType::AmazonCustomerByEmail)
            .with_email_address(address)
    }

    pub fn group(uri: impl Into<String>) -> Grantee {
        Grantee::default()
            .with_grantee_type(GranteeType::Group)
            .with_uri(uri)
    }

    /// Grantee type as sent on the wire; inferred from the identifier when unset.
    fn wire_type(&self) -> Option<GranteeType> {
        if let Some(t) = &self.grantee_type {
            return Some(t.clone());
        }
        if self.id.is_some() {
            Some(GranteeType::CanonicalUser)
        } else if self.email_address.is_some() {
            Some(GranteeType::AmazonCustomerByEmail)
        } else if self.uri.is_some() {
            Some(GranteeType::Group)
        } else {
            None
        }
    }

    pub(crate) fn push_xml(&self, data: &mut String) {
        data.push_str("<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"");
        if let Some(t) = self.wire_type() {
            data.push_str(" xsi:type=\"");
            data.push_str(t.as_str());
            data.push('"');
        }
        data.push('>');
        push_xml_opt(data, "ID", self.id.as_ref());
        push_xml_opt(data, "DisplayName", self.display_name.as_ref());
        push_xml_opt(data, "EmailAddress", self.email_address.as_ref());
        push_xml_opt(data, "URI", self.uri.as_ref());
        data.push_str("</Grantee>");
    }

    pub(crate) fn from_xml(element: &Element) -> Grantee {
        // xsi:type, keyed by its local name
        let mut grantee = Grantee {
            grantee_type: element
                .attributes
                .get("type")
                .map(|t| GranteeType::from(t.as_str())),
            id: get_text_option(element, "ID"),
            display_name: get_text_option(element, "DisplayName"),
            email_address: get_text_option(element, "EmailAddress"),
            uri: get_text_option(element, "URI"),
        };
        grantee.grantee_type = grantee.wire_type();
        grantee
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct Grant {
    grantee: Option<Grantee>,
    permission: Option<Permission>,
}

impl Grant {
    pub(crate) fn push_xml(&self, data: &mut String) {
        data.push_str("<Grant>");
        if let Some(grantee) = &self.grantee {
            grantee.push_xml(data);
        }
        push_xml_opt(data, "Permission", self.permission.as_ref());
        data.push_str("</Grant>");
    }

    pub(crate) fn from_xml(element: &Element) -> Grant {
        Grant {
            grantee: element.get_child("Grantee").map(Grantee::from_xml),
            permission: get_text_option(element, "Permission").map(Permission::from),
        }
    }
}

/// Owner plus the list of grants of a bucket or object.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Shape)]
#[serde(rename_all = "PascalCase")]
pub struct AccessControlPolicy {
    owner: Option<Owner>,
    grants: Option<Vec<Grant>>,
}

impl AccessControlPolicy {
    pub fn to_xml(&self) -> String {
        let mut data =
            String::from("<AccessControlPolicy xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">");
        if let Some(owner) = &self.owner {
            owner.push_xml(&mut data);
        }
        if let Some(grants) = &self.grants {
            data.push_str("<AccessControlList>");
            for grant in grants {
                grant.push_xml(&mut data);
            }
            data.push_str("</AccessControlList>");
        }
        data.push_str("</AccessControlPolicy>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<AccessControlPolicy, ValidationErr> {
        if root.name != "AccessControlPolicy" {
            return Err(ValidationErr::xml_error(format!(
                "expected <AccessControlPolicy>, found <{}>",
                root.name
            )));
        }
        Ok(AccessControlPolicy {
            owner: root.get_child("Owner").map(Owner::from_xml),
            grants: root
                .get_child("AccessControlList")
                .map(|acl| child_elements(acl, "Grant").map(Grant::from_xml).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_xml() {
        let policy = AccessControlPolicy::default()
            .with_owner(Owner::default().with_id("owner-id").with_display_name("me"))
            .with_grants(vec![
                Grant::default()
                    .with_grantee(Grantee::canonical_user("owner-id"))
                    .with_permission(Permission::FullControl),
                Grant::default()
                    .with_grantee(Grantee::group(
                        "http://acs.amazonaws.com/groups/global/AllUsers",
                    ))
                    .with_permission("READ"),
            ]);
        let xml = policy.to_xml();
        assert!(xml.contains("<Owner><ID>owner-id</ID><DisplayName>me</DisplayName></Owner>"));
        assert!(xml.contains("xsi:type=\"CanonicalUser\""));
        assert!(xml.contains("xsi:type=\"Group\""));
        assert!(xml.contains("<Permission>FULL_CONTROL</Permission>"));

        let root = Element::parse(xml.as_bytes()).unwrap();
        assert_eq!(AccessControlPolicy::from_xml(&root).unwrap(), policy);
    }

    #[test]
    fn test_grantee_type_inferred() {
        let grantee = Grantee::default().with_email_address("a@example.com");
        assert!(grantee.grantee_type().is_none());
        let mut data = String::new();
        grantee.push_xml(&mut data);
        assert!(data.contains("xsi:type=\"AmazonCustomerByEmail\""));
    }

    #[test]
    fn test_grantee_type_read_from_attribute() {
        let root = Element::parse(
            "<Grant><Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:type=\"CanonicalUser\"><DisplayName>x</DisplayName></Grantee>\
             <Permission>READ</Permission></Grant>"
                .as_bytes(),
        )
        .unwrap();
        let grant = Grant::from_xml(&root);
        assert_eq!(
            grant.grantee().and_then(|g| g.grantee_type()),
            Some(&GranteeType::CanonicalUser)
        );
        assert_eq!(
            grant.to_string(),
            "{Grantee: {Type: CanonicalUser, DisplayName: x}, Permission: READ}"
        );

        let root = Element::parse(
            "<Grantee><URI>http://acs.amazonaws.com/groups/global/AllUsers</URI></Grantee>"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(Grantee::from_xml(&root).grantee_type(), Some(&GranteeType::Group));
    }

    #[test]
    fn test_empty_grant_list_is_not_absent() {
        let empty = AccessControlPolicy::default().with_grants(Vec::<Grant>::new());
        let absent = AccessControlPolicy::default();
        assert_ne!(empty, absent);
        assert!(empty.to_xml().contains("<AccessControlList></AccessControlList>"));
        assert!(!absent.to_xml().contains("AccessControlList"));
    }
}
