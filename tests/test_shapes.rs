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

use quickcheck::quickcheck;
use s3_model::s3::request::{
    CopyObjectRequest, DeleteObjectRequest, DeleteObjectsRequest, GetObjectRequest,
    PutObjectRequest,
};
use s3_model::s3::types::{Delete, ObjectIdentifier, StorageClass};
use s3_model_common::utils::{init_logger, rand_bucket_name, rand_object_name};
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn delete_object_request_renders_set_fields() {
    init_logger();
    let mut req = DeleteObjectRequest::default().with_bucket("b").with_key("k");
    assert_eq!(req.to_string(), "{Bucket: b, Key: k}");

    req.set_version_id(Some("v1".to_string()));
    assert_eq!(req.to_string(), "{Bucket: b, Key: k, VersionId: v1}");
    assert_eq!(req.version_id().map(String::as_str), Some("v1"));
}

#[test]
fn empty_shape_renders_braces() {
    assert_eq!(DeleteObjectRequest::default().to_string(), "{}");
    assert_eq!(GetObjectRequest::default().to_string(), "{}");
}

#[test]
fn render_follows_declaration_order_not_set_order() {
    let req = DeleteObjectRequest::default()
        .with_version_id("v1")
        .with_mfa("serial 123456")
        .with_key("k")
        .with_bucket("b");
    assert_eq!(
        req.to_string(),
        "{Bucket: b, Key: k, MFA: serial 123456, VersionId: v1}"
    );
}

#[test]
fn clearing_a_field_restores_equality() {
    let plain = DeleteObjectRequest::default().with_bucket("b");
    let mut versioned = plain.clone().with_version_id("v1");
    assert_ne!(plain, versioned);

    versioned.set_version_id(None);
    assert_eq!(plain, versioned);
    assert_eq!(hash_of(&plain), hash_of(&versioned));
    assert_eq!(plain.to_string(), versioned.to_string());
}

#[test]
fn none_and_empty_collections_are_distinct() {
    let unset = DeleteObjectsRequest::default().with_bucket("b").with_delete(Delete::default());
    let empty = DeleteObjectsRequest::default()
        .with_bucket("b")
        .with_delete(Delete::default().with_objects(Vec::<ObjectIdentifier>::new()));
    assert_ne!(unset, empty);
    assert_eq!(unset.to_string(), "{Bucket: b, Delete: {}}");
    assert_eq!(empty.to_string(), "{Bucket: b, Delete: {Objects: []}}");

    let no_metadata = PutObjectRequest::default();
    let empty_metadata =
        PutObjectRequest::default().with_metadata(BTreeMap::<String, String>::new());
    assert_ne!(no_metadata, empty_metadata);
    assert!(no_metadata.metadata().is_none());
    assert_eq!(empty_metadata.metadata().map(BTreeMap::len), Some(0));
    assert_eq!(empty_metadata.to_string(), "{Metadata: {}}");
}

#[test]
fn nested_shapes_compare_structurally() {
    let a = Delete::default().with_objects(vec![ObjectIdentifier::new("x").with_version_id("1")]);
    let b = Delete::default().with_objects(vec![ObjectIdentifier::new("x").with_version_id("1")]);
    let c = Delete::default().with_objects(vec![ObjectIdentifier::new("x").with_version_id("2")]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn metadata_renders_sorted_by_key() {
    let req = PutObjectRequest::default()
        .with_metadata_entry("zone", "b")
        .with_metadata_entry("author", "a");
    assert_eq!(req.to_string(), "{Metadata: {author: a, zone: b}}");
}

#[test]
fn customer_keys_are_masked_in_debug_output() {
    let req = GetObjectRequest::default()
        .with_bucket("b")
        .with_sse_customer_key("TOPSECRETKEY");
    let debug = format!("{req:?}");
    assert!(!debug.contains("TOPSECRETKEY"), "{debug}");
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
    assert!(debug.contains("\"b\""));
    assert_eq!(req.sse_customer_key().map(String::as_str), Some("TOPSECRETKEY"));

    let copy = CopyObjectRequest::default().with_copy_source_sse_customer_key("SOURCEKEY");
    assert!(!format!("{copy:?}").contains("SOURCEKEY"));
    assert!(!format!("{copy:#?}").contains("SOURCEKEY"));
}

#[test]
fn random_names_are_usable() {
    let req = DeleteObjectRequest::default()
        .with_bucket(rand_bucket_name())
        .with_key(rand_object_name());
    assert!(req.bucket().is_some());
    assert_eq!(req.key().map(String::len), Some(8));
}

quickcheck! {
    fn set_then_get_returns_value(bucket: String, key: String) -> bool {
        let mut req = DeleteObjectRequest::default();
        req.set_bucket(Some(bucket.clone()));
        req.set_key(Some(key.clone()));
        req.bucket() == Some(&bucket) && req.key() == Some(&key)
    }

    fn with_matches_set(version_id: Option<String>) -> bool {
        let mut set = DeleteObjectRequest::default().with_bucket("b");
        set.set_version_id(version_id.clone());
        let with = match version_id {
            Some(v) => DeleteObjectRequest::default().with_bucket("b").with_version_id(v),
            None => DeleteObjectRequest::default().with_bucket("b"),
        };
        set == with && set.to_string() == with.to_string()
    }

    fn equal_fields_mean_equal_shapes(bucket: String, max_keys: Option<i32>) -> bool {
        let build = || {
            let mut req = s3_model::s3::request::ListObjectsV2Request::default()
                .with_bucket(bucket.clone());
            req.set_max_keys(max_keys);
            req
        };
        let (a, b) = (build(), build());
        a == b && hash_of(&a) == hash_of(&b)
    }

    fn storage_class_string_overload(value: String) -> bool {
        let typed =
            PutObjectRequest::default().with_storage_class(StorageClass::from(value.as_str()));
        let untyped = PutObjectRequest::default().with_storage_class(value.as_str());
        typed == untyped && typed.to_string() == untyped.to_string()
    }
}
