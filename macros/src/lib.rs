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

mod shape;

use darling::FromDeriveInput;
use syn::DeriveInput;
extern crate proc_macro;

/// Derives the accessor surface of an S3 request or response shape.
///
/// Every field of the struct must be an `Option<T>`. For a field `version_id`
/// the derive generates:
///
/// - `fn version_id(&self) -> Option<&T>`
/// - `fn set_version_id(&mut self, version_id: Option<T>)`
/// - `fn with_version_id(self, version_id: impl Into<T>) -> Self`
///
/// It also implements [`Display`](std::fmt::Display), rendering only the fields
/// that are set as `{Name: value, Name: value}` in declaration order,
/// [`Debug`](std::fmt::Debug) with sensitive values masked, and
/// `s3_model::s3::types::ShapeValue` so the shape can be nested in other shapes.
/// Do not also derive `Debug`.
///
/// Field attributes:
///
/// - `#[shape(name = "SSECustomerKey")]` overrides the rendered name, which
///   otherwise is the PascalCase form of the field name.
/// - `#[shape(sensitive)]` renders the value as a redaction marker, in both
///   `Display` and `Debug`.
///
/// ```
/// use s3_model::Shape;
///
/// #[derive(Clone, Default, PartialEq, Shape)]
/// pub struct Tag {
///     key: Option<String>,
///     value: Option<String>,
/// }
///
/// let tag = Tag::default().with_key("team");
/// assert_eq!(tag.key().map(String::as_str), Some("team"));
/// assert_eq!(tag.to_string(), "{Key: team}");
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = match syn::parse::<DeriveInput>(input) {
        Ok(v) => v,
        Err(err) => return err.to_compile_error().into(),
    };

    let args = match shape::ShapeInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    match shape::expand_shape(args) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.write_errors().into(),
    }
}
