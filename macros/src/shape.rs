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

use darling::ast::Data;
use darling::util::{Flag, Ignored};
use darling::{Error, FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, GenericArgument, Generics, Ident, PathArguments, Type};

const REDACTED: &str = "*** Sensitive Data Redacted ***";

#[derive(Debug, FromField)]
#[darling(attributes(shape), forward_attrs(doc))]
pub(crate) struct ShapeField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
    name: Option<String>,
    sensitive: Flag,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(shape), supports(struct_named))]
pub(crate) struct ShapeInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, ShapeField>,
}

/// Returns `T` for a field declared as `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// `sse_kms_key_id` -> `SseKmsKeyId`
fn pascal_case(name: &str) -> String {
    name.trim_start_matches("r#")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Expands the derive into inherent accessors plus the rendering impls.
pub(crate) fn expand_shape(input: ShapeInput) -> Result<TokenStream, Error> {
    let ShapeInput {
        ident,
        generics,
        data,
    } = input;

    let fields = data
        .take_struct()
        .ok_or_else(|| Error::unsupported_shape("enum").with_span(&ident))?
        .fields;

    let mut errors = Error::accumulator();
    let mut accessors = Vec::with_capacity(fields.len());
    let mut renders = Vec::with_capacity(fields.len());
    let mut debug_fields = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = field.ident.clone() else {
            continue;
        };
        let Some(inner) = option_inner(&field.ty) else {
            errors.push(
                Error::custom("shape fields must be declared as `Option<T>`").with_span(&field.ty),
            );
            continue;
        };

        let label = field
            .name
            .clone()
            .unwrap_or_else(|| pascal_case(&field_ident.to_string()));
        let setter = format_ident!("set_{}", field_ident);
        let with = format_ident!("with_{}", field_ident);
        let docs = &field.attrs;
        let getter_doc = if docs.is_empty() {
            let text = format!("Returns `{label}`, or `None` when it was never set.");
            quote!(#[doc = #text])
        } else {
            quote!(#(#docs)*)
        };
        let setter_doc = format!("Sets `{label}`; `None` clears it.");
        let with_doc = format!("Sets `{label}` and returns the shape for chaining.");

        accessors.push(quote! {
            #getter_doc
            pub fn #field_ident(&self) -> ::std::option::Option<&#inner> {
                self.#field_ident.as_ref()
            }

            #[doc = #setter_doc]
            pub fn #setter(&mut self, #field_ident: ::std::option::Option<#inner>) {
                self.#field_ident = #field_ident;
            }

            #[doc = #with_doc]
            pub fn #with(mut self, #field_ident: impl ::std::convert::Into<#inner>) -> Self {
                self.#field_ident = ::std::option::Option::Some(#field_ident.into());
                self
            }
        });

        let write_value = if field.sensitive.is_present() {
            quote!(f.write_str(#REDACTED)?;)
        } else {
            quote!(::s3_model::s3::types::ShapeValue::fmt_value(v, f)?;)
        };
        let pattern = if field.sensitive.is_present() {
            quote!(::std::option::Option::Some(_))
        } else {
            quote!(::std::option::Option::Some(v))
        };
        let debug_name = field_ident.to_string();
        debug_fields.push(if field.sensitive.is_present() {
            quote! {
                .field(
                    #debug_name,
                    &self.#field_ident.as_ref().map(|_| ::s3_model::s3::types::traits::Redacted),
                )
            }
        } else {
            quote!(.field(#debug_name, &self.#field_ident))
        });

        renders.push(quote! {
            if let #pattern = &self.#field_ident {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                f.write_str(#label)?;
                f.write_str(": ")?;
                #write_value
            }
        });
    }

    errors.finish()?;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident_name = ident.to_string();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#accessors)*
        }

        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause {
            #[allow(unused_mut, unused_assignments, unused_variables)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut first = true;
                f.write_str("{")?;
                #(#renders)*
                f.write_str("}")
            }
        }

        impl #impl_generics ::std::fmt::Debug for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(#ident_name)
                    #(#debug_fields)*
                    .finish()
            }
        }

        impl #impl_generics ::s3_model::s3::types::ShapeValue
            for #ident #ty_generics #where_clause
        {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("bucket"), "Bucket");
        assert_eq!(pascal_case("version_id"), "VersionId");
        assert_eq!(pascal_case("if_none_match"), "IfNoneMatch");
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = syn::parse_quote!(Option<String>);
        let inner = option_inner(&ty).unwrap();
        assert_eq!(quote!(#inner).to_string(), "String");

        let ty: Type = syn::parse_quote!(::std::option::Option<Vec<u8>>);
        assert!(option_inner(&ty).is_some());

        let ty: Type = syn::parse_quote!(Vec<String>);
        assert!(option_inner(&ty).is_none());
    }
}
