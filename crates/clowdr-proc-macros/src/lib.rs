// clowdr-core-client/clowdr-proc-macros
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Dependency macros only support structs.",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Dependency macros only support structs with named fields.",
        ));
    };

    Ok(&fields.named)
}

/// Implements `From<&AppDependencies>` for an app service. Fields marked with `#[inject]` are
/// cloned from the field of the same name in `crate::app::deps::AppDependencies`, all other
/// fields are initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_dependencies(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_initialization = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let is_injected = field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("inject"));

        Some(if is_injected {
            quote! { #ident: deps.#ident.clone() }
        } else {
            quote! { #ident: Default::default() }
        })
    });

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generates a public `<Name>Dependencies` struct mirroring the fields of a domain service
/// together with a `From<<Name>Dependencies>` implementation. Tests use the generated struct
/// to construct services from mocks.
///
/// Fields marked with `#[state]` hold service-internal state. They are left out of the
/// generated struct and initialized with `Default::default()`.
#[proc_macro_derive(DependenciesStruct, attributes(state))]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let is_state = |field: &Field| field.attrs.iter().any(|attr| attr.path().is_ident("state"));

    let name = &input.ident;
    let dependencies_struct_name = format_ident!("{}Dependencies", name);

    let struct_fields = fields.iter().filter(|field| !is_state(field)).filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let ty = &field.ty;
        Some(quote! { pub #ident: #ty })
    });

    let field_initialization = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        Some(if is_state(field) {
            quote! { #ident: Default::default() }
        } else {
            quote! { #ident: deps.#ident }
        })
    });

    let expanded = quote! {
        pub struct #dependencies_struct_name {
            #(#struct_fields,)*
        }

        impl From<#dependencies_struct_name> for #name {
            fn from(deps: #dependencies_struct_name) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
