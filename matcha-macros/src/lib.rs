//! Derive macro implementations for matcha.
//!
//! This crate provides the derive macros for the `matcha` crate. Users should
//! use the main `matcha` crate, which re-exports both derives.
//!
//! # Architecture Overview
//!
//! Each derive is a two-phase transformation:
//!
//! 1. **Inspect** the `DeriveInput`: the target must be a struct with named
//!    fields (or a unit struct, for `Structural`). Anything else is a
//!    configuration error and is rejected with a `syn::Error` at definition
//!    time, so a misdeclared matcher never compiles.
//! 2. **Expand** into ordinary Rust items:
//!    - `AutoMatcher` (`auto_matcher.rs`) emits a `<Name>Matcher` struct with
//!      one predicate slot per field, explicit `with_x`/`and_x` setters, and
//!      a `Matcher<Name>` impl that ANDs the slots together.
//!    - `Structural` (`structural.rs`) emits a `matcha::Structural` impl that
//!      reflects a value into the `Value` descriptor tree consumed by
//!      `equal_vars`.
//!
//! # Key Design Decisions
//!
//! - **Explicit setters**: every builder method is generated up front, one
//!   per field, so unknown fields fail to compile and IDE completion sees the
//!   whole fluent surface.
//! - **Raw identifiers**: a field named `r#type` keeps its raw name as the
//!   slot, while the setters are de-rawed to `with_type`/`and_type`.
//! - **Field order is the declared order**: descriptions, mismatch text and
//!   reflection all walk fields in declaration order, which keeps output
//!   deterministic.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod auto_matcher;
mod structural;

/// Derives a fluent builder-style matcher for a named-field struct.
///
/// For a struct `Foo`, generates a `FooMatcher` with a per-field predicate
/// slot defaulting to "matches anything", chainable `with_<field>` and
/// `and_<field>` setters, and a `matcha::Matcher<Foo>` implementation.
///
/// See the `matcha` crate documentation for usage.
#[proc_macro_derive(AutoMatcher)]
pub fn derive_auto_matcher(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    auto_matcher::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives `matcha::Structural` for a struct, enabling structural equality
/// via `equal_vars` and `has_identical_properties_to`.
///
/// Every field type must itself implement `Structural`.
#[proc_macro_derive(Structural)]
pub fn derive_structural(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    structural::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Returns the named fields of a struct, or a definition-time error for any
/// other shape of type.
fn named_fields<'a>(
    input: &'a DeriveInput,
    derive_name: &str,
) -> syn::Result<&'a syn::punctuated::Punctuated<syn::Field, syn::Token![,]>> {
    match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => Ok(&fields.named),
            syn::Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                format!(
                    "#[derive({derive_name})] requires a struct with named fields, \
                     but `{}` is a tuple struct",
                    input.ident
                ),
            )),
            syn::Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                format!(
                    "#[derive({derive_name})] requires a struct with named fields, \
                     but `{}` is a unit struct",
                    input.ident
                ),
            )),
        },
        syn::Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "#[derive({derive_name})] requires a struct with named fields, \
                 but `{}` is an enum",
                input.ident
            ),
        )),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "#[derive({derive_name})] requires a struct with named fields, \
                 but `{}` is a union",
                input.ident
            ),
        )),
    }
}

/// Strips the `r#` prefix from a raw identifier, for use in generated method
/// names where the keyword no longer collides.
fn de_raw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_owned).unwrap_or(name)
}
