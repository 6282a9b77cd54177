//! Expansion of `#[derive(Structural)]`.
//!
//! Emits a `matcha::Structural` impl reflecting a struct into the `Value`
//! record descriptor that `equal_vars` walks: the type name plus each field's
//! reflected value, in declaration order.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::{de_raw, named_fields};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let field_entries = match &input.data {
        // Unit structs reflect as a record with no fields.
        syn::Data::Struct(data) if matches!(data.fields, syn::Fields::Unit) => Vec::new(),
        _ => named_fields(input, "Structural")?
            .iter()
            .map(|field| {
                let ident = field.ident.as_ref().expect("named field");
                let name = de_raw(ident);
                quote! {
                    (#name, ::matcha::Structural::reflect(&self.#ident))
                }
            })
            .collect(),
    };

    let name = &input.ident;
    let type_name = name.to_string();

    // Every generic parameter gets a `Structural` bound.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::matcha::Structural));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::matcha::Structural for #name #ty_generics #where_clause {
            fn reflect(&self) -> ::matcha::object::Value {
                ::matcha::object::Value::Record {
                    type_name: #type_name,
                    fields: ::std::vec![#(#field_entries),*],
                }
            }
        }
    })
}
