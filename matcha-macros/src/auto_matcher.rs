//! Expansion of `#[derive(AutoMatcher)]`.
//!
//! Turns a named-field struct into a fluent matcher type: one predicate slot
//! per field, `with_x`/`and_x` setters, and a `Matcher` impl that requires
//! every customized slot to match.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::{de_raw, named_fields};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = named_fields(input, "AutoMatcher")?;

    let vis = &input.vis;
    let domain = &input.ident;
    let domain_name = domain.to_string();
    let matcher = format_ident!("{}Matcher", domain);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut slot_decls = Vec::new();
    let mut slot_inits = Vec::new();
    let mut setters = Vec::new();
    let mut match_arms = Vec::new();
    let mut describe_calls = Vec::new();
    let mut mismatch_calls = Vec::new();

    for field in fields {
        // Named fields always carry an ident.
        let ident = field.ident.as_ref().expect("named field");
        let ty = &field.ty;
        let plain = de_raw(ident);
        let with_fn = format_ident!("with_{}", plain);
        let and_fn = format_ident!("and_{}", plain);
        let with_doc = format!(
            "Requires the `{plain}` field to satisfy `value` \
             (a matcher, or a bare value matched for equality)."
        );
        let and_doc = format!("Alias of [`Self::{with_fn}`], for chained reading.");

        slot_decls.push(quote! {
            #ident: ::matcha::__macro_support::FieldSlot<#ty>
        });
        slot_inits.push(quote! {
            #ident: ::matcha::__macro_support::FieldSlot::anything()
        });
        setters.push(quote! {
            #[doc = #with_doc]
            #vis fn #with_fn<__M>(mut self, value: __M) -> Self
            where
                __M: ::matcha::IntoMatcher<#ty>,
                __M::Out: 'static,
            {
                self.#ident = ::matcha::__macro_support::FieldSlot::set(value);
                self
            }

            #[doc = #and_doc]
            #vis fn #and_fn<__M>(self, value: __M) -> Self
            where
                __M: ::matcha::IntoMatcher<#ty>,
                __M::Out: 'static,
            {
                self.#with_fn(value)
            }
        });
        match_arms.push(quote! {
            self.#ident.matches(&actual.#ident)
        });
        describe_calls.push(quote! {
            self.#ident.append_description(#plain, description);
        });
        mismatch_calls.push(quote! {
            self.#ident.append_mismatch(#plain, &actual.#ident, description);
        });
    }

    let matcher_doc = format!(
        "Fluent matcher for [`{domain_name}`], generated by `#[derive(AutoMatcher)]`."
    );
    let described = format!("{domain_name} with");
    let mismatched = format!("was {domain_name} with");

    Ok(quote! {
        #[doc = #matcher_doc]
        #vis struct #matcher #ty_generics #where_clause {
            #(#slot_decls,)*
        }

        #[automatically_derived]
        impl #impl_generics #matcher #ty_generics #where_clause {
            /// Creates a matcher with every field predicate at its default,
            /// matching any candidate instance.
            #vis fn new() -> Self {
                Self {
                    #(#slot_inits,)*
                }
            }

            #(#setters)*
        }

        #[automatically_derived]
        impl #impl_generics ::core::default::Default for #matcher #ty_generics #where_clause {
            fn default() -> Self {
                Self::new()
            }
        }

        #[automatically_derived]
        impl #impl_generics ::matcha::Matcher<#domain #ty_generics> for #matcher #ty_generics
        #where_clause
        {
            fn matches(&self, actual: &#domain #ty_generics) -> bool {
                true #(&& #match_arms)*
            }

            fn describe_to(&self, description: &mut ::matcha::Description) {
                description.append_text(#described);
                #(#describe_calls)*
            }

            fn describe_mismatch(
                &self,
                actual: &#domain #ty_generics,
                description: &mut ::matcha::Description,
            ) {
                description.append_text(#mismatched);
                #(#mismatch_calls)*
            }
        }

        #[automatically_derived]
        impl #impl_generics ::matcha::IntoMatcher<#domain #ty_generics> for #matcher #ty_generics
        #where_clause
        {
            type Out = Self;

            fn into_matcher(self) -> Self {
                self
            }
        }
    })
}
