extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Expr, ExprLit, Lit, LitStr, Meta, parse_macro_input};

/// Reads an explicit identity from `#[flag(name = "...")]`, if present.
fn explicit_name(input: &DeriveInput) -> Result<Option<LitStr>, syn::Error> {
    let mut name = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("flag")) {
        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new_spanned(attr, "expected #[flag(name = \"...\")]"));
        };
        list.parse_nested_meta(|meta| {
            if !meta.path.is_ident("name") {
                return Err(meta.error("unsupported flag attribute, expected `name`"));
            }
            let value: Expr = meta.value()?.parse()?;
            match value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => {
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(lit, "flag name must not be empty"));
                    }
                    if name.replace(lit).is_some() {
                        return Err(meta.error("flag name given more than once"));
                    }
                    Ok(())
                }
                other => Err(syn::Error::new_spanned(other, "flag name must be a string literal")),
            }
        })?;
    }

    Ok(name)
}

/// Generic markers would share one identity across every instantiation.
fn check_no_generics(input: &DeriveInput) -> Result<(), syn::Error> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            "Flag derive does not support generic types",
        ))
    }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    check_no_generics(&input)?;

    let ident = &input.ident;
    let short = LitStr::new(&ident.to_string(), Span::call_site());
    let path = quote! { ::core::concat!(::core::module_path!(), "::", #short) };
    let name = match explicit_name(&input)? {
        Some(lit) => quote! { #lit },
        None => path,
    };
    // location keeps types of the same path apart, e.g. in sibling fn bodies
    let key = quote! {
        ::core::concat!(
            ::core::module_path!(), "::", #short,
            "@", ::core::file!(), ":", ::core::line!(), ":", ::core::column!()
        )
    };
    let id = quote! { ::typed_flags::Identity::keyed(#name, #key) };

    Ok(quote! {
        impl ::typed_flags::Flag for #ident {
            const ID: ::typed_flags::Identity = #id;
        }
    })
}

/// Marks a type as a flag identity.
///
/// The flag is shown as `module_path!()::TypeName` unless
/// `#[flag(name = "...")]` picks another name. The name never decides
/// identity: every derived type is a distinct flag.
#[proc_macro_derive(Flag, attributes(flag))]
pub fn derive_flag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
