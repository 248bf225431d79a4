use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Expr, ExprLit, GenericParam,
    Index, Lit, MetaNameValue, Path,
};

/// Derive `Record` for a struct, comparing each field with `ShallowEq`.
///
/// Use `#[memogate(path = "...")]` to point at the `memogate` crate under another name.
#[proc_macro_derive(Record, attributes(memogate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = &input.ident;

    let memogate = match crate_path(&input.attrs) {
        Ok(path) => path,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(#memogate::ShallowEq));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let Data::Struct(input_struct) = &input.data else {
        return syn::Error::new_spanned(ident, "`Record` can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let members: Vec<_> = input_struct
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| match &field.ident {
            Some(field_ident) => field_ident.to_token_stream(),
            None => Index::from(idx).to_token_stream(),
        })
        .collect();
    let len = members.len();

    quote! {
        impl #impl_generics #memogate::Record for #ident #ty_generics #where_clause {
            fn len(&self) -> usize {
                #len
            }

            fn shallow_eq(&self, other: &Self) -> bool {
                let _ = other;

                true #( && #memogate::ShallowEq::shallow_eq(&self.#members, &other.#members) )*
            }
        }
    }
    .into()
}

/// Path to the `memogate` crate from `#[memogate(path = "...")]`, defaulting to `memogate`.
fn crate_path(attrs: &[Attribute]) -> syn::Result<Path> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("memogate")) else {
        return Ok(parse_quote!(memogate));
    };

    let args: MetaNameValue = attr.parse_args()?;
    if !args.path.is_ident("path") {
        return Err(syn::Error::new_spanned(
            &args.path,
            "unknown `memogate` attribute, expected `path`",
        ));
    }

    let Expr::Lit(ExprLit {
        lit: Lit::Str(lit), ..
    }) = &args.value
    else {
        return Err(syn::Error::new_spanned(&args.value, "expected a string path"));
    };

    lit.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_memogate() {
        let input: DeriveInput = parse_quote! {
            struct A;
        };

        let path = crate_path(&input.attrs).unwrap();
        assert!(path.is_ident("memogate"));
    }

    #[test]
    fn it_parses_the_crate_path() {
        let input: DeriveInput = parse_quote! {
            #[memogate(path = "crate")]
            struct A;
        };

        let path = crate_path(&input.attrs).unwrap();
        assert_eq!(path.to_token_stream().to_string(), "crate");
    }

    #[test]
    fn it_rejects_unknown_attributes() {
        let input: DeriveInput = parse_quote! {
            #[memogate(name = "memogate")]
            struct A;
        };

        let error = crate_path(&input.attrs).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown `memogate` attribute, expected `path`"
        );
    }

    #[test]
    fn it_rejects_non_string_paths() {
        let input: DeriveInput = parse_quote! {
            #[memogate(path = 1)]
            struct A;
        };

        assert!(crate_path(&input.attrs).is_err());
    }
}
