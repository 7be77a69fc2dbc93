// -----------------------------------------------------------------------------
// Modules

mod trait_struct;
mod trait_value;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, quote};
use syn::{DeriveInput, Ident, Type, WhereClause, parse_quote};

use crate::derive_data::MappableStruct;

use trait_struct::impl_trait_struct;
use trait_value::impl_trait_value;

/// Provided for `#[derive(Mappable)]`.
pub(crate) fn match_mappable_impls(ast: &DeriveInput) -> TokenStream {
    let info = match MappableStruct::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let value_trait_tokens = impl_trait_value(&info);
    let struct_trait_tokens = impl_trait_struct(&info);

    TokenStream::from(quote! {
        const _: () = {
            #value_trait_tokens

            #struct_trait_tokens
        };
    })
}

/// The where clause shared by both impls.
///
/// Generic structs additionally require `Self: Any + Send + Sync + Clone`
/// and `Value` for every visible field type mentioning a type parameter.
fn where_clause(info: &MappableStruct) -> Option<WhereClause> {
    let mut generics = info.generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
    if params.is_empty() {
        return generics.where_clause;
    }

    let vc_mapper_path = &info.vc_mapper_path;
    let any_ = crate::path::any_(vc_mapper_path);
    let send_ = crate::path::send_(vc_mapper_path);
    let sync_ = crate::path::sync_(vc_mapper_path);
    let clone_ = crate::path::clone_(vc_mapper_path);
    let value_ = crate::path::value_(vc_mapper_path);

    let predicates = &mut generics.make_where_clause().predicates;
    predicates.push(parse_quote!(Self: #any_ + #send_ + #sync_ + #clone_));

    let mut bounded = Vec::with_capacity(info.fields.len());
    for field in &info.fields {
        if bounded.contains(&field.ty) || !mentions_type_param(field.ty, &params) {
            continue;
        }
        bounded.push(field.ty);
        let ty = field.ty;
        predicates.push(parse_quote!(#ty: #value_));
    }

    generics.where_clause
}

/// Returns `true` if `ty` names one of `params` anywhere, `Vec<T>` or `<T as Tr>::X`.
fn mentions_type_param(ty: &Type, params: &[Ident]) -> bool {
    fn scan(tokens: TokenStream2, params: &[Ident]) -> bool {
        tokens.into_iter().any(|tree| match tree {
            TokenTree::Ident(ident) => params.contains(&ident),
            TokenTree::Group(group) => scan(group.stream(), params),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }

    scan(ty.to_token_stream(), params)
}

#[cfg(test)]
mod tests {
    use syn::{Ident, Type, parse_quote};

    use super::mentions_type_param;

    fn params() -> Vec<Ident> {
        vec![parse_quote!(T), parse_quote!(U)]
    }

    #[test]
    fn finds_params_in_nested_types() {
        let nested: Type = parse_quote!(Option<Vec<T>>);
        let tuple: Type = parse_quote!((u8, [U; 4]));
        let projection: Type = parse_quote!(<T as Iterator>::Item);

        assert!(mentions_type_param(&nested, &params()));
        assert!(mentions_type_param(&tuple, &params()));
        assert!(mentions_type_param(&projection, &params()));
    }

    #[test]
    fn concrete_types_are_not_bounded() {
        let string: Type = parse_quote!(String);
        let similar: Type = parse_quote!(Tree<u32>);

        assert!(!mentions_type_param(&string, &params()));
        assert!(!mentions_type_param(&similar, &params()));
    }
}
