use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{AccessorTarget, FieldAccess, MappableStruct};

/// Generate `Struct` trait implementation tokens.
pub(super) fn impl_trait_struct(info: &MappableStruct) -> TokenStream {
    let vc_mapper_path = &info.vc_mapper_path;
    let value_ = crate::path::value_(vc_mapper_path);
    let struct_ = crate::path::struct_(vc_mapper_path);
    let box_ = crate::path::box_(vc_mapper_path);
    let option_ = crate::path::option_(vc_mapper_path);
    let field_info_ = crate::path::field_info_(vc_mapper_path);
    let field_access_ = crate::path::field_access_(vc_mapper_path);

    let readable_names = info.readable_fields().map(|field| &field.name);
    let readable_members = info.readable_fields().map(|field| field.member);
    let writable_names = info.writable_fields().map(|field| &field.name);
    let writable_members = info.writable_fields().map(|field| field.member);

    let field_count = info.fields.len();
    let field_indices = 0..field_count;
    let field_infos = info.fields.iter().map(|field| {
        let name = &field.name;
        let access = match field.access {
            FieldAccess::ReadWrite => quote!(READ_WRITE),
            FieldAccess::ReadOnly => quote!(READ),
            FieldAccess::WriteOnly => quote!(WRITE),
        };
        quote!(#field_info_::new(#name, #field_access_::#access))
    });

    let accessor_names: Vec<&String> = info.attrs.accessors.iter().map(|a| &a.name).collect();
    let accessor_calls = info.attrs.accessors.iter().map(|accessor| match &accessor.target {
        AccessorTarget::Getter(getter) => quote!(Self::#getter(self)),
        AccessorTarget::Path(path) => quote!(#path(self)),
    });

    let has_accessor_body = if accessor_names.is_empty() {
        quote! {
            let _ = name;
            false
        }
    } else {
        quote! {
            match name {
                #(#accessor_names)|* => true,
                _ => false,
            }
        }
    };

    let ident = info.ident;
    let (impl_generics, ty_generics, _) = info.generics.split_for_impl();
    let where_clause = super::where_clause(info);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #value_> {
                match name {
                    #(#readable_names => #option_::Some(&self.#readable_members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #value_> {
                match name {
                    #(#writable_names => #option_::Some(&mut self.#writable_members),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            fn field_info_at(&self, index: usize) -> #option_<#field_info_<'_>> {
                match index {
                    #(#field_indices => #option_::Some(#field_infos),)*
                    _ => #option_::None,
                }
            }

            fn call_accessor(&self, name: &str) -> #option_<#box_<dyn #value_>> {
                match name {
                    #(#accessor_names => #option_::Some(#box_::new(#accessor_calls)),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn has_accessor(&self, name: &str) -> bool {
                #has_accessor_body
            }
        }
    }
}
