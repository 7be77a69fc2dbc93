use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MappableStruct;

/// Generate `Value` trait implementation tokens.
pub(super) fn impl_trait_value(info: &MappableStruct) -> TokenStream {
    let vc_mapper_path = &info.vc_mapper_path;
    let value_ = crate::path::value_(vc_mapper_path);
    let struct_ = crate::path::struct_(vc_mapper_path);
    let debug_name_ = crate::path::debug_name_(vc_mapper_path);
    let box_ = crate::path::box_(vc_mapper_path);
    let clone_ = crate::path::clone_(vc_mapper_path);
    let option_ = crate::path::option_(vc_mapper_path);
    let result_ = crate::path::result_(vc_mapper_path);
    let assign_error_ = crate::path::assign_error_(vc_mapper_path);
    let assign_by_clone_ = crate::path::assign_by_clone_(vc_mapper_path);

    let ident = info.ident;
    let (impl_generics, ty_generics, _) = info.generics.split_for_impl();
    let where_clause = super::where_clause(info);

    quote! {
        impl #impl_generics #value_ for #ident #ty_generics #where_clause {
            #[inline]
            fn debug_name(&self) -> #debug_name_ {
                #debug_name_::type_name::<Self>()
            }

            #[inline]
            fn clone_value(&self) -> #box_<dyn #value_> {
                #box_::new(#clone_::clone(self))
            }

            #[inline]
            fn assign(&mut self, value: &dyn #value_) -> #result_<(), #assign_error_> {
                #assign_by_clone_(self, value)
            }

            #[inline]
            fn as_struct(&self) -> #option_<&dyn #struct_> {
                #option_::Some(self)
            }
        }
    }
}
