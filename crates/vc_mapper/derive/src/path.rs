//! Paths of the `vc_mapper` items used by generated code.
//!
//! Everything goes through `vc_mapper::__macro_exports`, so the caller does
//! not need `alloc` or any import of its own.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `vc_mapper` crate.
///
/// 1. For crates that depend on `vc_mapper`, `::vc_mapper` is returned.
/// 2. For crates that depend on `vc_mapping`, `::vc_mapping::mapper` is returned.
/// 3. For other situations, `::vc_mapper` is returned.
///
/// Reading the caller's manifest is relatively costly, call it once per
/// derive and pass the result around.
pub(crate) fn vc_mapper() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_mapper"))
}

macro_rules! export_paths {
    ($($fn_name:ident => $item:ident,)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $fn_name(vc_mapper_path: &syn::Path) -> TokenStream {
                quote! { #vc_mapper_path::__macro_exports::$item }
            }
        )*
    };
}

export_paths! {
    any_ => Any,
    assign_by_clone_ => assign_by_clone,
    assign_error_ => AssignError,
    box_ => Box,
    clone_ => Clone,
    debug_name_ => DebugName,
    field_access_ => FieldAccess,
    field_info_ => FieldInfo,
    option_ => Option,
    result_ => Result,
    send_ => Send,
    struct_ => Struct,
    sync_ => Sync,
    value_ => Value,
}
