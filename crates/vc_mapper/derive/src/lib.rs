//! See [`Mappable`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MAPPER_ATTRIBUTE_NAME: &str = "mapper";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Mappable Derivation
///
/// `#[derive(Mappable)]` implements `Value` and `Struct` for a struct with
/// named fields, which makes it usable on both sides of a mapping.
///
/// The type must implement `Clone`, and every visible field type must
/// implement `Value`.
///
/// ```rust, ignore
/// #[derive(Mappable, Clone, Default)]
/// struct PersonView {
///     id: u32,
///     name: String,
/// }
/// ```
///
/// Enums, tuple structs and unit structs are rejected.
///
/// ## Accessors
///
/// A zero-argument method can provide the value of a field the struct does
/// not store. `accessor = "name"` registers `Self::get_name`:
///
/// ```rust, ignore
/// #[derive(Mappable, Clone)]
/// #[mapper(accessor = "age")]
/// struct Person {
///     birth_year: u32,
/// }
///
/// impl Person {
///     fn get_age(&self) -> u32 {
///         2024 - self.birth_year
///     }
/// }
/// ```
///
/// Any function taking `&Self` can be registered for a name with
/// `accessor(Name = path)`:
///
/// ```rust, ignore
/// #[derive(Mappable, Clone)]
/// #[mapper(accessor(DisplayName = display_name_of), accessor(Age = Self::age))]
/// struct Person { /* ... */ }
/// ```
///
/// The attribute can be repeated. Registering the same name twice is an
/// error.
///
/// ## Field attributes
///
/// - `#[mapper(rename = "Name")]`: the name the field is exposed under.
/// - `#[mapper(skip)]`: the field is invisible; its type need not implement
///   `Value`.
/// - `#[mapper(read_only)]`: the field can be read from a source but is never
///   written as a destination.
/// - `#[mapper(write_only)]`: the reverse of `read_only`.
///
/// ## Generics
///
/// Generic structs are supported. The impls require `Self: Any + Send +
/// Sync + Clone` and `Value` for every visible field type that mentions a
/// type parameter.
#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_mappable_impls(&ast)
}
