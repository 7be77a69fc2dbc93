use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use super::{FieldAccess, FieldAttributes, TypeAttributes};

/// A visible field of the derived struct.
#[derive(Debug)]
pub(crate) struct MappedField<'a> {
    pub member: &'a Ident,
    pub ty: &'a Type,
    /// The name the field is exposed under.
    pub name: String,
    pub access: FieldAccess,
}

/// The derive input, validated and reduced to what code generation needs.
pub(crate) struct MappableStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<MappedField<'a>>,
    pub vc_mapper_path: syn::Path,
}

impl<'a> MappableStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Mappable` cannot be derived for tuple structs",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Mappable` cannot be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Mappable` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Mappable` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields: Vec<MappedField<'a>> = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            let Some(member) = field.ident.as_ref() else {
                continue;
            };
            let name = match &field_attrs.rename {
                Some(rename) => rename.value(),
                None => member.unraw().to_string(),
            };
            if fields.iter().any(|known| known.name == name) {
                let message = format!("field name `{name}` is exposed twice");
                return Err(match &field_attrs.rename {
                    Some(rename) => syn::Error::new(rename.span(), message),
                    None => syn::Error::new_spanned(member, message),
                });
            }
            fields.push(MappedField {
                member,
                ty: &field.ty,
                name,
                access: field_attrs.access,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
            vc_mapper_path: crate::path::vc_mapper(),
        })
    }

    pub fn readable_fields(&self) -> impl Iterator<Item = &MappedField<'a>> {
        self.fields.iter().filter(|field| field.access.is_readable())
    }

    pub fn writable_fields(&self) -> impl Iterator<Item = &MappedField<'a>> {
        self.fields.iter().filter(|field| field.access.is_writable())
    }
}
