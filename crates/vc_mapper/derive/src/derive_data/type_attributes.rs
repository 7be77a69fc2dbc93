use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr, Path, Token};

use crate::MAPPER_ATTRIBUTE_NAME;

/// How an accessor is invoked.
#[derive(Debug)]
pub(crate) enum AccessorTarget {
    /// `accessor = "age"` → `Self::get_age`.
    Getter(Ident),
    /// `accessor(Age = path)` → `path`.
    Path(Path),
}

/// A zero-argument accessor registered for a field name.
#[derive(Debug)]
pub(crate) struct Accessor {
    pub name: String,
    pub target: AccessorTarget,
    pub span: Span,
}

/// Type level `#[mapper(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub accessors: Vec<Accessor>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(MAPPER_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("accessor") {
                    return result.parse_accessor(&meta);
                }
                Err(meta.error("unsupported type attribute, expected `accessor`"))
            })?;
        }

        Ok(result)
    }

    /// `accessor = "name"` or `accessor(Name = path, ...)`.
    fn parse_accessor(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.input.peek(Token![=]) {
            let lit: LitStr = meta.value()?.parse()?;
            let name = lit.value();
            let mut getter = syn::parse_str::<Ident>(&format!("get_{name}"))
                .map_err(|_| syn::Error::new(lit.span(), "accessor name must be an identifier"))?;
            getter.set_span(lit.span());
            return self.push(Accessor {
                name,
                target: AccessorTarget::Getter(getter),
                span: lit.span(),
            });
        }

        meta.parse_nested_meta(|inner| {
            let Some(ident) = inner.path.get_ident() else {
                return Err(inner.error("expected a field name"));
            };
            let path: Path = inner.value()?.parse()?;
            self.push(Accessor {
                name: ident.to_string(),
                target: AccessorTarget::Path(path),
                span: ident.span(),
            })
        })
    }

    fn push(&mut self, accessor: Accessor) -> syn::Result<()> {
        if self.accessors.iter().any(|known| known.name == accessor.name) {
            return Err(syn::Error::new(
                accessor.span,
                format!("accessor `{}` is registered twice", accessor.name),
            ));
        }
        self.accessors.push(accessor);
        Ok(())
    }
}
