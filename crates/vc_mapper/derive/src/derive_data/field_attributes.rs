use syn::{Attribute, LitStr};

use crate::MAPPER_ATTRIBUTE_NAME;

/// Which sides of a mapping may use a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldAccess {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl FieldAccess {
    #[inline]
    pub fn is_readable(self) -> bool {
        self != Self::WriteOnly
    }

    #[inline]
    pub fn is_writable(self) -> bool {
        self != Self::ReadOnly
    }
}

/// Field level `#[mapper(...)]` attributes.
#[derive(Debug)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: bool,
    pub access: FieldAccess,
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self {
            rename: None,
            skip: false,
            access: FieldAccess::ReadWrite,
        }
    }
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(MAPPER_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    result.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("read_only") {
                    result.set_access(FieldAccess::ReadOnly, &meta)?;
                } else if meta.path.is_ident("write_only") {
                    result.set_access(FieldAccess::WriteOnly, &meta)?;
                } else {
                    return Err(meta.error(
                        "unsupported field attribute, expected `rename`, `skip`, `read_only` or `write_only`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }

    fn set_access(
        &mut self,
        access: FieldAccess,
        meta: &syn::meta::ParseNestedMeta,
    ) -> syn::Result<()> {
        if self.access != FieldAccess::ReadWrite && self.access != access {
            return Err(meta.error("`read_only` and `write_only` are mutually exclusive"));
        }
        self.access = access;
        Ok(())
    }
}
