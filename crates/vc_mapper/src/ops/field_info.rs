use bitflags::bitflags;

bitflags! {
    /// What the mapper may do with a field.
    ///
    /// Destinations are only written through [`WRITE`](Self::WRITE) fields,
    /// sources are only read through [`READ`](Self::READ) fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldAccess: u8 {
        /// The field can be read as a mapping source.
        const READ = 1 << 0;
        /// The field can be written as a mapping destination.
        const WRITE = 1 << 1;
        /// Both directions.
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl Default for FieldAccess {
    #[inline]
    fn default() -> Self {
        Self::READ_WRITE
    }
}

/// Descriptor of a single named field.
///
/// Produced on demand by [`Struct::field_info_at`](crate::ops::Struct::field_info_at),
/// never stored by the mapper.
///
/// # Examples
///
/// ```
/// use vc_mapper::{FieldAccess, FieldInfo};
///
/// let info = FieldInfo::new("created_at", FieldAccess::READ);
///
/// assert_eq!(info.name(), "created_at");
/// assert!(info.is_readable());
/// assert!(!info.is_writable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo<'a> {
    name: &'a str,
    access: FieldAccess,
}

impl<'a> FieldInfo<'a> {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(name: &'a str, access: FieldAccess) -> Self {
        Self { name, access }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the access flags.
    #[inline]
    pub const fn access(&self) -> FieldAccess {
        self.access
    }

    #[inline]
    pub fn is_readable(&self) -> bool {
        self.access.contains(FieldAccess::READ)
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.access.contains(FieldAccess::WRITE)
    }
}
