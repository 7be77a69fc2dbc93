//! Hash containers with a stable, fixed-seed `foldhash` state.
//!
//! Override tables and [`DynamicStruct`](crate::ops::DynamicStruct) indices
//! are tiny and short-lived, a fixed seed keeps iteration order reproducible
//! between runs which makes logs comparable.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x3C6E_F372_FE94_F82B);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] based on `foldhash` with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use vc_mapper::utils::FixedHashState;
///
/// assert_eq!(
///     FixedHashState.hash_one("address_street"),
///     FixedHashState.hash_one("address_street"),
/// );
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;
