//! Strongly typed city handle.
//!
//! Cities live in an arena owned by the map; edges refer to each other by
//! `CityId` rather than by reference, so the road graph has no ownership
//! cycles.  The inner integer is `pub` to allow direct indexing via
//! `id.0 as usize`, but callers should prefer [`CityId::index`].

use std::fmt;

/// Index of a city in its map's registration order.  Max ~4.3 billion cities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// Sentinel meaning "no valid city", equivalent to `u32::MAX`.
    pub const INVALID: CityId = CityId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for CityId {
    /// Returns the `INVALID` sentinel so uninitialized handles are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl From<CityId> for usize {
    #[inline(always)]
    fn from(id: CityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CityId, Self::Error> {
        u32::try_from(n).map(CityId)
    }
}
