use core::fmt;
use core::num::NonZeroU32;

/// Stable handle for a component in the network arena.
///
/// Stored as `index + 1` so that `Option<CompId>` (an absent neighbor link)
/// costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompId(NonZeroU32);

impl CompId {
    /// Create an id from a 0-based arena slot.
    ///
    /// # Panics
    ///
    /// If `index` is `u32::MAX`, which has no `index + 1` encoding.
    pub fn from_index(index: u32) -> Self {
        let raw = index
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .expect("arena index must be below u32::MAX");
        Self(raw)
    }

    /// Recover the 0-based arena slot.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Arena slot as a `usize`, for indexing per-component vectors.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompId({})", self.index())
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
