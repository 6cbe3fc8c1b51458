//! Node identifier.

use std::fmt;

/// Index of a mobile node in per-node storage.
///
/// `Copy + Ord + Hash` so it works as a map key without ceremony.  The inner
/// integer is `pub` for direct `Vec` indexing, but prefer `.index()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no valid node".
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeId {
    /// Uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
