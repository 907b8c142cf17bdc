/// Handle of a Mobject stored in a [`crate::SceneGraph`].
///
/// Ids are never reused within one graph, so a stale id fails lookups instead of aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MobjectId(pub(crate) u32);

impl MobjectId {
    /// Raw slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MobjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mobject#{}", self.0)
    }
}
