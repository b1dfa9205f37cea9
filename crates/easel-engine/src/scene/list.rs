use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Paint order is insertion order; there is no z sorting. Later commands
/// are drawn over earlier ones within the same renderer.
///
/// `push()` is O(1) and `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends every command of `other`, preserving its order.
    pub fn extend_from(&mut self, other: &DrawList) {
        self.items.extend_from_slice(&other.items);
    }
}
