/// What the page slot holds between `mount` and `unmount`.
///
/// `Pending` owns the wait for the document to finish parsing, so clearing the
/// slot cancels a deferred mount just as it tears down a mounted page.
pub enum MountSlot<P, W> {
    Empty,
    Pending(W),
    Mounted(P),
}

impl<P, W> Default for MountSlot<P, W> {
    fn default() -> Self {
        MountSlot::Empty
    }
}

impl<P, W> MountSlot<P, W> {
    /// Move the current contents out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// A deferred mount should only run while its wait is still in the slot.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, MountSlot::Pending(_))
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountSlot::Mounted(_))
    }
}
