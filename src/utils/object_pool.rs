use super::handle::HandleLike;
use super::handle_pool::{HandlePool, Iter};

/// A generational arena: every value lives in the slot of the handle it was
/// created with, and is only reachable through that exact handle.
///
/// Handles are plain `Copy` values, so records stored here could refer to each
/// other without owning each other.
#[derive(Debug)]
pub struct ObjectPool<H: HandleLike, T> {
    handles: HandlePool<H>,
    slots: Vec<Option<T>>,
}

impl<H: HandleLike, T> Default for ObjectPool<H, T> {
    fn default() -> Self {
        ObjectPool::new()
    }
}

impl<H: HandleLike, T> ObjectPool<H, T> {
    pub fn new() -> Self {
        ObjectPool {
            handles: HandlePool::new(),
            slots: Vec::new(),
        }
    }

    /// Stores `value` and returns the handle to reach it.
    pub fn create(&mut self, value: T) -> H {
        let handle = self.handles.create();
        let index = handle.index() as usize;

        match self.slots.get_mut(index) {
            Some(slot) => *slot = Some(value),
            None => self.slots.push(Some(value)),
        }

        handle
    }

    #[inline]
    pub fn get(&self, handle: H) -> Option<&T> {
        if !self.handles.contains(handle) {
            return None;
        }

        self.slots[handle.index() as usize].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        if !self.handles.contains(handle) {
            return None;
        }

        self.slots[handle.index() as usize].as_mut()
    }

    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.handles.contains(handle)
    }

    /// Removes the value of `handle` and gives it back. Stale handles get `None`.
    pub fn free(&mut self, handle: H) -> Option<T> {
        if !self.handles.free(handle) {
            return None;
        }

        self.slots[handle.index() as usize].take()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns an iterator over the alive handles, in index order.
    #[inline]
    pub fn keys(&self) -> Iter<H> {
        self.handles.iter()
    }
}
