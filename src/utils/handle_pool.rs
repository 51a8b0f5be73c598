use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use super::handle::{Handle, HandleIndex, HandleLike};

/// A generational allocator of handles.
///
/// Every slot keeps a version counter, which is bumped on both `create` and `free`.
/// So an odd version means the slot is occupied, and a handle is alive only if its
/// version matches the counter exactly. Freed slots are recycled lowest index
/// first, which keeps the storage of attached arenas dense.
#[derive(Debug)]
pub struct HandlePool<H: HandleLike> {
    versions: Vec<HandleIndex>,
    vacants: BinaryHeap<Reverse<HandleIndex>>,
    _marker: PhantomData<H>,
}

impl<H: HandleLike> Default for HandlePool<H> {
    fn default() -> Self {
        HandlePool::new()
    }
}

#[inline]
fn is_occupied(version: HandleIndex) -> bool {
    version & 0x1 == 1
}

impl<H: HandleLike> HandlePool<H> {
    pub fn new() -> Self {
        HandlePool {
            versions: Vec::new(),
            vacants: BinaryHeap::new(),
            _marker: PhantomData,
        }
    }

    /// Mints a new handle, reusing the lowest vacant slot if there is one.
    pub fn create(&mut self) -> H {
        let index = match self.vacants.pop() {
            Some(Reverse(index)) => index,
            None => {
                self.versions.push(0);
                (self.versions.len() - 1) as HandleIndex
            }
        };

        let version = &mut self.versions[index as usize];
        *version += 1;
        H::from(Handle::new(index, *version))
    }

    /// Returns true if `handle` was minted by this pool and has not been freed.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        match self.versions.get(handle.index() as usize) {
            Some(&version) => is_occupied(version) && version == handle.version(),
            None => false,
        }
    }

    /// Vacates the slot of `handle`. Returns false if it is not alive.
    pub fn free(&mut self, handle: H) -> bool {
        if !self.contains(handle) {
            return false;
        }

        self.versions[handle.index() as usize] += 1;
        self.vacants.push(Reverse(handle.index()));
        true
    }

    /// Returns the number of alive handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.versions.len() - self.vacants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the alive handles, in index order.
    #[inline]
    pub fn iter(&self) -> Iter<H> {
        Iter {
            versions: self.versions.iter().enumerate(),
            _marker: PhantomData,
        }
    }
}

pub struct Iter<'a, H: HandleLike> {
    versions: ::std::iter::Enumerate<::std::slice::Iter<'a, HandleIndex>>,
    _marker: PhantomData<H>,
}

impl<'a, H: HandleLike> Iterator for Iter<'a, H> {
    type Item = H;

    fn next(&mut self) -> Option<H> {
        self.versions
            .by_ref()
            .find(|&(_, &version)| is_occupied(version))
            .map(|(index, &version)| H::from(Handle::new(index as HandleIndex, version)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recycle_lowest_index_first() {
        let mut pool: HandlePool<Handle> = HandlePool::new();
        let handles: Vec<_> = (0..4).map(|_| pool.create()).collect();

        assert!(pool.free(handles[3]));
        assert!(pool.free(handles[1]));

        let e = pool.create();
        assert_eq!(e.index(), 1);
        assert_eq!(e.version(), 3);
        assert!(!pool.contains(handles[1]));
        assert!(pool.contains(e));
    }
}
