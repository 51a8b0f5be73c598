use std::fmt::Debug;
use std::hash::Hash;

/// `HandleIndex` type is arbitrary. Keeping it 32-bits allows for
/// a single 64-bits word per `Handle`.
pub type HandleIndex = u32;

/// A generational index into some arena-like storage.
///
/// The `index` addresses a slot, and is recycled once the slot is freed. The
/// `version` tells apart the successive occupants of the same slot, so a handle
/// kept around after its slot was freed (and maybe reused) can never reach the
/// new occupant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle {
    index: HandleIndex,
    version: HandleIndex,
}

impl Handle {
    #[inline]
    pub fn new(index: HandleIndex, version: HandleIndex) -> Self {
        Handle { index, version }
    }

    #[inline]
    pub fn index(self) -> HandleIndex {
        self.index
    }

    #[inline]
    pub fn version(self) -> HandleIndex {
        self.version
    }
}

impl ::std::fmt::Display for Handle {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "Handle ({}, {})", self.index, self.version)
    }
}

/// Anything that could be minted by a `HandlePool`. It is a thin typed view of
/// a `Handle`, and converts both ways.
pub trait HandleLike: Debug + Copy + Hash + Eq + From<Handle> + Into<Handle> {
    #[inline]
    fn index(&self) -> HandleIndex {
        let handle: Handle = (*self).into();
        handle.index
    }

    #[inline]
    fn version(&self) -> HandleIndex {
        let handle: Handle = (*self).into();
        handle.version
    }
}

impl HandleLike for Handle {}

/// Declares a type-safe wrapper of `Handle`, so handles minted for different
/// arenas can not be mixed up.
#[macro_export]
macro_rules! impl_handle {
    ($name:ident) => {
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::utils::handle::Handle);

        impl From<$name> for $crate::utils::handle::Handle {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }

        impl From<$crate::utils::handle::Handle> for $name {
            fn from(handle: $crate::utils::handle::Handle) -> Self {
                $name(handle)
            }
        }

        impl $crate::utils::handle::HandleLike for $name {}

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(
                    f,
                    "{} ({}, {})",
                    stringify!($name),
                    self.0.index(),
                    self.0.version()
                )
            }
        }
    };
}
