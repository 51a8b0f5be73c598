use std::cell::Cell;

use cortex::math::prelude::*;
use smallvec::SmallVec;

impl_handle!(Node);

/// The children of a node, most nodes only have a few.
pub(crate) type Children = SmallVec<[Node; 4]>;

/// The record of a node kept in the arena of `SceneGraph`.
///
/// The tree relationships are recorded with `Node` handles. `parent` is only a
/// back-reference for lookups; a node is owned by the `children` of its parent
/// exclusively, and by nothing else.
///
/// The world transform is a memoized value with two states. `dirty` is set on
/// writes, to the node and all of its descendants; and it could only be cleared
/// by recomputing the world transform on read.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub parent: Option<Node>,
    pub children: Children,
    pub local: Matrix4<f32>,
    pub world: Cell<Matrix4<f32>>,
    pub dirty: Cell<bool>,
}

impl NodeRecord {
    pub fn new(local: Matrix4<f32>) -> Self {
        NodeRecord {
            parent: None,
            children: Children::new(),
            local,
            world: Cell::new(local),
            dirty: Cell::new(true),
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Stores the recomputed world transform and marks it clean.
    #[inline]
    pub fn settle(&self, world: Matrix4<f32>) {
        self.world.set(world);
        self.dirty.set(false);
    }
}
