use cortex::math::prelude::*;

use crate::graph::SceneGraph;
use crate::node::{Node, NodeRecord};

/// The capabilities of a node in a spatial hierarchy: it might have a parent and
/// some children, and it has transforms in both local and world space.
///
/// Code written against this trait does not care how the hierarchy is stored.
pub trait SpatialNode {
    type Handle: Copy + PartialEq;

    fn handle(&self) -> Self::Handle;

    fn parent(&self) -> Option<Self::Handle>;

    fn children(&self) -> &[Self::Handle];

    fn local_transform(&self) -> Matrix4<f32>;

    /// The transform relative to the root, which is always up to date with the
    /// local transforms along the ancestor chain.
    fn world_transform(&self) -> Matrix4<f32>;
}

/// A borrowed view of a node in `SceneGraph`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    graph: &'a SceneGraph,
    node: Node,
    record: &'a NodeRecord,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(graph: &'a SceneGraph, node: Node, record: &'a NodeRecord) -> Self {
        NodeRef {
            graph,
            node,
            record,
        }
    }

    /// Returns true if the cached world transform is stale.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.record.is_dirty()
    }
}

impl<'a> SpatialNode for NodeRef<'a> {
    type Handle = Node;

    #[inline]
    fn handle(&self) -> Node {
        self.node
    }

    #[inline]
    fn parent(&self) -> Option<Node> {
        self.record.parent
    }

    #[inline]
    fn children(&self) -> &[Node] {
        &self.record.children[..]
    }

    #[inline]
    fn local_transform(&self) -> Matrix4<f32> {
        self.record.local
    }

    #[inline]
    fn world_transform(&self) -> Matrix4<f32> {
        self.graph.world_of(self.record)
    }
}

impl<'a> ::std::fmt::Debug for NodeRef<'a> {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("node", &self.node)
            .field("parent", &self.record.parent)
            .field("children", &self.record.children)
            .field("dirty", &self.record.is_dirty())
            .finish()
    }
}
