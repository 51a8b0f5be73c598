use std::iter::Skip;

use cortex::math::prelude::*;
use cortex::utils::prelude::ObjectPool;
use smallvec::SmallVec;

use crate::errors::*;
use crate::node::{Node, NodeRecord};
use crate::spatial::NodeRef;
use crate::transform::Transform;

/// A simple scene graph that used to store and manipulate the transforms of
/// objects hierarchically. Nodes are kept in a generational arena and refer to
/// each other with `Node` handles, so a stale handle could never reach a node
/// that has been deleted, even if its slot has been reused.
///
/// Every node has a local transform relative to its parent, and a world transform
/// relative to the root of its tree. World transforms are evaluated lazily: writes
/// only mark the affected subtree dirty, and reads recompute the dirty part of
/// the ancestor chain.
///
/// All the accessors take `&self`, the cache of world transforms lives in `Cell`s.
/// So the graph is `!Sync`, it is meant to be driven from the thread that runs
/// the main loop.
#[derive(Default)]
pub struct SceneGraph {
    nodes: ObjectPool<Node, NodeRecord>,
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph {
            nodes: ObjectPool::new(),
        }
    }

    /// Creates a detached node with identity transform.
    #[inline]
    pub fn create(&mut self) -> Node {
        self.create_with(Matrix4::identity())
    }

    /// Creates a detached node with specified local transform.
    pub fn create_with<T>(&mut self, local: T) -> Node
    where
        T: Into<Matrix4<f32>>,
    {
        self.nodes.create(NodeRecord::new(local.into()))
    }

    /// Removes a node and all of its descendants from the graph. Returns the
    /// removed nodes in pre-order.
    pub fn delete(&mut self, node: Node) -> Option<Vec<Node>> {
        if !self.nodes.contains(node) {
            return None;
        }

        self.unlink(node);

        let removes: Vec<_> = self.traverse(node).collect();
        for &v in &removes {
            self.nodes.free(v);
        }

        debug!("{} and {} descendants are deleted.", node, removes.len() - 1);
        Some(removes)
    }

    /// Returns true if the node is alive in this graph.
    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        self.nodes.contains(node)
    }

    /// Returns the number of nodes in this graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets a view of the node, which implements `SpatialNode`.
    #[inline]
    pub fn node(&self, node: Node) -> Option<NodeRef> {
        self.nodes
            .get(node)
            .map(|record| NodeRef::new(self, node, record))
    }

    #[inline]
    fn record(&self, node: Node) -> Result<&NodeRecord> {
        self.nodes.get(node).ok_or_else(|| {
            warn!("{} does not exist in scene graph.", node);
            Error::NonNodeFound(node)
        })
    }

    #[inline]
    fn record_mut(&mut self, node: Node) -> Result<&mut NodeRecord> {
        match self.nodes.get_mut(node) {
            Some(record) => Ok(record),
            None => {
                warn!("{} does not exist in scene graph.", node);
                Err(Error::NonNodeFound(node))
            }
        }
    }
}

impl SceneGraph {
    /// Gets the parent node.
    #[inline]
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.nodes.get(node).and_then(|v| v.parent)
    }

    /// Gets the children of node, in insertion order.
    #[inline]
    pub fn children(&self, node: Node) -> &[Node] {
        self.nodes
            .get(node)
            .map(|v| &v.children[..])
            .unwrap_or(&[])
    }

    /// Returns ture if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, node: Node) -> bool {
        self.nodes
            .get(node)
            .map(|v| v.children.is_empty())
            .unwrap_or(false)
    }

    /// Returns ture if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, node: Node) -> bool {
        self.nodes
            .get(node)
            .map(|v| v.parent.is_none())
            .unwrap_or(false)
    }

    /// Return true if `ancestor` is one of the ancestors of `node`.
    #[inline]
    pub fn is_ancestor(&self, node: Node, ancestor: Node) -> bool {
        self.ancestors(node).any(|v| v == ancestor)
    }

    /// Returns an iterator of its ancestors, from the parent up to the root.
    #[inline]
    pub fn ancestors(&self, node: Node) -> Ancestors {
        Ancestors {
            cursor: self.parent(node),
            graph: self,
        }
    }

    /// Returns an iterator of the subtree rooted at `node` in pre-order, which
    /// starts with `node` itself and then visits the subtree of each child in
    /// children order.
    ///
    /// The iterator is lazy and borrows the graph immutably, so a traversal never
    /// observes or makes any structural change. Each call starts a new traversal.
    #[inline]
    pub fn traverse(&self, node: Node) -> Traverse {
        let mut stack = SmallVec::new();
        if self.nodes.contains(node) {
            stack.push(node);
        }

        Traverse { graph: self, stack }
    }

    /// Returns an iterator of its descendants in pre-order, excluding itself.
    #[inline]
    pub fn descendants(&self, node: Node) -> Skip<Traverse> {
        self.traverse(node).skip(1)
    }

    /// Returns an iterator of the roots of all the trees in this graph.
    #[inline]
    pub fn roots<'a>(&'a self) -> impl Iterator<Item = Node> + 'a {
        self.nodes.keys().filter(move |&v| self.is_root(v))
    }
}

impl SceneGraph {
    /// Attachs `child` to the end of the children of `parent`. If `child` already
    /// has a parent, it's removed from there first. This also means re-attaching
    /// a child to the same parent moves it to the end.
    ///
    /// It fails with `Error::Cycle` if `parent` is `child` or one of its descendants,
    /// in which case nothing is changed.
    pub fn attach(&mut self, parent: Node, child: Node) -> Result<()> {
        self.check_attachable(parent, child)?;
        self.link(parent, child);
        Ok(())
    }

    /// Attachs `child` to `parent` like `attach`, but rewrites the local transform
    /// of `child` so its world transform stays the same.
    ///
    /// It fails with `Error::CanNotInverseTransform` if the world transform of
    /// `parent` is singular, in which case nothing is changed.
    pub fn attach_keep_world(&mut self, parent: Node, child: Node) -> Result<()> {
        self.check_attachable(parent, child)?;

        let pw = self.world_of(self.record(parent)?);
        let cw = self.world_of(self.record(child)?);
        let inverse = pw
            .invert()
            .ok_or(Error::CanNotInverseTransform(parent))?;

        self.link(parent, child);
        self.record_mut(child)?.local = inverse * cw;
        Ok(())
    }

    /// Detach a node from its parent. Its descendants are not affected, so it
    /// becomes the root of its own subtree. Detaching a root does nothing.
    pub fn detach(&mut self, node: Node) -> Result<()> {
        self.record(node)?;

        if let Some(parent) = self.unlink(node) {
            self.invalidate(node);
            debug!("{} is detached from {}.", node, parent);
        }

        Ok(())
    }

    fn check_attachable(&self, parent: Node, child: Node) -> Result<()> {
        self.record(parent)?;
        self.record(child)?;

        // The ancestor walk is bounded by the depth of tree, since the hierarchy
        // is always a forest.
        if parent == child || self.is_ancestor(parent, child) {
            warn!("{} can not be attached under {}.", child, parent);
            return Err(Error::Cycle { parent, child });
        }

        Ok(())
    }

    fn link(&mut self, parent: Node, child: Node) {
        self.unlink(child);

        if let Some(record) = self.nodes.get_mut(parent) {
            debug_assert!(!record.children.contains(&child));
            record.children.push(child);
        }

        if let Some(record) = self.nodes.get_mut(child) {
            record.parent = Some(parent);
        }

        self.invalidate(child);
        debug!("{} is attached to {}.", child, parent);
    }

    /// Removes node from the children of its parent, returns the former parent.
    fn unlink(&mut self, node: Node) -> Option<Node> {
        let parent = self.nodes.get_mut(node)?.parent.take()?;
        if let Some(record) = self.nodes.get_mut(parent) {
            if let Some(index) = record.children.iter().position(|&v| v == node) {
                record.children.remove(index);
            }
        }

        Some(parent)
    }
}

impl SceneGraph {
    /// Gets the transform in local space.
    #[inline]
    pub fn local_transform(&self, node: Node) -> Option<Matrix4<f32>> {
        self.nodes.get(node).map(|v| v.local)
    }

    /// Sets the transform in local space. The world transforms of this node and
    /// all of its descendants will be recomputed the next time they are read.
    pub fn set_local_transform<T>(&mut self, node: Node, local: T) -> Result<()>
    where
        T: Into<Matrix4<f32>>,
    {
        self.record_mut(node)?.local = local.into();
        self.invalidate(node);
        Ok(())
    }

    /// Gets the transform in world space, which is the product of local transforms
    /// along the path from the root to this node.
    #[inline]
    pub fn world_transform(&self, node: Node) -> Option<Matrix4<f32>> {
        self.nodes.get(node).map(|v| self.world_of(v))
    }

    /// Gets position in world space.
    #[inline]
    pub fn position(&self, node: Node) -> Option<Vector3<f32>> {
        self.world_transform(node).map(|m| m.w.truncate())
    }

    /// Gets the world transform split into scale, rotation and position. Returns
    /// `None` for stale handles, or if the accumulated matrix is sheared or scaled
    /// non-uniformly.
    #[inline]
    pub fn transform(&self, node: Node) -> Option<Transform> {
        self.world_transform(node).and_then(Transform::from_matrix)
    }

    /// Returns true if the world transform of node is stale, and will be recomputed
    /// when it's read next time.
    #[inline]
    pub fn is_dirty(&self, node: Node) -> bool {
        self.nodes.get(node).map(|v| v.is_dirty()).unwrap_or(false)
    }

    pub(crate) fn world_of(&self, record: &NodeRecord) -> Matrix4<f32> {
        if !record.is_dirty() {
            return record.world.get();
        }

        // Dirty nodes always have dirty descendants, so the dirty part of the
        // ancestor chain is a continuous segment starting from this node.
        let mut chain: SmallVec<[&NodeRecord; 16]> = SmallVec::new();
        let mut base = None;
        let mut cursor = Some(record);

        while let Some(v) = cursor {
            if !v.is_dirty() {
                base = Some(v.world.get());
                break;
            }

            chain.push(v);
            cursor = v.parent.and_then(|parent| self.nodes.get(parent));
        }

        trace!("Recompute world transforms of {} nodes.", chain.len());

        let mut world = Matrix4::identity();
        for v in chain.iter().rev() {
            world = match base {
                Some(parent) => parent * v.local,
                None => v.local,
            };

            v.settle(world);
            base = Some(world);
        }

        world
    }

    /// Marks node and all of its descendants dirty. The walk stops at nodes that
    /// are dirty already, whose subtrees are always dirty.
    fn invalidate(&self, node: Node) {
        let mut stack: SmallVec<[Node; 16]> = SmallVec::new();
        stack.push(node);

        while let Some(v) = stack.pop() {
            if let Some(record) = self.nodes.get(v) {
                if !record.dirty.replace(true) {
                    stack.extend(record.children.iter().cloned());
                }
            }
        }
    }
}

/// An iterator of its ancestors.
pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    cursor: Option<Node>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = self.graph.parent(node);
        Some(node)
    }
}

/// An iterator of a subtree in pre-order.
pub struct Traverse<'a> {
    graph: &'a SceneGraph,
    stack: SmallVec<[Node; 16]>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Children are pushed reversed, so the first child pops first.
        self.stack
            .extend(self.graph.children(node).iter().rev().cloned());
        Some(node)
    }
}
