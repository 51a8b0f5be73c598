//! _Cortex-Scene_ is the spatial scene graph of [cortex](../cortex/index.html).
//!
//! The `SceneGraph` owns a forest of nodes. Every node has a local transform,
//! relative to its parent, and a world transform which is derived from the local
//! transforms along its ancestor chain. World transforms are cached and only
//! recomputed on read, after something along the chain has been changed.
//!
//! ```rust
//! use cortex::math::{Matrix4, Vector3};
//! use cortex_scene::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! let root = scene.create();
//! let arm = scene.create_with(Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0)));
//! let hand = scene.create_with(Matrix4::from_translation(Vector3::new(0.0, 1.0, 0.0)));
//!
//! scene.attach(root, arm).unwrap();
//! scene.attach(arm, hand).unwrap();
//!
//! assert_eq!(
//!     scene.world_transform(hand),
//!     Some(Matrix4::from_translation(Vector3::new(1.0, 1.0, 0.0)))
//! );
//! assert_eq!(scene.traverse(root).collect::<Vec<_>>(), [root, arm, hand]);
//! ```

#[macro_use]
extern crate cortex;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod errors;
pub mod graph;
pub mod node;
pub mod spatial;
pub mod transform;

pub mod prelude {
    pub use crate::graph::SceneGraph;
    pub use crate::node::Node;
    pub use crate::spatial::{NodeRef, SpatialNode};
    pub use crate::transform::Transform;
}
