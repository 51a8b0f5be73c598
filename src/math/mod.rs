//! This module contains the math utils that mainly comes from `cgmath`.

pub use cgmath::*;

/// The commonly used traits and types. The `Transform` trait of `cgmath` is left
/// out here, the name belongs to the decomposed transform of feature modules.
pub mod prelude {
    pub use cgmath::prelude::{
        Angle, Array, ElementWise, EuclideanSpace, InnerSpace, Matrix, MetricSpace, Rotation,
        Rotation3, SquareMatrix, VectorSpace,
    };
    pub use cgmath::{Deg, Euler, Matrix3, Matrix4, One, Quaternion, Rad, Vector3, Vector4, Zero};
}
