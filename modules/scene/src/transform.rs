use cortex::math::prelude::*;

const TOLERANCE: f32 = 1e-4;

/// A 4x4 affine matrix split into uniform scale, rotation and position.
///
/// The graph stores plain `Matrix4<f32>`s. `Transform` is the way to build them
/// (`Matrix4::from(transform)` gives `M = T * R * S`), and `from_matrix` takes a
/// matrix produced by the graph apart again.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            scale: 1.0,
            position: Vector3::zero(),
            rotation: Quaternion::one(),
        }
    }
}

impl From<Transform> for Matrix4<f32> {
    fn from(transform: Transform) -> Self {
        let linear = Matrix3::from(transform.rotation) * transform.scale;
        let mut m = Matrix4::from(linear);
        m.w = transform.position.extend(1.0);
        m
    }
}

impl Transform {
    #[inline]
    pub fn from_position<T>(position: T) -> Self
    where
        T: Into<Vector3<f32>>,
    {
        Transform {
            position: position.into(),
            ..Default::default()
        }
    }

    /// Splits an affine matrix into its parts. Returns `None` if the matrix is
    /// projective, singular, sheared or scaled non-uniformly, since none of these
    /// could be expressed with a single scale factor.
    ///
    /// A negative determinant comes back as a negative scale.
    pub fn from_matrix(m: Matrix4<f32>) -> Option<Self> {
        let projective = [m.x.w, m.y.w, m.z.w, m.w.w - 1.0];
        if projective.iter().any(|v| v.abs() > TOLERANCE) {
            return None;
        }

        let linear = Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
        let det = linear.determinant();
        if det.abs() <= ::std::f32::EPSILON {
            return None;
        }

        let scale = det.cbrt();
        let rotation = linear / scale;

        let gram = rotation.transpose() * rotation;
        let gram: &[f32; 9] = gram.as_ref();
        let identity = Matrix3::<f32>::identity();
        let identity: &[f32; 9] = identity.as_ref();
        if gram
            .iter()
            .zip(identity.iter())
            .any(|(a, b)| (a - b).abs() > TOLERANCE)
        {
            return None;
        }

        Some(Transform {
            scale,
            position: m.w.truncate(),
            rotation: Quaternion::from(rotation),
        })
    }
}
