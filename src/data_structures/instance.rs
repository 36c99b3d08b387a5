//! Per-node transformation data.
//!
//! Every scene node carries a local [`Instance`] (position, Euler rotation and
//! scale). World transforms are obtained by composing `parent * local` from
//! the root down into a [`WorldTransform`].

use std::fmt;
use std::ops::Mul;

use cgmath::{Euler, Matrix4, Quaternion, Rad, SquareMatrix, Vector3};

/// One of the three transform axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Case-insensitive axis letter, `None` for anything outside {X, Y, Z}.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    fn of(self, v: &Vector3<f32>) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    fn of_mut(self, v: &mut Vector3<f32>) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Local transformation of a node: position, rotation (Euler, radians) and scale.
///
/// The rotation is kept as Euler angles because controls address one axis at a
/// time; composition goes through quaternions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub scale: Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn quaternion(&self) -> Quaternion<f32> {
        Quaternion::from(self.rotation)
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Self::compose(self.position, self.quaternion(), self.scale)
    }

    /// Like [`Instance::to_matrix`] but with zero scale components treated as 1.
    fn to_invertible_matrix(&self) -> Matrix4<f32> {
        let scale = self.scale.map(|s| if s == 0.0 { 1.0 } else { s });
        Self::compose(self.position, self.quaternion(), scale)
    }

    fn compose(
        position: Vector3<f32>,
        rotation: Quaternion<f32>,
        scale: Vector3<f32>,
    ) -> Matrix4<f32> {
        Matrix4::from_translation(position)
            * Matrix4::from(rotation)
            * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
    }

    pub fn scale_axis(&self, axis: Axis) -> f32 {
        axis.of(&self.scale)
    }

    /// Sets a single scale component, leaving the other two untouched.
    pub fn set_scale_axis(&mut self, axis: Axis, value: f32) {
        *axis.of_mut(&mut self.scale) = value;
    }

    pub fn rotation_axis(&self, axis: Axis) -> Rad<f32> {
        match axis {
            Axis::X => self.rotation.x,
            Axis::Y => self.rotation.y,
            Axis::Z => self.rotation.z,
        }
    }

    /// Sets a single rotation component, leaving the other two untouched.
    pub fn set_rotation_axis(&mut self, axis: Axis, angle: Rad<f32>) {
        match axis {
            Axis::X => self.rotation.x = angle,
            Axis::Y => self.rotation.y = angle,
            Axis::Z => self.rotation.z = angle,
        }
    }
}

/// Composed transform of a node and its ancestors.
///
/// Holds the full affine product of the local matrices, so a non-uniform
/// ancestor scale shears rotated descendants the same way a renderer would.
/// `invertible` is the same product with zero scale components replaced by 1;
/// it is only used to map points back when `matrix` is singular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub matrix: Matrix4<f32>,
    invertible: Matrix4<f32>,
}

impl WorldTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
            invertible: Matrix4::identity(),
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.matrix.w.truncate()
    }

    /// Maps a point from this transform's space into world space.
    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        (self.matrix * point.extend(1.0)).truncate()
    }

    /// Inverse of [`WorldTransform::transform_point`].
    ///
    /// A collapsed axis (zero scale) keeps the point's unscaled value there.
    pub fn inverse_transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        match self.matrix.invert().or_else(|| self.invertible.invert()) {
            Some(inverse) => (inverse * point.extend(1.0)).truncate(),
            None => point - self.position(),
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&Instance> for WorldTransform {
    fn from(local: &Instance) -> Self {
        &WorldTransform::identity() * local
    }
}

/// `parent * local`: places `local` inside the parent's space.
impl<'a, 'b> Mul<&'b Instance> for &'a WorldTransform {
    type Output = WorldTransform;

    fn mul(self, rhs: &'b Instance) -> Self::Output {
        WorldTransform {
            matrix: self.matrix * rhs.to_matrix(),
            invertible: self.invertible * rhs.to_invertible_matrix(),
        }
    }
}

impl From<Vector3<f32>> for Instance {
    fn from(position: Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}
