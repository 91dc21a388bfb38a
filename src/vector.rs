use libm::{sincosf, sqrtf};

use crate::ZeroVector;

/// A non-positional 2D vector.
///
/// The two components are named `x1` and `x2`. The Euclidean length is stored
/// alongside them and recomputed by every mutator, so `length` always agrees
/// with the components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2d {
    x1: f32,
    x2: f32,
    length: f32,
}

impl Vector2d {
    /// Create a new vector with the given components.
    pub fn new(x1: f32, x2: f32) -> Self {
        let mut v = Self {
            x1,
            x2,
            length: 0.0,
        };
        v.update_length();
        v
    }

    /// The first component of this vector.
    #[inline(always)]
    pub fn x1(&self) -> f32 {
        self.x1
    }

    /// The second component of this vector.
    #[inline(always)]
    pub fn x2(&self) -> f32 {
        self.x2
    }

    /// The Euclidean length of this vector.
    /// Cached, so this is a plain field read.
    #[inline(always)]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// The squared Euclidean length, avoiding the square root.
    #[inline(always)]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Componentwise sum of this vector and `v`.
    /// Does not modify this vector.
    pub fn add(&self, v: &Self) -> Self {
        Self::new(self.x1 + v.x1, self.x2 + v.x2)
    }

    /// Componentwise difference of this vector and `v`.
    /// Does not modify this vector.
    pub fn subtract(&self, v: &Self) -> Self {
        Self::new(self.x1 - v.x1, self.x2 - v.x2)
    }

    /// Dot product of this vector and `v`.
    #[inline(always)]
    pub fn dot(&self, v: &Self) -> f32 {
        self.x1 * v.x1 + self.x2 * v.x2
    }

    /// Scalar 2D cross product of this vector and `v`.
    /// <https://stackoverflow.com/questions/243945/calculating-a-2d-vectors-cross-product>
    #[inline(always)]
    pub fn cross_2d(&self, v: &Self) -> f32 {
        self.x1 * v.x2 - self.x2 * v.x1
    }

    /// A vector with the same direction as this one, scaled by `scalar`.
    /// Does not modify this vector.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x1 * scalar, self.x2 * scalar)
    }

    /// Euclidean distance between this vector and `v`, both read as points.
    pub fn euclidean_distance(&self, v: &Self) -> f32 {
        self.subtract(v).length()
    }

    /// A copy of this vector rescaled to length 1.
    /// Fails on the zero vector, which has no direction.
    pub fn normalized(&self) -> Result<Self, ZeroVector> {
        if self.length > 0.0 {
            Ok(self.scale(1.0 / self.length))
        } else {
            Err(ZeroVector)
        }
    }

    // MUTATORS

    /// Recompute the cached length from the current components.
    /// Every mutator must call this before returning.
    fn update_length(&mut self) {
        let scalar_prod = self.dot(self);
        self.length = sqrtf(scalar_prod);
    }

    /// Set the first component of this vector.
    pub fn set_x1(&mut self, x1: f32) {
        self.x1 = x1;
        self.update_length();
    }

    /// Set the second component of this vector.
    pub fn set_x2(&mut self, x2: f32) {
        self.x2 = x2;
        self.update_length();
    }

    /// Set both components of this vector.
    pub fn set(&mut self, x1: f32, x2: f32) {
        self.x1 = x1;
        self.x2 = x2;
        self.update_length();
    }

    /// Rotate this vector counterclockwise by the given angle.
    /// To rotate clockwise, provide a negative angle.
    pub fn rotate(&mut self, radians: f32) {
        let (sin, cos) = sincosf(radians);
        // Both formulas need the pre-rotation x1.
        let init_x1 = self.x1;
        self.x1 = self.x1 * cos - self.x2 * sin;
        self.x2 = self.x2 * cos + init_x1 * sin;
        self.update_length();
    }

    /// Rescale this vector to length 1.
    /// Fails on the zero vector, leaving it unchanged.
    pub fn normalize(&mut self) -> Result<(), ZeroVector> {
        let unit = self.normalized()?;
        self.x1 = unit.x1;
        self.x2 = unit.x2;
        self.length = unit.length; // will always be 1.
        Ok(())
    }

    /// Rescale this vector to magnitude `m`, preserving its direction.
    /// Fails on the zero vector, leaving it unchanged.
    pub fn set_magnitude(&mut self, m: f32) -> Result<(), ZeroVector> {
        self.normalize()?;
        self.x1 *= m;
        self.x2 *= m;
        self.update_length();
        Ok(())
    }
}

impl std::fmt::Display for Vector2d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x1, self.x2)
    }
}

impl std::ops::Add<Self> for Vector2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x1 + rhs.x1, self.x2 + rhs.x2)
    }
}

impl std::ops::Sub<Self> for Vector2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x1 - rhs.x1, self.x2 - rhs.x2)
    }
}

impl std::ops::Mul<f32> for Vector2d {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vector2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

/// Vectors can be easily converted to/from an (x1, x2) pair.
impl From<(f32, f32)> for Vector2d {
    fn from((x1, x2): (f32, f32)) -> Self {
        Self::new(x1, x2)
    }
}

/// Vectors can be easily converted to/from an (x1, x2) pair.
impl From<Vector2d> for (f32, f32) {
    fn from(v: Vector2d) -> Self {
        (v.x1, v.x2)
    }
}

#[cfg(feature = "fuzz")]
impl<'a> arbitrary::Arbitrary<'a> for Vector2d {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(f32::arbitrary(u)?, f32::arbitrary(u)?))
    }
}
