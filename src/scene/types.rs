/// 3D vector (scene units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// 4x4 affine transformation matrix, row-major.
///
/// Points transform as column vectors: `p' = M * (x, y, z, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn from_translation(t: Vec3) -> Self {
        let mut out = Self::identity();
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    /// Compose two transforms: self * other
    pub fn mul(&self, other: &Mat4) -> Mat4 {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * other.m[k][c]).sum();
            }
        }
        Mat4 { m: out }
    }

    /// Transform a point (homogeneous, w = 1)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0; 3];
        for (r, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|c| self.m[r][c] * v[c]).sum();
        }
        Vec3::new(out[0], out[1], out[2])
    }

    /// The translation column of the matrix
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Copy of the matrix with the translation column zeroed
    pub fn without_translation(&self) -> Mat4 {
        let mut out = *self;
        out.m[0][3] = 0.0;
        out.m[1][3] = 0.0;
        out.m[2][3] = 0.0;
        out
    }
}

/// Spline interpolation type; only Bezier splines are exportable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineKind {
    Bezier,
    Poly,
    Nurbs,
}

/// Bezier control point: main coordinate plus incoming/outgoing handles,
/// all in the same local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    pub co: Vec3,
    pub handle_left: Vec3,
    pub handle_right: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub kind: SplineKind,
    pub points: Vec<BezierPoint>,
    pub cyclic: bool,
}

/// Linear array repetition rule taken from a modifier
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayModifier {
    pub enabled: bool,
    pub count: u32,
    pub constant_offset: bool,
    pub offset: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    Array(ArrayModifier),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Linear RGB diffuse color, each channel in [0, 1]
    pub diffuse_color: [f64; 3],
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveDimensions {
    TwoD,
    ThreeD,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub dimensions: CurveDimensions,
    pub splines: Vec<Spline>,
    /// Material slots; a slot may exist but hold no material
    pub materials: Vec<Option<Material>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Curve,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub visible: bool,
    pub kind: ObjectKind,
    pub matrix_world: Mat4,
    pub curve: Option<CurveData>,
    pub modifiers: Vec<Modifier>,
}

/// Read-only snapshot of the host scene taken at export start.
///
/// The pipeline never mutates the snapshot and never reaches back into
/// the host; array duplication is computed as pure data expansion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneSnapshot {
    pub objects: Vec<SceneObject>,
}
