//! Rotation engine for n-cube vertices
//!
//! Every rotation here mixes exactly two coordinates. In 3D that is a turn
//! about the remaining axis; in 4D the two untouched coordinates span a fixed
//! plane, so 4D shapes rotate *about a plane*. "Rotating along" a plane is
//! the same as rotating about its orthogonal complement.
//!
//! Labels such as `"x"` or `"zw"` are resolved once into a [`PlaneRotation`]
//! (a validated coordinate pair). The per-tick path only multiplies numbers.

use std::fmt;
use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use hyperwire_math::{plane::rotate_in_plane, VecN};
use crate::GeometryError;

/// A coordinate axis of 3D/4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// All axes in coordinate order
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Coordinate index of this axis
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }

    /// Lowercase label (`"x"`, `"y"`, ...)
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::W => "w",
        }
    }

    /// Parse a label, case-insensitive
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A coordinate plane spanned by two of the axes x, y, z, w
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl Plane {
    /// All planes in canonical order
    pub const ALL: [Plane; 6] = [Plane::XY, Plane::XZ, Plane::XW, Plane::YZ, Plane::YW, Plane::ZW];

    /// The two axes spanning this plane
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::XZ => (Axis::X, Axis::Z),
            Plane::XW => (Axis::X, Axis::W),
            Plane::YZ => (Axis::Y, Axis::Z),
            Plane::YW => (Axis::Y, Axis::W),
            Plane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// The plane spanned by the other two axes of 4D space
    pub fn complement(self) -> Plane {
        match self {
            Plane::XY => Plane::ZW,
            Plane::XZ => Plane::YW,
            Plane::XW => Plane::YZ,
            Plane::YZ => Plane::XW,
            Plane::YW => Plane::XZ,
            Plane::ZW => Plane::XY,
        }
    }

    /// Whether the plane involves the fourth axis
    #[inline]
    pub fn uses_w(self) -> bool {
        matches!(self, Plane::XW | Plane::YW | Plane::ZW)
    }

    /// Lowercase label (`"xy"`, `"zw"`, ...)
    pub fn label(self) -> &'static str {
        match self {
            Plane::XY => "xy",
            Plane::XZ => "xz",
            Plane::XW => "xw",
            Plane::YZ => "yz",
            Plane::YW => "yw",
            Plane::ZW => "zw",
        }
    }

    /// Parse a label, case-insensitive
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A validated pair of coordinate indices `(p, q)` to rotate
///
/// Rotating by `angle` maps `p' = p·cos − q·sin`, `q' = p·sin + q·cos`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneRotation {
    p: usize,
    q: usize,
}

impl PlaneRotation {
    /// Rotation mixing coordinates `p` and `q` of a `dim`-dimensional vertex
    ///
    /// Valid for any dimension.
    ///
    /// # Errors
    /// [`GeometryError::UnknownAxis`] if either index is out of range or `p == q`.
    pub fn new(dim: usize, p: usize, q: usize) -> Result<Self, GeometryError> {
        if p >= dim || q >= dim || p == q {
            return Err(GeometryError::unknown_axis(format!("({}, {})", p, q), dim));
        }
        Ok(Self { p, q })
    }

    /// First coordinate index
    #[inline]
    pub fn p(&self) -> usize {
        self.p
    }

    /// Second coordinate index
    #[inline]
    pub fn q(&self) -> usize {
        self.q
    }

    /// Highest dimension index this rotation touches, plus one
    #[inline]
    pub fn min_dimension(&self) -> usize {
        self.p.max(self.q) + 1
    }

    /// Rotate every vertex in place by `angle` radians
    ///
    /// Only the two named coordinates change. Edge topology and the
    /// front/back classification are untouched; re-run the projection
    /// afterwards so dependent render data stays consistent.
    pub fn apply(&self, vertices: &mut [VecN], angle: f64) {
        let (sin, cos) = angle.sin_cos();
        for vertex in vertices.iter_mut() {
            rotate_in_plane(vertex.coords_mut(), self.p, self.q, cos, sin);
        }
    }
}

/// Rotate `vertices` in place in the plane named by `rotation`
///
/// Free-function form of [`PlaneRotation::apply`].
pub fn rotate_plane(vertices: &mut [VecN], rotation: PlaneRotation, angle: f64) {
    rotation.apply(vertices, angle);
}

/// A rotation named the way a scene describes it
///
/// Named rotations exist for 3D and 4D shapes only; other dimensions use
/// [`PlaneRotation::new`] with explicit coordinate indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedRotation {
    /// 3D: turn about a line
    About(Axis),
    /// 4D: turn about a fixed plane
    AboutPlane(Plane),
    /// Turn along a plane (3D or 4D), i.e. about its orthogonal complement
    Along(Plane),
}

impl NamedRotation {
    /// Resolve into the coordinate pair that actually moves
    ///
    /// The pair order reproduces a fixed sign convention per label, e.g. in
    /// 3D about `y` rotates `(z, x)` and in 4D about `xw` rotates `(z, y)`.
    ///
    /// # Errors
    /// [`GeometryError::UnknownAxis`] when the label is not valid for `dim`.
    pub fn resolve(self, dim: usize) -> Result<PlaneRotation, GeometryError> {
        let pair = match (dim, self) {
            (3, NamedRotation::About(Axis::X)) => (1, 2),
            (3, NamedRotation::About(Axis::Y)) => (2, 0),
            (3, NamedRotation::About(Axis::Z)) => (0, 1),
            (3, NamedRotation::Along(Plane::XY)) => return NamedRotation::About(Axis::Z).resolve(dim),
            (3, NamedRotation::Along(Plane::XZ)) => return NamedRotation::About(Axis::Y).resolve(dim),
            (3, NamedRotation::Along(Plane::YZ)) => return NamedRotation::About(Axis::X).resolve(dim),

            (4, NamedRotation::AboutPlane(Plane::XY)) => (2, 3),
            (4, NamedRotation::AboutPlane(Plane::XZ)) => (1, 3),
            (4, NamedRotation::AboutPlane(Plane::XW)) => (2, 1),
            (4, NamedRotation::AboutPlane(Plane::YZ)) => (3, 0),
            (4, NamedRotation::AboutPlane(Plane::YW)) => (2, 0),
            (4, NamedRotation::AboutPlane(Plane::ZW)) => (1, 0),
            (4, NamedRotation::Along(plane)) => {
                return NamedRotation::AboutPlane(plane.complement()).resolve(dim);
            }

            _ => return Err(GeometryError::unknown_axis(self.to_string(), dim)),
        };
        PlaneRotation::new(dim, pair.0, pair.1)
    }
}

impl fmt::Display for NamedRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedRotation::About(axis) => write!(f, "about {}", axis.label()),
            NamedRotation::AboutPlane(plane) => write!(f, "about {}", plane.label()),
            NamedRotation::Along(plane) => write!(f, "along {}", plane.label()),
        }
    }
}

/// A rotation label as written in a scene file
///
/// `About` takes an axis label for 3D shapes and a plane label for 4D shapes;
/// `Along` always takes a plane label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinLabel {
    About(String),
    Along(String),
}

impl SpinLabel {
    /// Interpret the label for a shape of dimension `dim`
    pub fn to_named(&self, dim: usize) -> Result<NamedRotation, GeometryError> {
        let named = match self {
            SpinLabel::About(label) if dim == 3 => Axis::parse(label).map(NamedRotation::About),
            SpinLabel::About(label) => Plane::parse(label).map(NamedRotation::AboutPlane),
            SpinLabel::Along(label) => Plane::parse(label).map(NamedRotation::Along),
        };
        named.ok_or_else(|| {
            let label = match self {
                SpinLabel::About(l) | SpinLabel::Along(l) => l.clone(),
            };
            GeometryError::unknown_axis(label, dim)
        })
    }
}

/// An ordered list of resolved rotations applied together each tick
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spin {
    rotations: Vec<PlaneRotation>,
}

impl Spin {
    /// Create an empty spin (no rotation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve scene labels for a shape of dimension `dim`
    pub fn from_labels(dim: usize, labels: &[SpinLabel]) -> Result<Self, GeometryError> {
        let rotations = labels
            .iter()
            .map(|label| label.to_named(dim)?.resolve(dim))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rotations })
    }

    /// Resolve named rotations for a shape of dimension `dim`
    pub fn from_named(dim: usize, named: &[NamedRotation]) -> Result<Self, GeometryError> {
        let rotations = named
            .iter()
            .map(|n| n.resolve(dim))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rotations })
    }

    /// Append a resolved rotation
    pub fn with(mut self, rotation: PlaneRotation) -> Self {
        self.rotations.push(rotation);
        self
    }

    /// The rotations, in application order
    pub fn rotations(&self) -> &[PlaneRotation] {
        &self.rotations
    }

    /// Whether this spin does nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Apply every rotation in order by `angle` radians
    pub fn apply(&self, vertices: &mut [VecN], angle: f64) {
        for rotation in &self.rotations {
            rotation.apply(vertices, angle);
        }
    }
}

bitflags! {
    /// Which coordinate planes are actively rotating each tick
    ///
    /// This is the toggle set a UI exposes. For 4D shapes each flag names the
    /// fixed plane (rotate *about* it). A 3D shape cannot rotate about a plane,
    /// so there each flag names the plane that moves (rotate *along* it) and
    /// flags involving `w` are ignored.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RotationState: u8 {
        const XY = 1 << 0;
        const XZ = 1 << 1;
        const XW = 1 << 2;
        const YZ = 1 << 3;
        const YW = 1 << 4;
        const ZW = 1 << 5;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        RotationState::XW | RotationState::YZ
    }
}

impl From<Plane> for RotationState {
    fn from(plane: Plane) -> Self {
        match plane {
            Plane::XY => RotationState::XY,
            Plane::XZ => RotationState::XZ,
            Plane::XW => RotationState::XW,
            Plane::YZ => RotationState::YZ,
            Plane::YW => RotationState::YW,
            Plane::ZW => RotationState::ZW,
        }
    }
}

impl RotationState {
    /// Dimension of the space the six toggle planes live in
    pub const LABEL_DIMENSION: usize = 4;

    /// Build a state from plane labels (`"xw"`, `"yz"`, ...)
    ///
    /// The labels name coordinate planes of 4-space independently of any
    /// shape, so a bad label is reported against [`Self::LABEL_DIMENSION`].
    ///
    /// # Errors
    /// [`GeometryError::UnknownAxis`] for any label that is not one of the six planes.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, GeometryError> {
        let mut state = RotationState::empty();
        for label in labels {
            let plane = Plane::parse(label.as_ref())
                .ok_or_else(|| GeometryError::unknown_axis(label.as_ref(), Self::LABEL_DIMENSION))?;
            state |= RotationState::from(plane);
        }
        Ok(state)
    }

    /// Active planes in canonical order
    pub fn planes(self) -> impl Iterator<Item = Plane> {
        Plane::ALL.into_iter().filter(move |p| self.contains((*p).into()))
    }

    /// Labels of the active planes
    pub fn labels(self) -> Vec<&'static str> {
        self.planes().map(Plane::label).collect()
    }

    /// Whether `plane` is active
    #[inline]
    pub fn is_active(self, plane: Plane) -> bool {
        self.contains(plane.into())
    }

    /// Flip one plane on or off, returning the new state of that plane
    pub fn toggle_plane(&mut self, plane: Plane) -> bool {
        self.toggle(plane.into());
        self.is_active(plane)
    }

    /// Resolve the active planes for a shape of dimension `dim`
    ///
    /// # Errors
    /// [`GeometryError::UnknownAxis`] if any plane is active and `dim` is neither 3 nor 4.
    pub fn spin(self, dim: usize) -> Result<Spin, GeometryError> {
        let named: Vec<NamedRotation> = match dim {
            4 => self.planes().map(NamedRotation::AboutPlane).collect(),
            3 => self
                .planes()
                .filter(|p| !p.uses_w())
                .map(NamedRotation::Along)
                .collect(),
            _ => match self.planes().next() {
                Some(plane) => return Err(GeometryError::unknown_axis(plane.label(), dim)),
                None => Vec::new(),
            },
        };
        Spin::from_named(dim, &named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeStructure;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn coords_approx_eq(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    fn rotate_point(coords: &[f64], rotation: PlaneRotation, angle: f64) -> Vec<f64> {
        let mut v = [VecN::new(coords.to_vec())];
        rotation.apply(&mut v, angle);
        v[0].coords().to_vec()
    }

    #[test]
    fn test_plane_rotation_validation() {
        assert!(PlaneRotation::new(3, 0, 2).is_ok());
        assert!(PlaneRotation::new(3, 0, 3).is_err());
        assert!(PlaneRotation::new(3, 1, 1).is_err());
        assert!(PlaneRotation::new(7, 6, 0).is_ok());
    }

    #[test]
    fn test_about_x_3d_moves_y_to_z() {
        let r = NamedRotation::About(Axis::X).resolve(3).unwrap();
        let result = rotate_point(&[0.0, 1.0, 0.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[0.0, 0.0, 1.0]), "got {:?}", result);
    }

    #[test]
    fn test_about_y_3d_moves_z_to_x() {
        let r = NamedRotation::About(Axis::Y).resolve(3).unwrap();
        // x = xc + zs, z = -xs + zc
        let result = rotate_point(&[0.0, 0.0, 1.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[1.0, 0.0, 0.0]), "got {:?}", result);
    }

    #[test]
    fn test_about_z_3d_moves_x_to_y() {
        let r = NamedRotation::About(Axis::Z).resolve(3).unwrap();
        let result = rotate_point(&[1.0, 0.0, 0.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[0.0, 1.0, 0.0]), "got {:?}", result);
    }

    #[test]
    fn test_along_3d_is_about_orthogonal_axis() {
        assert_eq!(NamedRotation::Along(Plane::XY).resolve(3), NamedRotation::About(Axis::Z).resolve(3));
        assert_eq!(NamedRotation::Along(Plane::XZ).resolve(3), NamedRotation::About(Axis::Y).resolve(3));
        assert_eq!(NamedRotation::Along(Plane::YZ).resolve(3), NamedRotation::About(Axis::X).resolve(3));
    }

    #[test]
    fn test_4d_about_plane_leaves_plane_fixed() {
        let v = [0.3, -0.7, 1.1, 0.4];
        for plane in Plane::ALL {
            let r = NamedRotation::AboutPlane(plane).resolve(4).unwrap();
            let result = rotate_point(&v, r, 0.8);
            let (a, b) = plane.axes();
            assert_eq!(result[a.index()], v[a.index()], "{:?} moved {:?}", plane, a);
            assert_eq!(result[b.index()], v[b.index()], "{:?} moved {:?}", plane, b);
        }
    }

    #[test]
    fn test_4d_sign_conventions() {
        // about xw: y = yc + zs, z = -ys + zc
        let r = NamedRotation::AboutPlane(Plane::XW).resolve(4).unwrap();
        let result = rotate_point(&[0.0, 0.0, 1.0, 0.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[0.0, 1.0, 0.0, 0.0]), "got {:?}", result);

        // about xy: z = zc - ws, w = zs + wc
        let r = NamedRotation::AboutPlane(Plane::XY).resolve(4).unwrap();
        let result = rotate_point(&[0.0, 0.0, 1.0, 0.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[0.0, 0.0, 0.0, 1.0]), "got {:?}", result);

        // about yz: x = xc + ws, w = -xs + wc
        let r = NamedRotation::AboutPlane(Plane::YZ).resolve(4).unwrap();
        let result = rotate_point(&[0.0, 0.0, 0.0, 1.0], r, FRAC_PI_2);
        assert!(coords_approx_eq(&result, &[1.0, 0.0, 0.0, 0.0]), "got {:?}", result);
    }

    #[test]
    fn test_4d_along_is_about_complement() {
        for plane in Plane::ALL {
            assert_eq!(
                NamedRotation::Along(plane).resolve(4).unwrap(),
                NamedRotation::AboutPlane(plane.complement()).resolve(4).unwrap()
            );
        }
    }

    #[test]
    fn test_complement_is_involution() {
        for plane in Plane::ALL {
            assert_eq!(plane.complement().complement(), plane);
            let (a, b) = plane.axes();
            let (c, d) = plane.complement().axes();
            let mut all = [a.index(), b.index(), c.index(), d.index()];
            all.sort();
            assert_eq!(all, [0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_named_rotation_rejected_in_wrong_dimension() {
        assert!(matches!(
            NamedRotation::About(Axis::W).resolve(3),
            Err(GeometryError::UnknownAxis { .. })
        ));
        assert!(NamedRotation::AboutPlane(Plane::XY).resolve(3).is_err());
        assert!(NamedRotation::Along(Plane::XW).resolve(3).is_err());
        assert!(NamedRotation::About(Axis::X).resolve(4).is_err());
        assert!(NamedRotation::Along(Plane::XY).resolve(5).is_err());
    }

    #[test]
    fn test_spin_label_parsing() {
        let about = SpinLabel::About("z".into()).to_named(3).unwrap();
        assert_eq!(about, NamedRotation::About(Axis::Z));

        let about = SpinLabel::About("ZW".into()).to_named(4).unwrap();
        assert_eq!(about, NamedRotation::AboutPlane(Plane::ZW));

        let err = SpinLabel::Along("qq".into()).to_named(4).unwrap_err();
        assert_eq!(err, GeometryError::UnknownAxis { label: "qq".into(), dimension: 4 });
    }

    #[test]
    fn test_rotate_then_inverse_restores() {
        let mut cube = CubeStructure::generate(4).unwrap();
        let original = cube.vertices().to_vec();
        let spin = RotationState::all().spin(4).unwrap();

        spin.apply(cube.vertices_mut(), 0.37);
        for r in spin.rotations().iter().rev() {
            r.apply(cube.vertices_mut(), -0.37);
        }

        for (a, b) in cube.vertices().iter().zip(&original) {
            assert!(a.max_abs_diff(b) < EPSILON);
        }
    }

    #[test]
    fn test_rotation_composes_additively() {
        let r = NamedRotation::AboutPlane(Plane::YW).resolve(4).unwrap();
        let mut twice = CubeStructure::generate(4).unwrap();
        let mut once = twice.clone();

        r.apply(twice.vertices_mut(), 0.25);
        r.apply(twice.vertices_mut(), 0.5);
        rotate_plane(once.vertices_mut(), r, 0.75);

        for (a, b) in twice.vertices().iter().zip(once.vertices()) {
            assert!(a.max_abs_diff(b) < EPSILON);
        }
    }

    #[test]
    fn test_rotation_state_defaults_and_labels() {
        let state = RotationState::default();
        assert_eq!(state.labels(), vec!["xw", "yz"]);

        let parsed = RotationState::from_labels(&["yz", "XW"]).unwrap();
        assert_eq!(parsed, state);

        assert_eq!(
            RotationState::from_labels(&["xq"]),
            Err(GeometryError::UnknownAxis { label: "xq".into(), dimension: RotationState::LABEL_DIMENSION })
        );
    }

    #[test]
    fn test_rotation_state_toggle() {
        let mut state = RotationState::empty();
        assert!(state.toggle_plane(Plane::ZW));
        assert!(state.is_active(Plane::ZW));
        assert!(!state.toggle_plane(Plane::ZW));
        assert!(state.is_empty());
    }

    #[test]
    fn test_rotation_state_spin_3d_ignores_w() {
        let spin = RotationState::all().spin(3).unwrap();
        assert_eq!(spin.rotations().len(), 3);
        assert_eq!(spin.rotations()[0], NamedRotation::Along(Plane::XY).resolve(3).unwrap());
    }

    #[test]
    fn test_rotation_state_spin_other_dimensions() {
        assert!(RotationState::empty().spin(5).unwrap().is_empty());
        assert!(RotationState::XY.spin(5).is_err());
    }
}
