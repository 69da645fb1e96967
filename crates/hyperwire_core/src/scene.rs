//! Scene serialization
//!
//! Provides Scene struct for loading/saving scenes from RON files.
//! A scene lists the n-cubes to place, where to anchor them and how they spin.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use hyperwire_math::Vec3;
use crate::rotation::{Spin, SpinLabel};
use crate::{GeometryError, Wireframe, World, MAX_DIMENSION};

/// A serializable description of one n-cube in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    /// Optional name for lookup
    #[serde(default)]
    pub name: Option<String>,
    /// Dimension of the n-cube
    pub dimension: usize,
    /// Model translation [x, y, z]
    #[serde(default)]
    pub anchor: [f64; 3],
    /// Rotations applied every tick, in order
    #[serde(default)]
    pub spin: Vec<SpinLabel>,
    /// Whether the shape also follows the rotation toggles
    #[serde(default)]
    pub follow_toggles: bool,
}

impl ShapeTemplate {
    /// Create a template for an n-cube at the origin with no rotation
    pub fn new(dimension: usize) -> Self {
        Self {
            name: None,
            dimension,
            anchor: [0.0; 3],
            spin: Vec::new(),
            follow_toggles: false,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the anchor
    pub fn with_anchor(mut self, x: f64, y: f64, z: f64) -> Self {
        self.anchor = [x, y, z];
        self
    }

    /// Append a per-tick rotation
    pub fn with_spin(mut self, label: SpinLabel) -> Self {
        self.spin.push(label);
        self
    }

    /// Set whether the shape follows the toggles
    pub fn following_toggles(mut self, follow: bool) -> Self {
        self.follow_toggles = follow;
        self
    }

    /// Check the dimension and resolve the rotation labels, without generating vertices
    pub fn resolve_spin(&self) -> Result<Spin, GeometryError> {
        if self.dimension == 0 || self.dimension > MAX_DIMENSION {
            return Err(GeometryError::InvalidDimension(self.dimension));
        }
        Spin::from_labels(self.dimension, &self.spin)
    }

    /// Generate the n-cube and resolve its rotation labels
    pub fn to_wireframe(&self) -> Result<Wireframe, GeometryError> {
        let spin = self.resolve_spin()?;
        let mut shape = Wireframe::new(self.dimension)?
            .with_anchor(Vec3::from(self.anchor))
            .with_spin(spin)
            .following_toggles(self.follow_toggles);
        shape.name = self.name.clone();
        Ok(shape)
    }
}

/// A serializable scene containing shape templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Shape templates in this scene
    pub shapes: Vec<ShapeTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    ///
    /// Every shape is validated, so a scene that loads without error also
    /// instantiates without error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene: Scene = ron::from_str(&contents)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check every shape's dimension and rotation labels
    pub fn validate(&self) -> Result<(), GeometryError> {
        for template in &self.shapes {
            template.resolve_spin()?;
        }
        Ok(())
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a shape template to this scene
    pub fn add_shape(&mut self, shape: ShapeTemplate) {
        self.shapes.push(shape);
    }

    /// Builder form of [`add_shape`](Self::add_shape)
    pub fn with_shape(mut self, shape: ShapeTemplate) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Build a live world from the templates
    pub fn instantiate(&self) -> Result<World, GeometryError> {
        let mut world = World::with_capacity(self.shapes.len());
        for template in &self.shapes {
            world.add_shape(template.to_wireframe()?);
        }
        log::info!("Instantiated scene '{}' with {} shapes", self.name, world.shape_count());
        Ok(world)
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// A shape has an invalid dimension or rotation label
    Geometry(GeometryError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl From<GeometryError> for SceneLoadError {
    fn from(e: GeometryError) -> Self {
        SceneLoadError::Geometry(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Geometry(e) => write!(f, "Invalid shape: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_shape_scene() -> Scene {
        Scene::new("Demo")
            .with_shape(
                ShapeTemplate::new(3)
                    .with_name("cube")
                    .with_anchor(-4.0, 0.0, 0.0)
                    .with_spin(SpinLabel::About("z".into()))
                    .with_spin(SpinLabel::Along("xz".into())),
            )
            .with_shape(
                ShapeTemplate::new(4)
                    .with_name("hypercube")
                    .with_anchor(4.0, 0.0, 0.0)
                    .following_toggles(true),
            )
    }

    #[test]
    fn test_scene_new() {
        let scene = Scene::new("Test Scene");
        assert_eq!(scene.name, "Test Scene");
        assert!(scene.shapes.is_empty());
    }

    #[test]
    fn test_scene_add_shape() {
        let mut scene = Scene::new("Test");
        scene.add_shape(ShapeTemplate::new(4));
        assert_eq!(scene.shapes.len(), 1);
    }

    #[test]
    fn test_scene_serialization() {
        let scene = two_shape_scene();

        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let serialized = ron::ser::to_string_pretty(&scene, pretty).unwrap();
        assert!(serialized.contains("hypercube"));
        assert!(serialized.contains("About"));

        let deserialized: Scene = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, scene);
    }

    #[test]
    fn test_parse_scene_file_format() {
        let scene_ron = r#"
Scene(
    name: "Side by side",
    shapes: [
        ShapeTemplate(
            name: Some("cube"),
            dimension: 3,
            anchor: (-4.0, 0.0, 0.0),
            spin: [About("z"), Along("xz")],
        ),
        ShapeTemplate(
            dimension: 4,
            follow_toggles: true,
        ),
    ],
)
"#;
        let scene: Scene = ron::from_str(scene_ron).unwrap();
        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.shapes[0].spin, vec![
            SpinLabel::About("z".into()),
            SpinLabel::Along("xz".into()),
        ]);
        assert_eq!(scene.shapes[1].name, None);
        assert_eq!(scene.shapes[1].anchor, [0.0, 0.0, 0.0]);
        assert!(scene.shapes[1].spin.is_empty());
        assert!(scene.shapes[1].follow_toggles);
    }

    #[test]
    fn test_template_to_wireframe() {
        let template = ShapeTemplate::new(3)
            .with_name("cube")
            .with_anchor(-4.0, 0.0, 0.0)
            .with_spin(SpinLabel::About("z".into()));

        let shape = template.to_wireframe().unwrap();
        assert_eq!(shape.name.as_deref(), Some("cube"));
        assert_eq!(shape.anchor, Vec3::new(-4.0, 0.0, 0.0));
        assert_eq!(shape.spin().rotations().len(), 1);
        assert_eq!(shape.cube().vertex_count(), 8);
    }

    #[test]
    fn test_template_bad_label() {
        let template = ShapeTemplate::new(3).with_spin(SpinLabel::About("w".into()));
        assert!(matches!(
            template.to_wireframe(),
            Err(GeometryError::UnknownAxis { dimension: 3, .. })
        ));
    }

    #[test]
    fn test_instantiate() {
        let world = two_shape_scene().instantiate().unwrap();
        assert_eq!(world.shape_count(), 2);
        let (_, hypercube) = world.get_by_name("hypercube").unwrap();
        assert!(hypercube.follows_toggles());
        assert_eq!(hypercube.cube().edge_count(), 32);
    }

    #[test]
    fn test_instantiate_invalid_dimension() {
        let scene = Scene::new("Bad").with_shape(ShapeTemplate::new(0));
        assert_eq!(scene.instantiate().err(), Some(GeometryError::InvalidDimension(0)));
    }

    #[test]
    fn test_validate_matches_instantiate() {
        assert_eq!(two_shape_scene().validate(), Ok(()));

        let oversized = Scene::new("Big")
            .with_shape(ShapeTemplate::new(MAX_DIMENSION + 1).with_spin(SpinLabel::About("z".into())));
        assert_eq!(oversized.validate(), Err(GeometryError::InvalidDimension(MAX_DIMENSION + 1)));
        assert_eq!(oversized.validate().err(), oversized.instantiate().err());

        let bad_label = Scene::new("Bad").with_shape(ShapeTemplate::new(4).with_spin(SpinLabel::Along("z".into())));
        assert!(matches!(bad_label.validate(), Err(GeometryError::UnknownAxis { dimension: 4, .. })));
        assert_eq!(bad_label.validate().err(), bad_label.instantiate().err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load("/definitely/not/here.ron");
        assert!(matches!(result, Err(SceneLoadError::Io(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("hyperwire_scene_roundtrip.ron");
        let scene = two_shape_scene();
        scene.save(&path).unwrap();

        let loaded = Scene::load(&path).unwrap();
        assert_eq!(loaded, scene);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_shape() {
        let path = std::env::temp_dir().join("hyperwire_scene_invalid.ron");
        fs::write(&path, r#"Scene(name: "x", shapes: [ShapeTemplate(dimension: 11)])"#).unwrap();

        let result = Scene::load(&path);
        assert!(matches!(result, Err(SceneLoadError::Geometry(GeometryError::InvalidDimension(11)))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_scene_load_error_display() {
        let err = SceneLoadError::from(GeometryError::InvalidDimension(0));
        assert!(err.to_string().starts_with("Invalid shape:"));
    }
}
