//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building wireframe scenes, including the default
//! side-by-side cube and hypercube used when no scene file is available.

use hyperwire_core::{GeometryError, Scene, ShapeTemplate, SpinLabel, World};

/// Builder for constructing wireframe scenes
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new("Demo")
///     .add_cube([-4.0, 0.0, 0.0], "cube")
///     .add_hypercube([4.0, 0.0, 0.0], "hypercube")
///     .build()?;
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(name),
        }
    }

    /// The built-in demo: a spinning cube on the left, a hypercube driven by
    /// the rotation toggles on the right
    pub fn demo() -> Self {
        Self::new("Cube and hypercube")
            .add_cube([-4.0, 0.0, 0.0], "cube")
            .add_hypercube([4.0, 0.0, 0.0], "hypercube")
    }

    /// Add a cube turning about z and along xz every tick
    pub fn add_cube(self, anchor: [f64; 3], name: &str) -> Self {
        self.add_shape(
            ShapeTemplate::new(3)
                .with_name(name)
                .with_anchor(anchor[0], anchor[1], anchor[2])
                .with_spin(SpinLabel::About("z".to_string()))
                .with_spin(SpinLabel::Along("xz".to_string())),
        )
    }

    /// Add a hypercube that rotates according to the toggles
    pub fn add_hypercube(self, anchor: [f64; 3], name: &str) -> Self {
        self.add_shape(
            ShapeTemplate::new(4)
                .with_name(name)
                .with_anchor(anchor[0], anchor[1], anchor[2])
                .following_toggles(true),
        )
    }

    /// Add a custom shape to the scene
    ///
    /// For shapes that don't fit the standard patterns.
    pub fn add_shape(mut self, shape: ShapeTemplate) -> Self {
        self.scene.add_shape(shape);
        self
    }

    /// The scene description built so far (e.g. to save it)
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Consume the builder, returning the scene description
    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Instantiate the scene into a live World
    pub fn build(self) -> Result<World, GeometryError> {
        self.scene.instantiate()
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::demo()
    }
}
