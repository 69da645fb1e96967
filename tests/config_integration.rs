//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperwire::config::{AppConfig, RenderMode};
use hyperwire::scene::SceneBuilder;
use hyperwire_core::Scene;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HW_ANIMATION__FROZEN", "true");
    std::env::set_var("HW_RENDERING__MODE", "tubes");
    let config = AppConfig::load().unwrap();
    assert!(config.animation.frozen);
    assert_eq!(config.rendering.mode, RenderMode::Tubes);
    std::env::remove_var("HW_ANIMATION__FROZEN");
    std::env::remove_var("HW_RENDERING__MODE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HW_ANIMATION__FROZEN");
    std::env::remove_var("HW_RENDERING__MODE");

    let cwd = std::env::current_dir().unwrap();
    println!("config/default.toml exists: {}", cwd.join("config/default.toml").exists());
    println!("config/user.toml exists: {}", cwd.join("config/user.toml").exists());

    let config = AppConfig::load().unwrap();
    assert!(config.tick_controls().is_ok());
    assert!(!config.scene.path.is_empty());
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("/definitely/not/a/config/dir").unwrap();
    assert_eq!(config.animation.angle_per_tick, 0.005);
    assert_eq!(config.rotation.planes, vec!["xw", "yz"]);
}

#[test]
fn test_default_scene_file_matches_demo() {
    let scene = Scene::load("scenes/default.ron").unwrap();
    assert_eq!(scene, SceneBuilder::demo().into_scene());
}
