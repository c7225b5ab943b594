#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the scene-guard binary.
#[macro_export]
macro_rules! scene_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("scene-guard"))
    };
}

/// Scene with one clean mesh and one mesh that breaks all three rules.
pub const MIXED_SCENE: &str = r#"{
  "objects": [
    {
      "name": "Box_geo",
      "kind": "mesh",
      "mesh": {
        "polygon_count": 6,
        "vertices": [
          {"position": [0.0, 0.0, 0.0]},
          {"position": [1.0, 0.0, 0.0]},
          {"position": [0.0, 1.0, 0.0]}
        ]
      }
    },
    {
      "name": "Sphere",
      "kind": "mesh",
      "mesh": {
        "polygon_count": 60000,
        "vertices": [
          {"position": [0.0, 0.0, 0.0]},
          {"position": [0.0005, 0.0, 0.0]}
        ]
      }
    },
    {"name": "Camera_grp", "kind": "other"}
  ]
}"#;

/// Scene in which every object passes the default rules.
pub const CLEAN_SCENE: &str = r#"{
  "objects": [
    {
      "name": "Box_geo",
      "kind": "mesh",
      "mesh": {
        "polygon_count": 6,
        "vertices": [
          {"position": [0.0, 0.0, 0.0]},
          {"position": [1.0, 0.0, 0.0]}
        ]
      }
    },
    {"name": "Root_jnt", "kind": "other"}
  ]
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local scene-guard config file.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".scene-guard.toml", content)
    }

    /// Writes a scene snapshot named `scene.json`.
    pub fn create_scene(&self, content: &str) -> PathBuf {
        self.create_file("scene.json", content)
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
