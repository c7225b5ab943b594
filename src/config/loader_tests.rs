use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/scene-guard")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_exists() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, ValidationConfig::default());
}

#[test]
fn loads_local_config_first() {
    let fs = MockFileSystem::new()
        .with_file("/project/.scene-guard.toml", "max_faces = 100")
        .with_file("/home/user/.config/scene-guard/config.toml", "max_faces = 200");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.max_faces, 100);
}

#[test]
fn falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/scene-guard/config.toml",
        "min_vertex_distance = 0.5",
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!((config.min_vertex_distance - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.max_faces, 50_000);
}

#[test]
fn missing_user_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config, ValidationConfig::default());
}

#[test]
fn load_from_explicit_path() {
    let content = r#"
max_faces = 100
min_vertex_distance = 0.01
allowed_name_suffixes = ["_geo", "_jnt"]
"#;
    let fs = MockFileSystem::new().with_file("/custom/scene.toml", content);

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom/scene.toml"))
        .unwrap();

    assert_eq!(config.max_faces, 100);
    assert_eq!(
        config.allowed_name_suffixes.iter().collect::<Vec<_>>(),
        vec!["_geo", "_jnt"]
    );
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/project/.scene-guard.toml", "max_faces = [[[");

    let result = FileConfigLoader::with_fs(fs).load();
    assert!(matches!(result, Err(SceneGuardError::TomlParse(_))));
}

#[test]
fn returns_error_for_unknown_field() {
    let fs = MockFileSystem::new().with_file("/project/.scene-guard.toml", "max_lines = 10");

    let result = FileConfigLoader::with_fs(fs).load();
    assert!(matches!(result, Err(SceneGuardError::TomlParse(_))));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load_from_path(Path::new("/does/not/exist.toml"));

    assert!(matches!(result, Err(SceneGuardError::FileAccess { .. })));
}
