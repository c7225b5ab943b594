pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod scene;

pub use engine::{InvalidObjectRecord, ValidationEngine, ValidationRun};
pub use error::{Result, SceneGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_OBJECTS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
