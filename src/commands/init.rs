use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::print_scene_guard_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SceneGuardError};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_scene_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SceneGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# scene-guard configuration file

# Maximum polygon count per mesh object (inclusive, default: 50000)
max_faces = 50000

# Minimum world-space distance between any two vertices of a mesh (default: 0.001)
# Must be greater than zero.
min_vertex_distance = 0.001

# Object names must end with one of these suffixes (case-sensitive).
# An empty list makes every object fail the naming check.
allowed_name_suffixes = ["_geo", "_jnt", "_grp"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
