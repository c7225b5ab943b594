use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::ValidationConfig;
use crate::output::{OutputFormat, print_scene_guard_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SceneGuardError};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli).map(|output| print!("{output}"))
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_scene_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has out-of-range values.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SceneGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let config = load_config(Some(config_path), false)?;
    config.validate()
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &ValidationConfig) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    let _ = writeln!(output, "  max_faces = {}", config.max_faces);
    let _ = writeln!(
        output,
        "  min_vertex_distance = {}",
        config.min_vertex_distance
    );
    let _ = writeln!(
        output,
        "  allowed_name_suffixes = {:?}",
        config.allowed_name_suffixes.iter().collect::<Vec<_>>()
    );

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
