use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, ValidationConfig};
use crate::output::{ColorMode, write_report};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Loads the configuration for a run.
///
/// `--no-config` short-circuits to defaults; an explicit path must exist.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<ValidationConfig> {
    if no_config {
        return Ok(ValidationConfig::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Sends output to a file (atomically) or to stdout.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        write_report(path, content)?;
        announce_export(path, quiet);
    } else {
        print!("{content}");
    }
    Ok(())
}

pub(crate) fn announce_export(path: &Path, quiet: bool) {
    if !quiet {
        eprintln!("Invalid objects report exported to: {}", path.display());
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
