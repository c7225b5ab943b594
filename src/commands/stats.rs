use std::fmt::Write;

use crate::cli::{Cli, StatsArgs};
use crate::output::{OutputFormat, print_scene_guard_error};
use crate::scene::{Scene, SceneStats};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_scene_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads the scene and renders its statistics.
///
/// # Errors
/// Returns an error if the scene cannot be read or parsed.
pub(crate) fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> Result<String> {
    let scene = Scene::load(&args.scene)?;
    let stats = SceneStats::from_objects(&scene.objects);
    format_stats(&stats, args.format, cli.verbose > 0)
}

pub(crate) fn format_stats(
    stats: &SceneStats,
    format: OutputFormat,
    verbose: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(stats)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "{}", stats.summary());
            if verbose {
                let _ = writeln!(output, "  Objects:  {}", stats.total_objects);
                let _ = writeln!(output, "  Vertices: {}", stats.total_vertices);
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
