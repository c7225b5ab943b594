use crate::cli::{CheckArgs, Cli};
use crate::config::ValidationConfig;
use crate::engine::ValidationEngine;
use crate::output::{
    ErrorOutput, OutputFormat, OutputFormatter, ValidationProgress, print_scene_guard_error,
};
use crate::scene::{Scene, SceneStats};
use crate::{EXIT_CONFIG_ERROR, EXIT_INVALID_OBJECTS, EXIT_SUCCESS};

use super::context::{announce_export, color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_scene_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // 2. Validate configuration before touching the scene
    let engine = ValidationEngine::new(config)?;
    if let Some(path) = args.save_config.as_deref() {
        engine.config().save(path)?;
        if !cli.quiet {
            eprintln!("Saved configuration to: {}", path.display());
        }
    }

    // 3. Load scene snapshot
    let scene = Scene::load(&args.scene)?;
    if cli.verbose > 0 {
        let stats = SceneStats::from_objects(&scene.objects);
        eprintln!("{}", stats.summary());
    }
    if scene.is_empty() && !cli.quiet {
        ErrorOutput::new(color_choice_to_mode(cli.color))
            .print_warning(&format!("{} contains no objects", args.scene.display()));
    }

    // 4. Validate every object
    let progress = ValidationProgress::new(scene.len() as u64, cli.quiet);
    let run = engine.run_with_progress(&scene, &progress);
    if cli.verbose > 1 {
        eprintln!(
            "Checked {} objects, {} invalid",
            scene.len(),
            run.records.len()
        );
    }

    // 5. Format and write output
    match (args.format, args.output.as_deref()) {
        (OutputFormat::Text, Some(path)) => {
            run.export(path)?;
            announce_export(path, cli.quiet);
        }
        (OutputFormat::Text, None) => write_output(None, &run.report, cli.quiet)?,
        (format, output_path) => {
            let output = format.formatter().format(&run.records)?;
            write_output(output_path, &output, cli.quiet)?;
        }
    }

    // 6. Determine exit code
    if !run.has_invalid_objects() || args.warn_only {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_INVALID_OBJECTS)
    }
}

pub(crate) fn apply_cli_overrides(config: &mut ValidationConfig, args: &CheckArgs) {
    if let Some(max_faces) = args.max_faces {
        config.max_faces = max_faces;
    }

    if let Some(min_vertex_distance) = args.min_vertex_distance {
        config.min_vertex_distance = min_vertex_distance;
    }

    if !args.suffixes.is_empty() {
        config.allowed_name_suffixes = args.suffixes.iter().cloned().collect();
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
