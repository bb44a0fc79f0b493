//! Docker image builds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::DockerSettings;
use crate::error::{EnvSyncError, Result};
use crate::shell::{execute_streaming, CommandOptions, CommandResult, OutputCallback};

/// A `docker build` invocation and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub command: String,
    /// Build context; the project manifests live here.
    pub cwd: PathBuf,
}

/// Plan a build of `dockerfile` with the project root as the context.
///
/// The Dockerfile is passed with `-f` relative to the root unless it is
/// the root's own `Dockerfile`.
pub fn build_plan(
    project_root: &Path,
    dockerfile: &Path,
    settings: &DockerSettings,
) -> BuildPlan {
    let dockerfile = match dockerfile.strip_prefix(project_root) {
        Ok(relative) => relative.components().collect::<PathBuf>(),
        Err(_) => dockerfile.to_path_buf(),
    };

    BuildPlan {
        command: build_command(&dockerfile, &settings.image_tag),
        cwd: project_root.to_path_buf(),
    }
}

/// The build command for a Dockerfile given relative to the context.
pub fn build_command(dockerfile: &Path, image_tag: &str) -> String {
    if dockerfile == Path::new("Dockerfile") {
        format!("docker build -t {} .", image_tag)
    } else {
        format!(
            "docker build -f {} -t {} .",
            dockerfile.display(),
            image_tag
        )
    }
}

/// Build the image from `dockerfile` in the `project_root` context,
/// streaming output to `on_output`. A non-zero exit is an error.
pub fn build_image(
    project_root: &Path,
    dockerfile: &Path,
    settings: &DockerSettings,
    on_output: OutputCallback,
) -> Result<CommandResult> {
    let plan = build_plan(project_root, dockerfile, settings);

    // Plain BuildKit progress arrives as whole lines the spinner can tail.
    let options = CommandOptions {
        cwd: Some(plan.cwd.clone()),
        env: HashMap::from([("BUILDKIT_PROGRESS".to_string(), "plain".to_string())]),
    };

    tracing::info!("Running '{}' in {}", plan.command, plan.cwd.display());
    let result = execute_streaming(&plan.command, &options, on_output)?;

    if !result.success {
        return Err(EnvSyncError::CommandFailed {
            command: plan.command,
            code: result.exit_code,
        });
    }

    Ok(result)
}
