use crate::compose::compose;
use crate::overrides::{build_overrides, output_dir};
use crate::params::ParameterSet;
use crate::resolve::resolve;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub params: ParameterSet,
    pub input_files: Vec<PathBuf>,
    pub output_files: Vec<PathBuf>,
    pub log_redirection: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LaunchReport {
    pub command: String,
    pub executable: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub warnings: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("jams executable not found: {0}")]
    ExecutableNotFound(String),
}

/// Resolves the executable, builds the override tokens and composes the
/// final command string. The only filesystem mutation is creating the
/// output directory; repeat calls with identical inputs produce
/// byte-identical commands.
pub fn build_launch_command(options: &LaunchOptions) -> Result<LaunchReport, LaunchError> {
    let mut warnings = Vec::new();
    let executable = resolve(
        options.params.exe.as_deref(),
        &options.input_files,
        &mut warnings,
    )?;
    let tokens = build_overrides(&options.params, &options.input_files, &options.output_files)?;
    let command = compose(
        &executable,
        &tokens,
        options.params.threads,
        options.log_redirection.as_deref(),
    );

    Ok(LaunchReport {
        command,
        executable,
        output_dir: options.output_files.first().map(|file| output_dir(file)),
        warnings,
    })
}
