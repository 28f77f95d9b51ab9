use crate::pipeline::LaunchError;
use std::env;
use std::path::{Path, PathBuf};

/// Name searched for in input files and on PATH when no explicit
/// executable is given.
pub const DEFAULT_EXE_NAME: &str = "jams";

/// Resolves the simulation executable against the process PATH.
///
/// Priority, first hit wins:
/// 1. explicit value that is an existing executable path
/// 2. explicit value searched on PATH as a bare command name; a miss
///    here is fatal, never a fallthrough to the input scan
/// 3. first input file whose basename starts with "jams" and which is
///    executable
/// 4. PATH search for the literal name "jams"
///
/// Steps 3 and 4 push a non-fatal warning before giving up.
pub fn resolve(
    explicit: Option<&str>,
    inputs: &[PathBuf],
    warnings: &mut Vec<String>,
) -> Result<PathBuf, LaunchError> {
    let path_dirs = env_path_dirs();
    resolve_with_path(explicit, inputs, &path_dirs, warnings)
}

/// Same chain as [`resolve`], with the PATH directory list supplied by
/// the caller instead of read from the environment.
pub fn resolve_with_path(
    explicit: Option<&str>,
    inputs: &[PathBuf],
    path_dirs: &[PathBuf],
    warnings: &mut Vec<String>,
) -> Result<PathBuf, LaunchError> {
    if let Some(exe) = explicit {
        let candidate = Path::new(exe);
        if is_executable(candidate) {
            return Ok(candidate.to_path_buf());
        }
        return search_path_dirs(exe, path_dirs)
            .ok_or_else(|| LaunchError::ExecutableNotFound(exe.to_string()));
    }

    if let Some(found) = inputs
        .iter()
        .find(|file| basename_has_prefix(file, DEFAULT_EXE_NAME) && is_executable(file))
    {
        return Ok(found.clone());
    }
    warnings.push("jams executable not found in params or input files".to_string());

    warnings.push(format!("searching PATH for \"{DEFAULT_EXE_NAME}\""));
    search_path_dirs(DEFAULT_EXE_NAME, path_dirs)
        .ok_or_else(|| LaunchError::ExecutableNotFound(DEFAULT_EXE_NAME.to_string()))
}

fn env_path_dirs() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).collect())
        .unwrap_or_default()
}

fn search_path_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn basename_has_prefix(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(prefix))
        .unwrap_or(false)
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
