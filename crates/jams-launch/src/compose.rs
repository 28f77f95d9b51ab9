use std::path::Path;

/// Environment variable controlling the spawned simulation's thread
/// count. Set inline in the command string; this process never reads it.
pub const THREADS_ENV_VAR: &str = "OMP_NUM_THREADS";

/// Doubles every literal brace in `input`.
///
/// The assembled command passes through one more substitution layer in
/// the calling workflow before it reaches the shell, and that layer
/// consumes a `{{`/`}}` pair back into the single brace the config
/// mini-language needs. Applied once, globally, after token assembly.
pub fn escape_braces(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Concatenates the thread export, the resolved executable and the
/// override tokens into one parenthesized shell group, with the caller's
/// log-redirection suffix appended unescaped.
pub fn compose(exe: &Path, tokens: &[String], threads: u32, log: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(tokens.len() + 2);
    parts.push(format!("export {THREADS_ENV_VAR}={threads};"));
    parts.push(exe.display().to_string());
    parts.extend(tokens.iter().cloned());
    let body = escape_braces(&parts.join("  "));
    match log {
        Some(log) => format!("({body}  {log})"),
        None => format!("({body})"),
    }
}
