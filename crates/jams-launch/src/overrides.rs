use crate::params::ParameterSet;
use crate::pipeline::LaunchError;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the ordered override token list for one invocation.
///
/// Emission order is fixed regardless of which fields are present:
/// output flag, name flag, config files (input order), first h5 spin
/// state, lattice size, temperature, materials array, solver theta,
/// solver phi, raw extra. An absent field contributes no token.
///
/// Tokens carry single braces and their own double-quote wrapping; the
/// composer applies the brace-doubling pass later, once, globally.
pub fn build_overrides(
    params: &ParameterSet,
    inputs: &[PathBuf],
    outputs: &[PathBuf],
) -> Result<Vec<String>, LaunchError> {
    let mut tokens = Vec::new();

    if let Some(first) = outputs.first() {
        let dir = output_dir(first);
        fs::create_dir_all(&dir)?;
        tokens.push(format!("--output=\"{}\"", dir.display()));
    }

    if let Some(name) = &params.name {
        tokens.push(format!("--name=\"{name}\""));
    }

    // Config files are raw configuration fragments, passed verbatim.
    // A run does not have to carry one; the whole config can arrive as
    // override strings.
    for file in inputs.iter().filter(|file| has_extension(file, "cfg")) {
        tokens.push(format!("\"{}\"", file.display()));
    }

    // Only the first h5 input seeds the initial spin state.
    if let Some(file) = inputs.iter().find(|file| has_extension(file, "h5")) {
        tokens.push(format!(
            "\"lattice : {{spins=\\\"{}\\\";}};\"",
            file.display()
        ));
    }

    if let Some(size) = &params.size {
        tokens.push(format!("\"lattice : {{ size = [{size}]; }}; \""));
    }

    if let Some(temperature) = &params.temperature {
        tokens.push(format!("\"physics : {{temperature={temperature};}};\""));
    }

    if let Some(alpha) = &params.alpha {
        tokens.push(materials_block(alpha));
    }

    if let Some(theta) = &params.cmc_constraint_theta {
        tokens.push(format!("\"solver : {{cmc_constraint_theta={theta};}};\""));
    }

    if let Some(phi) = &params.cmc_constraint_phi {
        tokens.push(format!("\"solver : {{cmc_constraint_phi={phi};}};\""));
    }

    if let Some(extra) = &params.extra {
        tokens.push(format!("\"{extra}\""));
    }

    Ok(tokens)
}

// One {alpha = v;} element per comma-separated value, order preserved,
// no trimming beyond the split itself.
fn materials_block(alpha: &str) -> String {
    let mut block = String::from("\" materials = (");
    for value in alpha.split(',') {
        block.push_str(&format!(" {{alpha = {value};}}, "));
    }
    block.push_str(" );\"");
    block
}

// An output entry with no directory component lands in the working
// directory.
pub(crate) fn output_dir(first_output: &Path) -> PathBuf {
    match first_output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}
