use serde::Deserialize;

/// Parameter set for one simulation invocation. Every optional field maps
/// to one override token; values are opaque strings handed through to the
/// simulation's own config parser, never validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSet {
    pub threads: u32,
    pub name: Option<String>,
    pub size: Option<String>,
    pub temperature: Option<String>,
    pub alpha: Option<String>,
    pub cmc_constraint_theta: Option<String>,
    pub cmc_constraint_phi: Option<String>,
    pub extra: Option<String>,
    pub exe: Option<String>,
}

impl ParameterSet {
    pub fn new(threads: u32) -> Self {
        Self {
            threads,
            name: None,
            size: None,
            temperature: None,
            alpha: None,
            cmc_constraint_theta: None,
            cmc_constraint_phi: None,
            extra: None,
            exe: None,
        }
    }

    pub fn parse(toml_src: &str) -> Result<Self, String> {
        toml::from_str(toml_src).map_err(|err| format!("invalid parameter file: {err}"))
    }
}
