pub mod compose;
pub mod overrides;
pub mod params;
pub mod pipeline;
pub mod resolve;

pub use crate::pipeline::{build_launch_command, LaunchError, LaunchOptions, LaunchReport};
