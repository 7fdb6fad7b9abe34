//! Command line and environment configuration for the `bogus` binary.

use std::path::PathBuf;

use bogus_eval::EvalOptions;

/// Environment variable overriding [`EvalOptions::max_call_depth`].
pub const MAX_CALL_DEPTH_VAR: &str = "BOGUS_MAX_CALL_DEPTH";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Script to run. Starts the REPL when `None`.
    pub script: Option<PathBuf>,
    pub eval: EvalOptions,
}

impl Config {
    /// Reads the configuration from the process arguments and environment.
    pub fn from_env() -> Self {
        let max_call_depth = std::env::var(MAX_CALL_DEPTH_VAR).ok();
        Self::new(std::env::args().skip(1), max_call_depth.as_deref())
    }

    /// Builds a configuration from `args` (without the program name) and the raw
    /// value of [`MAX_CALL_DEPTH_VAR`].
    pub fn new(mut args: impl Iterator<Item = String>, max_call_depth: Option<&str>) -> Self {
        let script = args.next().map(PathBuf::from);
        if let Some(extra) = args.next() {
            tracing::warn!(%extra, "ignoring extra command line arguments");
        }

        let mut eval = EvalOptions::default();
        if let Some(raw) = max_call_depth {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => eval.max_call_depth = depth,
                _ => tracing::warn!(
                    value = raw,
                    default = eval.max_call_depth,
                    "invalid {}, using default",
                    MAX_CALL_DEPTH_VAR
                ),
            }
        }

        Self { script, eval }
    }
}
