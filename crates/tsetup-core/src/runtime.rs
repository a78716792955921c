//! Detection of the JavaScript runtime that launched the bootstrap
//!
//! An explicit choice (CLI flag or `TSETUP_RUNTIME`) always wins; path
//! sniffing of the invoking executable is the last resort, since symlinks
//! and wrapper names make it unreliable.

use std::fmt;
use std::str::FromStr;

use crate::defaults::DEV_DEPENDENCIES;
use crate::error::{SetupError, SetupResult};

/// Environment variable overriding runtime detection.
pub const RUNTIME_ENV_VAR: &str = "TSETUP_RUNTIME";

/// The JavaScript runtime whose package manager installs dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Node,
    Bun,
    Deno,
}

impl Runtime {
    /// Resolve the runtime: explicit choice first, then the
    /// `TSETUP_RUNTIME` environment variable, then substring sniffing of
    /// the invoking executable's path.
    ///
    /// # Errors
    /// Returns `UnsupportedRuntime` if no source yields a known runtime.
    pub fn detect(explicit: Option<Runtime>) -> SetupResult<Runtime> {
        if let Some(runtime) = explicit {
            return Ok(runtime);
        }
        if let Ok(value) = std::env::var(RUNTIME_ENV_VAR) {
            return value.parse();
        }
        let invocation = std::env::args().next().unwrap_or_default();
        Self::from_invocation(&invocation)
    }

    /// Classify a runtime by substring of the invoking executable path.
    /// `bun` is checked before `node` so `/usr/bin/bun-node-shim` style
    /// paths resolve the same way the original ordering did.
    ///
    /// # Errors
    /// Returns `UnsupportedRuntime` if no known substring matches.
    pub fn from_invocation(path: &str) -> SetupResult<Runtime> {
        if path.contains("bun") {
            Ok(Runtime::Bun)
        } else if path.contains("deno") {
            Ok(Runtime::Deno)
        } else if path.contains("node") {
            Ok(Runtime::Node)
        } else {
            Err(SetupError::UnsupportedRuntime(path.to_string()))
        }
    }

    /// The package-manager invocation that installs the fixed dev
    /// dependencies, or `None` for runtimes that manage dependencies
    /// externally (Deno).
    #[must_use]
    pub fn install_command(self) -> Option<(&'static str, Vec<&'static str>)> {
        match self {
            Runtime::Node => {
                let mut args = vec!["install", "--save-dev"];
                args.extend(DEV_DEPENDENCIES);
                Some(("npm", args))
            }
            Runtime::Bun => {
                let mut args = vec!["add", "-d"];
                args.extend(DEV_DEPENDENCIES);
                Some(("bun", args))
            }
            Runtime::Deno => None,
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Runtime::Node => "node",
            Runtime::Bun => "bun",
            Runtime::Deno => "deno",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Runtime {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "node" => Ok(Runtime::Node),
            "bun" => Ok(Runtime::Bun),
            "deno" => Ok(Runtime::Deno),
            other => Err(SetupError::UnsupportedRuntime(other.to_string())),
        }
    }
}
