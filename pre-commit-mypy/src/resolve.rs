// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use crate::Environment;
use crate::config::{CONFIG_FILE_NAME, ConfigError, ConfigFile};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const MYPY: &str = "mypy";

#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("failed to read {}", path.display())]
	ReadConfig {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid {CONFIG_FILE_NAME}")]
	Config(#[from] ConfigError),
	#[error("file `{}` provided in config as `{key}` does not exist", path.display())]
	MissingReferent { key: &'static str, path: PathBuf },
	#[error(
		"`mypy` not available in PATH; create `{CONFIG_FILE_NAME}` specifying paths to your `mypy` and/or `python` executables"
	)]
	ToolNotFound,
}

/// Where mypy and the interpreter live.
///
/// With `mypy` set, `python` (if any) is handed to mypy as `--python-executable`.
/// Without it, `python` must be set and mypy is run as `python -m mypy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	pub mypy: Option<PathBuf>,
	pub python: Option<PathBuf>,
}

/// Resolve the executables to use from the config file in `env.working_dir`, falling back to
/// a `mypy` on the search path.
pub fn resolve(env: &Environment) -> Result<ResolvedConfig, ResolveError> {
	let cfg_path = env.working_dir.join(CONFIG_FILE_NAME);

	let config = if cfg_path.is_file() {
		let text = std::fs::read_to_string(&cfg_path).map_err(|source| ResolveError::ReadConfig {
			path: cfg_path.clone(),
			source,
		})?;
		let file = ConfigFile::parse(&text)?;
		let config = ResolvedConfig {
			mypy: file.mypy.map(|p| env.working_dir.join(p)),
			python: file.python.map(|p| env.working_dir.join(p)),
		};
		for (key, path) in [("mypy", &config.mypy), ("python", &config.python)] {
			if let Some(path) = path.as_ref().filter(|p| !p.is_file()) {
				return Err(ResolveError::MissingReferent { key, path: path.clone() });
			}
		}
		config
	} else {
		warn!("config file {} is not present", cfg_path.display());
		ResolvedConfig { mypy: None, python: None }
	};

	if config.mypy.is_some() {
		return Ok(config);
	}

	if let Some(python) = &config.python {
		info!("`python` specified without `mypy` - using `{} -m mypy`", python.display());
		return Ok(config);
	}

	if cfg_path.is_file() {
		warn!("path to `mypy` not specified in config");
	}

	let Some(found) = find_executable(MYPY, env) else {
		return Err(ResolveError::ToolNotFound);
	};
	info!("Using `{}` available in PATH as fallback.", found.display());
	info!("Consider creating `{CONFIG_FILE_NAME}`, specifying paths to your `mypy` and/or `python` executables.");

	Ok(ResolvedConfig {
		mypy: Some(found),
		python: None,
	})
}

/// Search `env.search_path` in order for an executable file called `name`.
/// Relative entries (including empty ones) are taken relative to the working directory.
#[must_use]
pub fn find_executable(name: &str, env: &Environment) -> Option<PathBuf> {
	let file_name = format!("{name}{}", std::env::consts::EXE_SUFFIX);
	env.search_path
		.iter()
		.map(|dir| env.working_dir.join(dir).join(&file_name))
		.find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
	use std::os::unix::fs::PermissionsExt;
	std::fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
	path.is_file()
}
