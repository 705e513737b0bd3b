// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

pub mod config;
pub mod invoke;
pub mod log;
pub mod resolve;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::{error, info};

/// Process inputs the resolver and invoker depend on.
#[derive(Debug, Clone)]
pub struct Environment {
	/// Where the config file is looked up and mypy runs.
	pub working_dir: PathBuf,
	/// Directories searched for a fallback `mypy`, in order.
	pub search_path: Vec<PathBuf>,
}

impl Environment {
	/// Capture the current directory and `PATH`.
	pub fn from_process() -> Result<Self> {
		let working_dir = std::env::current_dir().context("Failed to determine current directory")?;
		let search_path = std::env::var_os("PATH")
			.map(|path| std::env::split_paths(&path).collect())
			.unwrap_or_default();
		Ok(Self { working_dir, search_path })
	}
}

/// Run the wrapper with a full argv (program name first), returning the exit code.
pub fn run<S: AsRef<OsStr>>(argv: &[S]) -> i32 {
	log::init();

	if argv.len() < 2 {
		let program = argv
			.first()
			.map_or(Cow::Borrowed("pre-commit-mypy"), |p| p.as_ref().to_string_lossy());
		info!("USAGE: {program} <FILE> ...");
		return 1;
	}

	let args: Vec<OsString> = argv[1..].iter().map(|arg| arg.as_ref().to_os_string()).collect();
	match Environment::from_process().and_then(|env| run_in(&env, &args)) {
		Ok(code) => code,
		Err(err) => {
			error!("{err:#}");
			1
		}
	}
}

/// Resolve mypy for `env` and run it with `args`, returning mypy's exit code.
pub fn run_in(env: &Environment, args: &[OsString]) -> Result<i32> {
	let config = resolve::resolve(env)?;
	Ok(invoke::run(&config, args, env)?)
}
