// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use crate::Environment;
use crate::resolve::ResolvedConfig;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum InvokeError {
	#[error("neither `mypy` nor `python` resolved")]
	NoExecutable,
	#[error("failed to run {}", program.display())]
	Spawn {
		program: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Build the full argv for running mypy, program first.
pub fn build_command(config: &ResolvedConfig, args: &[OsString]) -> Result<Vec<OsString>, InvokeError> {
	let mut cmd: Vec<OsString> = match (&config.mypy, &config.python) {
		(Some(mypy), python) => {
			let mut cmd = vec![mypy.clone().into_os_string()];
			if let Some(python) = python {
				cmd.push("--python-executable".into());
				cmd.push(python.clone().into_os_string());
			}
			cmd
		}
		(None, Some(python)) => vec![python.clone().into_os_string(), "-m".into(), "mypy".into()],
		(None, None) => return Err(InvokeError::NoExecutable),
	};
	cmd.extend(args.iter().cloned());
	Ok(cmd)
}

/// Run mypy in `env.working_dir` with inherited stdio, wait for it, and return its exit code.
pub fn run(config: &ResolvedConfig, args: &[OsString], env: &Environment) -> Result<i32, InvokeError> {
	let argv = build_command(config, args)?;
	let (program, rest) = argv.split_first().ok_or(InvokeError::NoExecutable)?;

	info!("Will run:");
	info!("Command: {argv:?}");
	info!("CWD: {}", env.working_dir.display());

	let status = Command::new(program)
		.args(rest)
		.current_dir(&env.working_dir)
		.status()
		.map_err(|source| InvokeError::Spawn {
			program: PathBuf::from(program),
			source,
		})?;
	Ok(exit_code(status))
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
	use std::os::unix::process::ExitStatusExt;
	status.code().or_else(|| status.signal().map(|sig| 128 + sig)).unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
	status.code().unwrap_or(1)
}
