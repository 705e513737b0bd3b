// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

fn main() -> std::process::ExitCode {
	let args: Vec<std::ffi::OsString> = std::env::args_os().collect();
	std::process::ExitCode::from(u8::try_from(pre_commit_mypy::run(&args)).unwrap_or(1))
}
