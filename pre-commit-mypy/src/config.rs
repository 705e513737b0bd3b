// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! The `.pre-commit-mypy.yaml` file.
//!
//! Only a flat mapping of strings is supported, so this is a small line grammar rather than YAML:
//! strip everything from the first `#`, trim, skip blank lines, then split once on `": "`.

use std::collections::BTreeMap;
use thiserror::Error;

/// Name of the config file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".pre-commit-mypy.yaml";

const SEPARATOR: &str = ": ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("line {line}: expected `key: value`, found `{content}`")]
	MissingSeparator { line: usize, content: String },
	#[error("unknown key `{key}` (expected `mypy` or `python`)")]
	UnknownKey { key: String },
}

/// Paths named by the config file, as written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
	pub mypy: Option<String>,
	pub python: Option<String>,
}

impl ConfigFile {
	/// Parse config text, rejecting keys other than `mypy` and `python`.
	pub fn parse(text: &str) -> Result<Self, ConfigError> {
		Self::from_mapping(parse_mapping(text)?)
	}

	pub fn from_mapping(mapping: BTreeMap<String, String>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		for (key, value) in mapping {
			match key.as_str() {
				"mypy" => config.mypy = Some(value),
				"python" => config.python = Some(value),
				_ => return Err(ConfigError::UnknownKey { key }),
			}
		}
		Ok(config)
	}
}

/// Parse config text into a flat key/value mapping.
/// Later duplicates of a key replace earlier ones.
pub fn parse_mapping(text: &str) -> Result<BTreeMap<String, String>, ConfigError> {
	let mut mapping = BTreeMap::new();
	for (idx, raw) in text.lines().enumerate() {
		let line = raw.split_once('#').map_or(raw, |(before, _comment)| before).trim();
		if line.is_empty() {
			continue;
		}
		let Some((key, value)) = line.split_once(SEPARATOR) else {
			return Err(ConfigError::MissingSeparator {
				line: idx + 1,
				content: line.to_string(),
			});
		};
		mapping.insert(key.trim().to_string(), value.to_string());
	}
	Ok(mapping)
}
