// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading secrets from the environment.
//!
//! Credentials can be given inline (`GOOGLE_ANALYTICS_CREDENTIALS='{...}'`) or
//! as a path to a mounted file (`GOOGLE_ANALYTICS_CREDENTIALS_FILE=/run/secrets/ga4.json`),
//! which is how Docker and Kubernetes secrets usually arrive.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// `{var}_FILE` wins over `{var}`. A single trailing newline is stripped from
/// file contents. Empty inline values count as unset.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| SecretEnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(secret)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}
