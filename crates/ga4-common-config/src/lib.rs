// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared configuration primitives for the GA4 report tools.
//!
//! - [`Secret<T>`]: keeps credential payloads (service-account JSON, bearer
//!   tokens) out of logs, config dumps and error messages
//! - [`load_secret_env`]: reads a secret from `VAR` or from the file named by
//!   `VAR_FILE`

pub mod env;
pub mod secret;

pub use env::{load_secret_env, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
