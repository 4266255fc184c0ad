// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction.
//!
//! Every outbound call to Google goes through a client built here so the
//! `User-Agent` is the same across crates and binaries.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
