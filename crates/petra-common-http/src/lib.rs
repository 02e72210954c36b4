// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Petra Foam site.
//!
//! This crate provides:
//! - A pre-configured HTTP client with consistent User-Agent header
//! - A builder variant carrying the content-source bearer credential

mod client;

pub use client::{authorized_builder, builder, new_client, user_agent, DEFAULT_TIMEOUT};
