// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

pub mod core;
pub mod infra;
pub mod inspector;
pub mod ioc;
