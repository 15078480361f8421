// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process Axum request/response helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
