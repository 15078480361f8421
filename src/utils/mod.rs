// ABOUTME: Utility modules shared by the route handlers
// ABOUTME: Currently HTML escaping for the server-rendered form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

/// HTML escaping for template values
pub mod html;
