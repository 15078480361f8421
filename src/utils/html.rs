// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered templates
// ABOUTME: Wraps html-escape for text nodes and double-quoted attribute values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

/// Escape a string for safe insertion as HTML text content
#[must_use]
pub fn escape_html_text(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}

/// Escape a string for safe insertion into a double-quoted HTML attribute value
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    html_escape::encode_double_quoted_attribute(input).into_owned()
}
