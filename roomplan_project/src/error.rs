// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while loading and saving projects.

use roomplan_layout::LayoutError;

/// Error returned when loading or saving projects.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The document is not valid JSON or misses a required field.
    #[error("malformed project data: {0}")]
    Json(#[from] serde_json::Error),
    /// The stored geometry cannot form a room (for example a zero width).
    #[error("invalid stored geometry: {0}")]
    Layout(#[from] LayoutError),
    /// The catalog has no project with this id.
    #[error("no project with id {0}")]
    NotFound(String),
}
