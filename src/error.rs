// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types for the command line front end.

use crate::config::ConfigError;
use crate::services::{BoundaryError, GeocodeError};

/// Top-level error type.
///
/// Lookup misses are not errors; they come back as results.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Boundary data error: {0}")]
    Boundary(#[from] BoundaryError),

    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BadRequest(_) | AppError::Config(_) => 2,
            AppError::Boundary(_) | AppError::Geocode(_) | AppError::Internal(_) => 1,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
