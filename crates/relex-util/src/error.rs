//! Core error types for relex-util
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for ordered map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderedMapError {
    /// Key not found in the map
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Result type alias for ordered map operations
pub type OrderedMapResult<T> = std::result::Result<T, OrderedMapError>;
