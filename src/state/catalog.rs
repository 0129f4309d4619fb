//! Error catalog.
//!
//! Maps machine-readable error codes to the human-readable messages the UI
//! shows. Preset with the builtin codes, extendable at runtime.

use std::collections::HashMap;
use std::fmt;

/// Builtin code for a generic server-side failure.
pub const CODE_SERVER_ERROR: i64 = 500;

/// Builtin code for a generic network failure.
pub const CODE_NETWORK_ERROR: i64 = 600;

/// Catalog of error codes and their user-facing messages.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    /// Messages indexed by code
    entries: HashMap<i64, String>,
}

impl ErrorCatalog {
    /// Create a catalog preset with the builtin entries.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            CODE_SERVER_ERROR,
            "Server Error: It's not you, it's us. Try again".to_string(),
        );
        entries.insert(
            CODE_NETWORK_ERROR,
            "Network Error: Check your connection and try again".to_string(),
        );
        Self { entries }
    }

    /// Register a message for a code, overwriting any existing entry.
    pub fn register(&mut self, code: i64, message: String) {
        self.entries.insert(code, message);
    }

    /// Translate an error code into its message.
    ///
    /// Codes reach the client as raw JSON numbers, so lookup accepts any
    /// `f64`: NaN is rejected outright, and any other number without a
    /// catalog entry (unregistered, non-integral, infinite) is unknown.
    pub fn translate(&self, code: f64) -> Result<&str, CatalogError> {
        if code.is_nan() {
            return Err(CatalogError::InvalidCode);
        }

        if code.fract() == 0.0 && code >= i64::MIN as f64 && code <= i64::MAX as f64 {
            if let Some(message) = self.entries.get(&(code as i64)) {
                return Ok(message.as_str());
            }
        }

        Err(CatalogError::UnknownCode { code })
    }

    /// Check if a code has an entry.
    pub fn contains(&self, code: i64) -> bool {
        self.entries.contains_key(&code)
    }

    /// Count entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Get all registered codes.
    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Error catalog failures.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Lookup code was not a usable number
    InvalidCode,

    /// Lookup code has no catalog entry
    UnknownCode { code: f64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode => write!(f, "Error code should be a number"),
            Self::UnknownCode { code } => write!(f, "Unknown error code: {}", code),
        }
    }
}

impl std::error::Error for CatalogError {}
