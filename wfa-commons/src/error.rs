//! Errors for backend configuration.
//!
//! The primitives themselves cannot fail; precondition violations are debug
//! assertions. Only reading a backend name from text or the environment is fallible.

use core::fmt;

/// Error returned when a backend name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBackendError {
    /// The input was empty or only whitespace.
    Empty,
    /// The environment variable was set but is not valid UTF-8.
    NotUnicode,
    /// The input named no known backend.
    Unknown {
        /// The rejected input, trimmed. Truncated to the first 32 bytes.
        name: [u8; 32],
        /// Number of valid bytes in `name`.
        len: usize,
    },
}

impl ParseBackendError {
    pub(crate) fn unknown(input: &str) -> Self {
        let mut name = [0u8; 32];
        let mut len = input.len().min(name.len());
        // Never split a UTF-8 sequence.
        while !input.is_char_boundary(len) {
            len -= 1;
        }
        name[..len].copy_from_slice(&input.as_bytes()[..len]);
        ParseBackendError::Unknown { name, len }
    }

    /// The rejected name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseBackendError::Empty | ParseBackendError::NotUnicode => None,
            ParseBackendError::Unknown { name, len } => core::str::from_utf8(&name[..*len]).ok(),
        }
    }
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBackendError::Empty => write!(f, "Empty backend name"),
            ParseBackendError::NotUnicode => write!(f, "Backend name is not valid UTF-8"),
            ParseBackendError::Unknown { .. } => write!(
                f,
                "Unknown backend '{}' (expected auto, hardware or software)",
                self.name().unwrap_or("?")
            ),
        }
    }
}

impl core::error::Error for ParseBackendError {}
