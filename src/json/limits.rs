//! Parse configuration: conformance mode and resource limits.
//!
//! The mode is always passed explicitly to the scanner and parser; nothing in
//! the crate keeps it in ambient state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conformance profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    /// Standard JSON. Extensions are parsed but diagnosed.
    Strict,
    /// Permissive superset: comments, trailing commas, unquoted names and
    /// values, single-quoted strings, `new X(...)` constructors.
    Loose,
}

impl JsonMode {
    /// Both modes, Strict first.
    pub const ALL: [JsonMode; 2] = [JsonMode::Strict, JsonMode::Loose];

    /// Returns true for [`JsonMode::Strict`].
    pub const fn is_strict(self) -> bool {
        matches!(self, JsonMode::Strict)
    }
}

impl fmt::Display for JsonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonMode::Strict => f.write_str("strict"),
            JsonMode::Loose => f.write_str("loose"),
        }
    }
}

/// Limits protecting the parser against pathological input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of objects, arrays and constructors. Going deeper
    /// abandons the parse.
    pub max_nesting_depth: usize,
}

impl Limits {
    /// Default limits for text typed interactively into an editor.
    pub const fn interactive() -> Self {
        Self {
            max_nesting_depth: 64,
        }
    }

    /// Higher limits for batch tooling that controls its own stack size.
    pub const fn lenient() -> Self {
        Self {
            max_nesting_depth: 256,
        }
    }

    /// Limits with a custom nesting depth.
    pub const fn with_max_nesting_depth(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::interactive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_limits() {
        assert_eq!(Limits::default(), Limits::interactive());
        assert_eq!(Limits::interactive().max_nesting_depth, 64);
    }

    #[test]
    fn test_lenient_limits() {
        assert!(Limits::lenient().max_nesting_depth > Limits::interactive().max_nesting_depth);
        assert_eq!(Limits::with_max_nesting_depth(3).max_nesting_depth, 3);
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&JsonMode::Strict).unwrap(), "\"strict\"");
        let mode: JsonMode = serde_json::from_str("\"loose\"").unwrap();
        assert_eq!(mode, JsonMode::Loose);
        assert_eq!(JsonMode::Loose.to_string(), "loose");
    }
}
