//! Source locations
//!
//! Rinha ASTs carry a `location` object on every node: byte offsets into the
//! original source plus the file name. Locations are informational only; the
//! evaluator never branches on them, but errors and tooling can surface them.

use serde::{Deserialize, Serialize};

/// Source location of an AST node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Loc {
    /// Byte offset of the first character
    #[serde(default)]
    pub start: usize,
    /// Byte offset one past the last character
    #[serde(default)]
    pub end: usize,
    /// Name of the source file
    #[serde(default)]
    pub filename: String,
}

impl Loc {
    /// Create a location
    pub fn new(start: usize, end: usize, filename: impl Into<String>) -> Self {
        Self {
            start,
            end,
            filename: filename.into(),
        }
    }

    /// Placeholder location for synthesized nodes
    pub fn dummy() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_location_is_empty() {
        let loc = Loc::dummy();
        assert_eq!(loc.start, 0);
        assert_eq!(loc.end, 0);
        assert!(loc.filename.is_empty());
    }

    #[test]
    fn test_deserialize_location() {
        let loc: Loc = serde_json::from_str(r#"{"start":3,"end":9,"filename":"f.rinha"}"#).unwrap();
        assert_eq!(loc, Loc::new(3, 9, "f.rinha"));
    }
}
