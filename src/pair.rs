// src/pair.rs

//! Defines `ColorPair`, a single indexed (major, minor) combination.
//!
//! Pairs are produced by `crate::generator` and are read-only afterwards; the
//! fields are private so the index invariant set up by the generator cannot
//! be broken by callers.

use serde::Serialize;
use std::fmt;

/// One entry of the color map.
///
/// Serializable for export only. There is no `Deserialize` impl, so a pair
/// cannot be built from outside the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    index: usize,
    major: String,
    minor: String,
}

impl ColorPair {
    pub(crate) fn new(index: usize, major: &str, minor: &str) -> Self {
        ColorPair {
            index,
            major: major.to_string(),
            minor: minor.to_string(),
        }
    }

    /// Zero-based position of this pair in row-major order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }
}

impl fmt::Display for ColorPair {
    /// Renders the pair as `<index> | <major> | <minor>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.index, self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_pipe_separated_columns() {
        let pair = ColorPair::new(7, "Red", "Green");
        assert_eq!(pair.to_string(), "7 | Red | Green");
    }

    #[test]
    fn accessors_return_construction_values() {
        let pair = ColorPair::new(24, "Violet", "Slate");
        assert_eq!(pair.index(), 24);
        assert_eq!(pair.major(), "Violet");
        assert_eq!(pair.minor(), "Slate");
    }

    #[test]
    fn serializes_with_named_fields() {
        let pair = ColorPair::new(12, "Black", "Green");
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({ "index": 12, "major": "Black", "minor": "Green" }));
    }
}
