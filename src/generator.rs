// src/generator.rs

//! Builds the color map: every (major, minor) combination in row-major order.
//!
//! The outer loop walks the major labels and the inner loop walks the minor
//! labels, so the pair for major `i` and minor `j` always carries index
//! `i * minor.len() + j`. Indices start at 0 and are contiguous.

use crate::color_data::{major_colors, minor_colors};
use crate::pair::ColorPair;

use log::{debug, trace};

/// Generates the color map from the built-in label tables.
pub fn generate() -> Vec<ColorPair> {
    generate_from(major_colors(), minor_colors())
}

/// Generates the color map for arbitrary label lists.
///
/// An empty list on either side yields an empty map.
pub fn generate_from<S: AsRef<str>>(major: &[S], minor: &[S]) -> Vec<ColorPair> {
    let mut pairs = Vec::with_capacity(major.len() * minor.len());
    let count = for_each_pair(major, minor, |pair| pairs.push(pair));
    debug!(
        "Generated {} color pairs ({} major x {} minor)",
        count,
        major.len(),
        minor.len()
    );
    pairs
}

/// Hands each pair to `visit` in row-major order without collecting them.
///
/// # Returns
///
/// The number of pairs visited, which is `major.len() * minor.len()`.
pub fn for_each_pair<S, F>(major: &[S], minor: &[S], mut visit: F) -> usize
where
    S: AsRef<str>,
    F: FnMut(ColorPair),
{
    let mut pair_number = 0;
    for major_label in major {
        for minor_label in minor {
            let pair = ColorPair::new(pair_number, major_label.as_ref(), minor_label.as_ref());
            trace!("Visiting pair {}", pair);
            visit(pair);
            pair_number += 1;
        }
    }
    pair_number
}
