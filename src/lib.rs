//! color-map library crate.
//!
//! Enumerates every (major, minor) color label combination, numbers the pairs
//! in row-major order and prints them as a table. The modules are public so
//! the binary and the integration tests share one implementation.

pub mod color_data;
pub mod config;
pub mod generator;
pub mod pair;
pub mod printer;

pub use generator::{for_each_pair, generate, generate_from};
pub use pair::ColorPair;
pub use printer::{print_color_map, Printer};
