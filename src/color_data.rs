// src/color_data.rs

//! The two fixed label tables the color map is built from.

/// Labels for the outer enumeration axis, in enumeration order.
pub const MAJOR_COLORS: [&str; 5] = ["White", "Red", "Black", "Yellow", "Violet"];

/// Labels for the inner enumeration axis, in enumeration order.
pub const MINOR_COLORS: [&str; 5] = ["Blue", "Orange", "Green", "Brown", "Slate"];

pub fn major_colors() -> &'static [&'static str] {
    &MAJOR_COLORS
}

pub fn minor_colors() -> &'static [&'static str] {
    &MINOR_COLORS
}
