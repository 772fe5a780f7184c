//! Parsers for extracting comparable values from free-text specification fields.
//!
//! Tender documents and catalog rows describe the same attribute in many
//! spellings ("11kV", "11 kV", "3C x 185 sq.mm", "3Cx185"). Each attribute
//! gets its own small parser so the boundary cases can be unit-tested in
//! isolation:
//!
//! - [`voltage`]: leading numeric value of a voltage rating
//! - [`size`]: core count and conductor cross-section of a size designation
//! - [`standard`]: family prefix and numeric code of a standard designation
//!
//! ## Example
//!
//! ```rust
//! use rfp_solver::parsing::{size, voltage};
//!
//! assert_eq!(voltage::extract_voltage("11kV"), 11.0);
//! assert_eq!(size::extract_core_count("3C x 185 sq.mm"), 3);
//! assert_eq!(size::extract_cross_section("3C x 185 sq.mm"), 185.0);
//! ```

pub mod size;
pub mod standard;
pub mod voltage;

/// Parse the first unsigned numeric run in `s`, allowing one decimal point
/// (the shape `\d+\.?\d*`). Returns `None` when `s` contains no digit.
pub(crate) fn first_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    // Optional fractional part
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    s[start..end].parse().ok()
}

/// Parse the first run of ASCII digits in `s` as an integer.
pub(crate) fn first_integer(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    s[start..end].parse().ok()
}
