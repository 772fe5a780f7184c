//! Standard designation parsing.
//!
//! Standards are quoted with a family prefix and a numeric code
//! ("IS 7098", "IEC 60502-2"). Two designations are considered the same
//! standard when the family and the code agree, regardless of punctuation
//! or part suffixes.

use crate::parsing::first_integer;

/// Family prefix of a standards body designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFamily {
    /// Bureau of Indian Standards (IS)
    Is,
    /// International Electrotechnical Commission (IEC)
    Iec,
}

/// Detect the family prefix of a standard designation.
///
/// `IEC` is checked before `IS` so that combined designations such as
/// "IS/IEC 60502" resolve to the same family on both sides of a
/// comparison. Designations from other bodies (BS, EN, ...) return `None`
/// and only match by exact normalized equality.
#[must_use]
pub fn standard_family(standard: &str) -> Option<StandardFamily> {
    if standard.contains("IEC") {
        Some(StandardFamily::Iec)
    } else if standard.contains("IS") {
        Some(StandardFamily::Is)
    } else {
        None
    }
}

/// Extract the numeric code embedded in a standard designation.
///
/// Takes the first digit run, so "IEC 60502-2" yields 60502 (the part
/// suffix is deliberately ignored).
#[must_use]
pub fn standard_code(standard: &str) -> Option<u64> {
    first_integer(standard)
}
