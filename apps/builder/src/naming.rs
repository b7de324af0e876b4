//! Control-name scheme for repeatable form groups.
//!
//! Every control inside a repeatable group is named
//! `{prefix}-{ordinal}-{field_key}` so that the flat form namespace stays
//! unique and the assembler can recover `(ordinal, field_key)` from the name
//! alone. Field keys join multi-word parts with `_`, never `-`; the `-`
//! separator belongs to the scheme.

/// Encodes a group control name: `experience-3-job_title`.
pub fn control_name(prefix: &str, ordinal: u32, field_key: &str) -> String {
    format!("{prefix}-{ordinal}-{field_key}")
}

/// Encodes the removable-entry element id: `experienceEntry-3`.
pub fn entry_id(prefix: &str, ordinal: u32) -> String {
    format!("{prefix}Entry-{ordinal}")
}

/// A control name decoded back into its group coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub prefix: String,
    pub ordinal: u32,
    pub field_key: String,
}

/// Decodes `{prefix}-{ordinal}-{field_key}`.
///
/// Names with fewer than three `-`-delimited tokens, or whose second token
/// is not an ordinal, do not decode; callers skip such controls. Field
/// keys that arrive hyphen-split are rejoined with `_`, so
/// `experience-1-start-date` decodes to the `start_date` key.
pub fn decode_control_name(name: &str) -> Option<DecodedName> {
    let tokens: Vec<&str> = name.split('-').collect();
    if tokens.len() < 3 {
        return None;
    }
    let ordinal: u32 = tokens[1].parse().ok()?;
    Some(DecodedName {
        prefix: tokens[0].to_string(),
        ordinal,
        field_key: tokens[2..].join("_"),
    })
}
