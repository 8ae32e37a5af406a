//! Fixed-width NUL-terminated string fields

use super::types::NAME_FIELD_LEN;
use crate::model::bounded_name;

/// Encode a string into a NUL-padded field
///
/// Content is truncated to `NAME_FIELD_LEN - 1` bytes on a character
/// boundary so the field always keeps its terminator.
pub fn encode_fixed(s: &str) -> [u8; NAME_FIELD_LEN] {
    let mut field = [0u8; NAME_FIELD_LEN];
    let bytes = bounded_name(s).as_bytes();
    field[..bytes.len()].copy_from_slice(bytes);
    field
}

/// Decode a field up to its first NUL
///
/// Returns `None` if the field has no terminator. Invalid UTF-8
/// (e.g. Latin-1 names from older files) is replaced, not rejected.
pub fn decode_fixed(field: &[u8; NAME_FIELD_LEN]) -> Option<String> {
    let end = field.iter().position(|&b| b == 0)?;
    Some(String::from_utf8_lossy(&field[..end]).into_owned())
}
