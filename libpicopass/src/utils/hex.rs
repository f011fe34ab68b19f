//! Hexadecimal helpers used for debugging and display purposes.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
        s
    })
}

/// Same as [`bytes_to_hex`] with a single space between bytes.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
