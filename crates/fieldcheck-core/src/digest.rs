//! Content digests for form values.
//!
//! MD5 is offered for compatibility with stored hashes (cache keys, legacy
//! password columns being migrated). It is not a password hash.
use md5::{Digest, Md5};

/// Encodes a byte slice as a lowercase hexadecimal string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Returns the MD5 digest of the UTF-8 bytes of `value` as 32 lowercase hex
/// characters.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::digest::md5_hex;
///
/// assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(value: &str) -> String {
    md5_hex_bytes(value.as_bytes())
}

/// Same as [`md5_hex`] for raw bytes.
pub fn md5_hex_bytes(bytes: &[u8]) -> String {
    let digest = Md5::digest(bytes);
    hex_encode(&digest)
}
