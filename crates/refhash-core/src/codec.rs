//! Canonical base32 text form.
//!
//! Digests are written with the 32 symbols `0123456789abcdefghijklmnopqrstuv`
//! (RFC 4648 "base32hex", lowercase) and no padding. Twenty bytes are exactly
//! 160 bits, so every digest maps to exactly 32 symbols with no trailing bits.
//!
//! **CRITICAL**: This alphabet is FROZEN. Changing it renames all content.

use data_encoding::{Encoding, Specification};
use once_cell::sync::Lazy;

use crate::hash::BYTE_LEN;

/// Length of the canonical text form.
pub const STRING_LEN: usize = 32;

const SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuv";

static BASE32: Lazy<Encoding> = Lazy::new(|| {
    let mut spec = Specification::new();
    spec.symbols.push_str(SYMBOLS);
    spec.encoding().expect("base32 alphabet is a valid specification")
});

/// Check that `s` is exactly 32 symbols of the canonical alphabet.
///
/// Equivalent to matching `^[0-9a-v]{32}$`.
pub fn is_canonical(s: &str) -> bool {
    s.len() == STRING_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'v'))
}

/// Encode a digest into its canonical symbols.
pub(crate) fn encode(digest: &[u8; BYTE_LEN]) -> [u8; STRING_LEN] {
    let mut out = [0u8; STRING_LEN];
    BASE32.encode_mut(digest, &mut out);
    out
}

/// Decode canonical symbols back into a digest.
///
/// Returns `None` unless `s` passes [`is_canonical`]. A canonical string that
/// then fails to decode is a codec defect and panics.
pub(crate) fn decode(s: &str) -> Option<[u8; BYTE_LEN]> {
    if !is_canonical(s) {
        return None;
    }
    let mut out = [0u8; BYTE_LEN];
    BASE32
        .decode_mut(s.as_bytes(), &mut out)
        .expect("canonical strings always decode to 20 bytes");
    Some(out)
}
